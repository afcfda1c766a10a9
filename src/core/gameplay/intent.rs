//=========================================================================
// Player Intent
//=========================================================================
//
// Translates the sampled control state into player controller intent:
// movement vector, running, jumping, vehicle enter/exit and look
// direction.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Vec2, Vec3};

//=== Internal Dependencies ===============================================

use crate::core::camera::CameraAngles;
use crate::core::input::Control;
use crate::core::world::{ActivityKind, GameWorld};

//=== Constants ===========================================================

/// Squared movement length that cancels a pending vehicle entry.
const SKIP_ENTER_THRESHOLD: f32 = 0.001;

/// Movement length below which the character stands still.
const MOVE_DEADZONE: f32 = 0.1;

const SPRINT_SPEED: f32 = 2.0;
const BASE_SPEED: f32 = 1.0;

//=== Translation =========================================================

/// Applies one tick of player intent from the current control snapshot.
///
/// Does nothing without a live player. In a vehicle only the handbrake and
/// the raw movement vector are forwarded; on foot the movement is
/// normalised, scaled by the sprint speed and mapped onto the ground plane.
pub fn apply_player_input(world: &mut GameWorld, angles: CameraAngles) {
    let GameWorld { objects, state, player, .. } = world;

    let Some(player) = player
        .as_mut()
        .filter(|player| objects.contains(player.character()))
    else {
        return;
    };

    let controls = state.controls.sampler(player.is_input_enabled());

    let movement = Vec2::new(
        controls.value(Control::GoForward) - controls.value(Control::GoBackwards),
        controls.value(Control::GoLeft) - controls.value(Control::GoRight),
    );
    let speed = if controls.held(Control::Sprint) {
        SPRINT_SPEED
    } else {
        BASE_SPEED
    };

    player.set_running(!controls.held(Control::Walk));

    let vehicle = objects.vehicle_of(player.character());

    //--- Vehicle Enter / Exit ---------------------------------------------

    if controls.pressed(Control::EnterExitVehicle) {
        if vehicle.is_some() {
            player.exit_vehicle();
        } else if !player.is_current_activity(ActivityKind::EnterVehicle) {
            player.enter_nearest_vehicle(objects);
        }
    } else if movement.length_squared() > SKIP_ENTER_THRESHOLD
        && player.is_current_activity(ActivityKind::EnterVehicle)
    {
        player.skip_activity();
    }

    //--- Driving ----------------------------------------------------------

    if let Some(vehicle) = vehicle {
        if let Some(data) = objects.get_mut(vehicle).and_then(|o| o.as_vehicle_mut()) {
            data.handbrake = controls.held(Control::Handbrake);
        }
        player.set_move_direction(movement.extend(0.0));
        return;
    }

    //--- On Foot ----------------------------------------------------------

    if controls.pressed(Control::Jump) {
        player.jump();
    }

    let direction = if movement.length() > MOVE_DEADZONE {
        let scaled = movement.normalize() * speed;
        Vec3::new(scaled.x, 0.0, scaled.y)
    } else {
        Vec3::ZERO
    };
    player.set_move_direction(direction);
    player.set_look_direction(angles);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    use crate::core::input::ControlSnapshot;
    use crate::core::world::{Activity, Collaborators, EntityId, GameData};

    const EPS: f32 = 1e-5;

    //--- Test Helpers -----------------------------------------------------

    fn world_with_player() -> (GameWorld, EntityId) {
        let mut world = GameWorld::new(GameData::default(), Collaborators::null());
        let player = world.create_player(Vec3::ZERO);
        (world, player)
    }

    fn hold(world: &mut GameWorld, controls: &[Control]) {
        let mut snapshot = ControlSnapshot::default();
        for &control in controls {
            snapshot.set(control, 1.0);
        }
        world.state.controls.advance(snapshot);
    }

    fn seat(world: &mut GameWorld, character: EntityId, vehicle: EntityId) {
        if let Some(data) = world.objects.get_mut(character).and_then(|o| o.as_character_mut()) {
            data.current_vehicle = Some(vehicle);
        }
        if let Some(data) = world.objects.get_mut(vehicle).and_then(|o| o.as_vehicle_mut()) {
            data.driver = Some(character);
        }
    }

    fn move_direction(world: &GameWorld) -> Vec3 {
        world.player().map(|p| p.move_direction()).unwrap_or(Vec3::NAN)
    }

    //=====================================================================
    // On Foot Tests
    //=====================================================================

    #[test]
    fn forward_walks_at_base_speed() {
        let (mut world, _) = world_with_player();
        hold(&mut world, &[Control::GoForward]);

        apply_player_input(&mut world, CameraAngles::default());

        assert!(move_direction(&world).abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn sprint_doubles_forward_speed() {
        let (mut world, _) = world_with_player();
        hold(&mut world, &[Control::GoForward, Control::Sprint]);

        apply_player_input(&mut world, CameraAngles::default());

        assert!(move_direction(&world).abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn diagonal_is_normalised_onto_ground_plane() {
        let (mut world, _) = world_with_player();
        hold(&mut world, &[Control::GoForward, Control::GoLeft]);

        apply_player_input(&mut world, CameraAngles::default());

        let direction = move_direction(&world);
        assert!((direction.length() - 1.0).abs() < EPS);
        assert_eq!(direction.y, 0.0);
        assert!(direction.x > 0.0 && direction.z > 0.0);
    }

    #[test]
    fn opposing_controls_stand_still() {
        let (mut world, _) = world_with_player();
        hold(&mut world, &[Control::GoForward, Control::GoBackwards]);

        apply_player_input(&mut world, CameraAngles::default());

        assert_eq!(move_direction(&world), Vec3::ZERO);
    }

    #[test]
    fn walk_disables_running() {
        let (mut world, _) = world_with_player();
        hold(&mut world, &[Control::Walk]);

        apply_player_input(&mut world, CameraAngles::default());

        assert!(!world.player().map(|p| p.is_running()).unwrap_or(true));
    }

    #[test]
    fn jump_fires_once_per_press() {
        let (mut world, _) = world_with_player();
        hold(&mut world, &[Control::Jump]);
        apply_player_input(&mut world, CameraAngles::default());
        assert!(world.player_mut().map(|p| p.take_jump()).unwrap_or(false));

        hold(&mut world, &[Control::Jump]);
        apply_player_input(&mut world, CameraAngles::default());
        assert!(!world.player_mut().map(|p| p.take_jump()).unwrap_or(true));
    }

    #[test]
    fn released_jump_does_not_linger_across_steps() {
        let (mut world, _) = world_with_player();
        hold(&mut world, &[Control::Jump]);
        apply_player_input(&mut world, CameraAngles::default());
        world.step(1.0 / 60.0);

        for _ in 0..600 {
            hold(&mut world, &[]);
            apply_player_input(&mut world, CameraAngles::default());
            world.step(1.0 / 60.0);
        }

        assert!(!world.player_mut().map(|p| p.take_jump()).unwrap_or(true));
    }

    #[test]
    fn look_direction_follows_camera() {
        let (mut world, _) = world_with_player();
        hold(&mut world, &[]);
        let angles = CameraAngles::new(1.2, 1.0);

        apply_player_input(&mut world, angles);

        assert_eq!(world.player().map(|p| p.look_direction()), Some(angles));
    }

    #[test]
    fn disabled_input_zeroes_movement() {
        let (mut world, _) = world_with_player();
        if let Some(player) = world.player_mut() {
            player.set_input_enabled(false);
            player.set_move_direction(Vec3::ONE);
        }
        hold(&mut world, &[Control::GoForward, Control::Jump, Control::Walk]);

        apply_player_input(&mut world, CameraAngles::default());

        let player = world.player().unwrap();
        assert_eq!(player.move_direction(), Vec3::ZERO);
        assert!(player.is_running());
    }

    #[test]
    fn missing_player_is_ignored() {
        let mut world = GameWorld::new(GameData::default(), Collaborators::null());
        hold(&mut world, &[Control::GoForward]);

        apply_player_input(&mut world, CameraAngles::default());

        assert!(world.player().is_none());
    }

    //=====================================================================
    // Vehicle Tests
    //=====================================================================

    #[test]
    fn enter_press_starts_entering_nearest_vehicle() {
        let (mut world, _) = world_with_player();
        let car = world.create_vehicle(90, Vec3::new(3.0, 0.0, 0.0), Quat::IDENTITY);
        hold(&mut world, &[Control::EnterExitVehicle]);

        apply_player_input(&mut world, CameraAngles::default());

        let activity = world.player().and_then(|p| p.activity().copied());
        assert!(matches!(activity, Some(Activity::EnterVehicle { vehicle, .. }) if vehicle == car));
    }

    #[test]
    fn movement_cancels_pending_entry() {
        let (mut world, _) = world_with_player();
        world.create_vehicle(90, Vec3::new(3.0, 0.0, 0.0), Quat::IDENTITY);
        hold(&mut world, &[Control::EnterExitVehicle]);
        apply_player_input(&mut world, CameraAngles::default());

        hold(&mut world, &[Control::GoRight]);
        apply_player_input(&mut world, CameraAngles::default());

        assert!(world.player().and_then(|p| p.activity()).is_none());
    }

    #[test]
    fn exit_press_in_vehicle_skips_on_foot_logic() {
        let (mut world, player) = world_with_player();
        let car = world.create_vehicle(90, Vec3::ZERO, Quat::IDENTITY);
        seat(&mut world, player, car);
        let angles = CameraAngles::new(0.7, 1.0);
        hold(&mut world, &[Control::EnterExitVehicle, Control::GoForward, Control::Jump]);

        apply_player_input(&mut world, angles);

        let controller = world.player_mut().unwrap();
        assert!(controller.is_current_activity(ActivityKind::ExitVehicle));
        assert!(controller.move_direction().abs_diff_eq(Vec3::X, EPS));
        assert_ne!(controller.look_direction(), angles);
        assert!(!controller.take_jump());
    }

    #[test]
    fn handbrake_follows_held_control() {
        let (mut world, player) = world_with_player();
        let car = world.create_vehicle(90, Vec3::ZERO, Quat::IDENTITY);
        seat(&mut world, player, car);

        hold(&mut world, &[Control::Handbrake]);
        apply_player_input(&mut world, CameraAngles::default());
        let braking = |w: &GameWorld| w.objects.get(car).and_then(|o| o.as_vehicle()).map(|v| v.handbrake);
        assert_eq!(braking(&world), Some(true));

        hold(&mut world, &[]);
        apply_player_input(&mut world, CameraAngles::default());
        assert_eq!(braking(&world), Some(false));
    }

    #[test]
    fn vehicle_receives_raw_movement() {
        let (mut world, player) = world_with_player();
        let car = world.create_vehicle(90, Vec3::ZERO, Quat::IDENTITY);
        seat(&mut world, player, car);
        hold(&mut world, &[Control::GoForward, Control::GoLeft, Control::Sprint]);

        apply_player_input(&mut world, CameraAngles::default());

        assert!(move_direction(&world).abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), EPS));
    }
}
