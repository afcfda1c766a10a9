//=========================================================================
// Player Controller
//=========================================================================
//
// Intent sink for the player's character. The in-game scene writes
// movement, look direction and activity requests here; the world step
// carries activities out.
//
// Activities:
//   EnterVehicle { vehicle, elapsed }  → seats the character after
//                                        ENTER_VEHICLE_SECONDS
//   ExitVehicle                        → unseats on the next step
//
// Setting a new activity replaces the current one immediately.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::debug;

//=== Internal Dependencies ===============================================

use super::object::{EntityId, ObjectPool};
use crate::core::camera::CameraAngles;

//=== Constants ===========================================================

/// Search radius for `enter_nearest_vehicle`.
pub const ENTER_VEHICLE_RANGE: f32 = 10.0;

/// Time it takes to climb into a vehicle.
pub const ENTER_VEHICLE_SECONDS: f32 = 1.0;

//=== Activity ============================================================

/// Something the character is busy doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    EnterVehicle { vehicle: EntityId, elapsed: f32 },
    ExitVehicle,
}

/// Activity discriminant for queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    EnterVehicle,
    ExitVehicle,
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::EnterVehicle { .. } => ActivityKind::EnterVehicle,
            Self::ExitVehicle => ActivityKind::ExitVehicle,
        }
    }
}

//=== PlayerController ====================================================

#[derive(Debug, Clone)]
pub struct PlayerController {
    character: EntityId,
    input_enabled: bool,
    running: bool,
    move_direction: Vec3,
    look_direction: CameraAngles,
    jump_requested: bool,
    activity: Option<Activity>,
}

impl PlayerController {
    pub fn new(character: EntityId) -> Self {
        Self {
            character,
            input_enabled: true,
            running: true,
            move_direction: Vec3::ZERO,
            look_direction: CameraAngles::default(),
            jump_requested: false,
            activity: None,
        }
    }

    pub fn character(&self) -> EntityId {
        self.character
    }

    //--- Input Gate -------------------------------------------------------

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    //--- Movement Intent --------------------------------------------------

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_move_direction(&mut self, direction: Vec3) {
        self.move_direction = direction;
    }

    pub fn move_direction(&self) -> Vec3 {
        self.move_direction
    }

    pub fn set_look_direction(&mut self, angles: CameraAngles) {
        self.look_direction = angles;
    }

    pub fn look_direction(&self) -> CameraAngles {
        self.look_direction
    }

    pub fn jump(&mut self) {
        self.jump_requested = true;
    }

    /// Returns and clears a pending jump request.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }

    //--- Activities -------------------------------------------------------

    pub fn activity(&self) -> Option<&Activity> {
        self.activity.as_ref()
    }

    pub fn is_current_activity(&self, kind: ActivityKind) -> bool {
        self.activity.map(|a| a.kind()) == Some(kind)
    }

    /// Abandons whatever the character is doing.
    pub fn skip_activity(&mut self) {
        if let Some(activity) = self.activity.take() {
            debug!("Player skipped activity {:?}", activity.kind());
        }
    }

    /// Requests leaving the current vehicle.
    pub fn exit_vehicle(&mut self) {
        self.activity = Some(Activity::ExitVehicle);
    }

    /// Starts walking into the closest free vehicle in range.
    ///
    /// Returns `false` (and leaves the activity untouched) when there is
    /// none.
    pub fn enter_nearest_vehicle(&mut self, objects: &ObjectPool) -> bool {
        let Some(position) = objects.get(self.character).map(|c| c.position()) else {
            return false;
        };

        match objects.nearest_vehicle(position, ENTER_VEHICLE_RANGE) {
            Some(vehicle) => {
                debug!("Player entering vehicle {:?}", vehicle);
                self.activity = Some(Activity::EnterVehicle { vehicle, elapsed: 0.0 });
                true
            }
            None => false,
        }
    }

    /// Advances the current activity by one world step.
    pub(crate) fn update_activity(&mut self, objects: &mut ObjectPool, dt: f32) {
        match self.activity {
            Some(Activity::EnterVehicle { vehicle, elapsed }) => {
                let elapsed = elapsed + dt;
                if elapsed < ENTER_VEHICLE_SECONDS {
                    self.activity = Some(Activity::EnterVehicle { vehicle, elapsed });
                    return;
                }
                self.activity = None;
                self.seat(objects, vehicle);
            }
            Some(Activity::ExitVehicle) => {
                self.activity = None;
                self.unseat(objects);
            }
            None => {}
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn seat(&self, objects: &mut ObjectPool, vehicle: EntityId) {
        let Some(seat_position) = objects.get_mut(vehicle).and_then(|object| {
            let position = object.position();
            let data = object.as_vehicle_mut()?;
            if data.driver.is_some() {
                return None;
            }
            data.driver = Some(self.character);
            Some(position)
        }) else {
            debug!("Vehicle {:?} unavailable, entering cancelled", vehicle);
            return;
        };

        if let Some(character) = objects.get_mut(self.character) {
            character.set_position(seat_position);
            if let Some(data) = character.as_character_mut() {
                data.current_vehicle = Some(vehicle);
            }
        }
    }

    fn unseat(&self, objects: &mut ObjectPool) {
        let Some(vehicle) = objects.vehicle_of(self.character) else {
            return;
        };

        let mut exit_position = None;
        if let Some(object) = objects.get_mut(vehicle) {
            let side = object
                .as_vehicle()
                .map(|data| data.dimensions.x * 0.5 + 1.0)
                .unwrap_or(1.0);
            exit_position = Some(object.position() + object.rotation() * Vec3::new(-side, 0.0, 0.0));
            if let Some(data) = object.as_vehicle_mut() {
                data.driver = None;
            }
        }

        if let Some(character) = objects.get_mut(self.character) {
            if let Some(position) = exit_position {
                character.set_position(position);
            }
            if let Some(data) = character.as_character_mut() {
                data.current_vehicle = None;
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
