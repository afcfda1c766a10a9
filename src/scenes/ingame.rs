//=========================================================================
// In-Game Scene
//=========================================================================
//
// Hosts the playable session: owns the camera rig and the money ticker,
// drives player intent and the HUD.
//
// Architecture:
//   on_enter (first activation only)
//     └─ session choice → campaign start | test scenario | save load
//
//   update
//     ├─ rig.tick_timer
//     ├─ money.advance                (1/30 s sub-steps)
//     └─ player present → rig.auto_look → apply_player_input
//
//   handle_event
//     ├─ commands (not consumed)      Pause | OpenDebug | SkipCutscene | CycleCamera
//     └─ player input                 item use, inventory, mouse look
//
//   draw
//     └─ rig.compute_pose → set_view → HUD (not cinematic, cutscene done)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::GameScene;
use crate::core::camera::CameraRig;
use crate::core::gameplay::{apply_player_input, MoneyTicker};
use crate::core::globals::{GameContext, SessionStart};
use crate::core::input::{Command, Control, InputEvent, MouseButton};
use crate::core::render::Renderer;
use crate::core::scene::{EventFlow, Scene, SceneTransition};
use crate::core::world::{GameWorld, PickupKind};

//=== Session Constants ===================================================

const CAMPAIGN_SCRIPT: &str = "data/main.scm";
const BACKGROUND_AUDIO: &str = "/audio/City.wav";

const TEST_PLAYER_POSITION: Vec3 = Vec3::new(270.0, -605.0, 40.0);
const TEST_PICKUP_ORIGIN: Vec3 = Vec3::new(276.5, -609.0, 36.5);
const TEST_PICKUP_SPACING: f32 = 2.5;
const TEST_VEHICLE_ORIGIN: Vec3 = Vec3::new(286.0, -591.0, 37.0);
const TEST_VEHICLE_SPACING: Vec3 = Vec3::new(5.0, 0.0, 0.0);
const TEST_VEHICLE_MODELS: [u16; 5] = [90, 92, 93, 98, 111];

//=== IngameScene =========================================================

#[derive(Debug)]
pub struct IngameScene {
    rig: CameraRig,
    money: MoneyTicker,
    started: bool,
}

impl IngameScene {
    pub fn new() -> Self {
        Self {
            rig: CameraRig::new(false, true),
            money: MoneyTicker::new(),
            started: false,
        }
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    //--- Session Start ----------------------------------------------------

    fn start_session(&mut self, context: &mut GameContext<GameScene>) {
        context.world.reset_session();
        self.rig.apply_config(&context.config);
        self.rig.reset();
        self.money.reset();

        match context.session.take() {
            Some(SessionStart::NewGame) => start_campaign(&mut context.world),
            Some(SessionStart::Test) => spawn_test_scenario(&mut context.world),
            Some(SessionStart::LoadSave(save)) => {
                info!("Loading save {}", save);
                context.world.session().load_game(&save);
            }
            None => debug!("No session chosen, entering an empty world"),
        }

        self.started = true;
    }

    //--- Event Handling ---------------------------------------------------

    fn handle_command(&mut self, context: &mut GameContext<GameScene>, command: Command) {
        match command {
            Command::Pause => context.scene_transitions.push(SceneTransition::Push(GameScene::Pause)),
            Command::OpenDebug => {
                context.debug_view = Some(self.rig.pose());
                context.scene_transitions.push(SceneTransition::Push(GameScene::Debug));
            }
            Command::SkipCutscene => {
                if context.world.state.current_cutscene.is_some() {
                    context.world.state.skip_cutscene = true;
                }
            }
            Command::CycleCamera => {
                self.rig.cycle_mode();
            }
        }
    }

    fn handle_player_input(&mut self, context: &mut GameContext<GameScene>, event: &InputEvent) {
        let Some(character) = context
            .world
            .player()
            .filter(|player| player.is_input_enabled())
            .map(|player| player.character())
        else {
            return;
        };

        match *event {
            InputEvent::MouseButtonDown { button: MouseButton::Left, .. }
            | InputEvent::MouseButtonUp { button: MouseButton::Left, .. } => {
                let active = matches!(event, InputEvent::MouseButtonDown { .. });
                if let Some(data) = context
                    .world
                    .objects
                    .get_mut(character)
                    .and_then(|object| object.as_character_mut())
                {
                    data.use_item(active, true);
                }
            }
            InputEvent::MouseWheel { delta } if delta != 0.0 => {
                if let Some(data) = context
                    .world
                    .objects
                    .get_mut(character)
                    .and_then(|object| object.as_character_mut())
                {
                    data.cycle_inventory(delta > 0.0);
                }
            }
            InputEvent::MouseMotion { dx, dy } if context.window.focused => {
                if let Some((width, height)) = context.window.size() {
                    self.rig.apply_mouse_look(dx / width, dy / height);
                }
            }
            _ => {}
        }
    }
}

impl Default for IngameScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<GameScene> for IngameScene {
    fn on_enter(&mut self, context: &mut GameContext<GameScene>) {
        if !self.started {
            self.start_session(context);
        }
    }

    fn on_exit(&mut self, _context: &mut GameContext<GameScene>) {
        self.rig.reset();
        self.started = false;
    }

    fn update(&mut self, context: &mut GameContext<GameScene>, dt: f32) {
        self.rig.tick_timer(dt);
        self.money.advance(&mut context.world.state.player_info, dt);

        if context.world.player().is_some() {
            self.rig.auto_look(&context.world, dt);
            apply_player_input(&mut context.world, self.rig.angles());
        }
    }

    fn draw(&mut self, context: &GameContext<GameScene>, renderer: &mut dyn Renderer, alpha: f32) {
        let world = &context.world;
        let enabled = world.player().is_some_and(|player| player.is_input_enabled());
        let controls = world.state.controls.sampler(enabled);
        let look_left = controls.held(Control::LookLeft);
        let look_right = controls.held(Control::LookRight);

        let pose = self.rig.compute_pose(world, alpha, look_left, look_right);
        renderer.set_view(&pose);

        if !world.state.is_cinematic && world.state.is_cutscene_done() {
            renderer.draw_hud(&pose, world);
        }
    }

    fn handle_event(
        &mut self,
        context: &mut GameContext<GameScene>,
        event: &InputEvent,
    ) -> EventFlow {
        if let Some(command) = context.input.command_for(event) {
            self.handle_command(context, command);
        }

        self.handle_player_input(context, event);
        EventFlow::Continue
    }

    fn should_world_update(&self) -> bool {
        true
    }
}

//=== Session Helpers =====================================================

fn start_campaign(world: &mut GameWorld) {
    info!("Starting new game");
    let audio = world.data.data_file(BACKGROUND_AUDIO);
    let session = world.session();
    session.start_script(CAMPAIGN_SCRIPT);
    session.start_thread(0);
    session.play_background(&audio);
}

/// Player, one street pickup per weapon (skipping unarmed) and a row of
/// vehicles.
fn spawn_test_scenario(world: &mut GameWorld) {
    info!("Spawning test scenario");
    world.create_player(TEST_PLAYER_POSITION);

    let models: Vec<u16> = world.data.weapons.iter().skip(1).map(|w| w.model_id).collect();
    let mut pickup_position = TEST_PICKUP_ORIGIN;
    for model_id in models {
        world.create_pickup(pickup_position, model_id, PickupKind::OnStreet);
        pickup_position.x += TEST_PICKUP_SPACING;
    }

    let rotation = Quat::from_rotation_z(90f32.to_radians());
    let mut vehicle_position = TEST_VEHICLE_ORIGIN;
    for model_id in TEST_VEHICLE_MODELS {
        world.create_vehicle(model_id, vehicle_position, rotation);
        vehicle_position += rotation * TEST_VEHICLE_SPACING;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
