//=========================================================================
// Game Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains the scene manager and the renderer the scenes draw through.
// Systems operate on GameContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::GameContext;
use crate::core::input::InputEvent;
use crate::core::render::{NullRenderer, Renderer};
use crate::core::scene::{SceneKey, SceneManager};

//=== GameSystems =========================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `scene_manager`: Stack-based scene lifecycle manager
/// - `renderer`: Drawing backend handed to scenes each frame
pub struct GameSystems<S: SceneKey> {
    pub scene_manager: SceneManager<S>,
    pub renderer: Box<dyn Renderer>,
}

impl<S: SceneKey> GameSystems<S> {
    /// Creates a systems container that draws nowhere.
    pub(crate) fn new() -> Self {
        Self::with_renderer(Box::new(NullRenderer))
    }

    pub(crate) fn with_renderer(renderer: Box<dyn Renderer>) -> Self {
        Self {
            scene_manager: SceneManager::new(),
            renderer,
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one logic tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Events**: feed the input tracker, dispatch each event to the top scene
    /// 2. **Controls**: sample bindings and advance the control double buffer
    /// 3. **Scenes**: update active scenes
    /// 4. **World**: step the world if the top scene asks for it
    /// 5. **Draw**: draw the scene stack bottom-up
    /// 6. **Transitions**: apply queued scene transitions
    pub(crate) fn update(
        &mut self,
        context: &mut GameContext<S>,
        batches: &[Vec<InputEvent>],
        dt: f32,
    ) {
        // 1. Events
        for event in batches.iter().flatten() {
            context.input.process_event(event);
            self.scene_manager.dispatch_event(context, event);
        }

        // 2. Controls
        let snapshot = context.input.sample();
        context.world.state.controls.advance(snapshot);

        // 3. Scenes
        self.scene_manager.update(context, dt);

        // 4. World
        if self.scene_manager.should_world_update() {
            context.world.step(dt);
        } else {
            trace!("World frozen this tick");
        }

        // 5. Draw (lockstep with the tick, no interpolation)
        self.scene_manager.draw(context, self.renderer.as_mut(), 1.0);

        // 6. Transitions
        self.scene_manager.process_transitions(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::input::{Control, KeyCode, Modifiers};
    use crate::core::scene::{EventFlow, Scene, SceneTransition};
    use crate::core::world::{Collaborators, GameData, GameWorld};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Play,
        Overlay,
    }

    impl SceneKey for TestScene {}

    //--- Test Helpers -----------------------------------------------------

    type Log = Arc<Mutex<Vec<String>>>;

    struct Probe {
        name: &'static str,
        log: Log,
        world_updates: bool,
        push_on_key: Option<(KeyCode, TestScene)>,
    }

    impl Probe {
        fn record(&self, what: &str) {
            self.log.lock().unwrap().push(format!("{} {}", self.name, what));
        }
    }

    impl Scene<TestScene> for Probe {
        fn update(&mut self, context: &mut GameContext<TestScene>, _dt: f32) {
            let forward = context.world.state.controls.sampler(true).held(Control::GoForward);
            self.record(&format!("update forward={forward}"));
        }

        fn draw(
            &mut self,
            _context: &GameContext<TestScene>,
            _renderer: &mut dyn Renderer,
            _alpha: f32,
        ) {
            self.record("draw");
        }

        fn handle_event(
            &mut self,
            context: &mut GameContext<TestScene>,
            event: &InputEvent,
        ) -> EventFlow {
            if let (Some((key, next)), InputEvent::KeyDown { key: pressed, .. }) =
                (self.push_on_key, event)
            {
                if key == *pressed {
                    context.scene_transitions.push(SceneTransition::Push(next));
                    self.record("push");
                    return EventFlow::Consumed;
                }
            }
            EventFlow::Continue
        }

        fn should_world_update(&self) -> bool {
            self.world_updates
        }
    }

    fn setup(log: &Log) -> (GameSystems<TestScene>, GameContext<TestScene>) {
        let mut systems = GameSystems::new();
        systems.scene_manager.register_default(
            TestScene::Play,
            Probe {
                name: "play",
                log: Arc::clone(log),
                world_updates: true,
                push_on_key: Some((KeyCode::Escape, TestScene::Overlay)),
            },
        );
        systems.scene_manager.register_scene(
            TestScene::Overlay,
            Probe { name: "overlay", log: Arc::clone(log), world_updates: false, push_on_key: None },
        );
        let mut context = GameContext::new(
            GameWorld::new(GameData::default(), Collaborators::null()),
            GameConfig::default(),
        );
        systems.scene_manager.start(&mut context);
        (systems, context)
    }

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Pipeline Tests
    //=====================================================================

    #[test]
    fn controls_are_sampled_before_scenes_update() {
        let log = Log::default();
        let (mut systems, mut context) = setup(&log);

        systems.update(&mut context, &[vec![key_down(KeyCode::KeyW)]], 0.1);

        let entries = log.lock().unwrap().clone();
        assert_eq!(entries, vec!["play update forward=true", "play draw"]);
    }

    #[test]
    fn world_steps_only_when_top_scene_asks() {
        let log = Log::default();
        let (mut systems, mut context) = setup(&log);

        systems.update(&mut context, &[], 0.5);
        assert_eq!(context.world.state.game_time, 0.5);

        systems.update(&mut context, &[vec![key_down(KeyCode::Escape)]], 0.5);
        assert_eq!(systems.scene_manager.top(), Some(TestScene::Overlay));

        systems.update(&mut context, &[], 0.5);
        assert_eq!(context.world.state.game_time, 1.0);
    }

    #[test]
    fn consumed_events_skip_window_bookkeeping() {
        let log = Log::default();
        let (mut systems, mut context) = setup(&log);

        systems.update(
            &mut context,
            &[vec![key_down(KeyCode::Escape)], vec![InputEvent::Focused(false)]],
            0.1,
        );

        assert!(!context.window.focused);
        assert!(log.lock().unwrap().contains(&"play push".to_string()));
    }
}
