//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys. This allows scenes to keep state between activations.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{EventFlow, Scene, SceneTransition};
use crate::core::globals::GameContext;
use crate::core::input::InputEvent;
use crate::core::render::Renderer;

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Manages scene lifecycle and stack-based scene switching.
///
/// Scenes are registered once and referenced by key. The topmost scene
/// receives events and decides whether the world steps.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    stack: Vec<S>,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// Scenes must be registered before being pushed to the stack.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and adds it to the stack as the initial scene.
    ///
    /// Its `on_enter` runs when the engine starts.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack", key);
        } else {
            debug!("Registered scene {:?} as default and added to stack", key);
            self.stack.push(key);
        }
    }

    /// Calls `on_enter` on the initial scene.
    pub fn start(&mut self, context: &mut GameContext<S>) {
        if let Some(&initial) = self.stack.first() {
            info!("Starting scene manager with initial scene: {:?}", initial);
            if let Some(scene) = self.scenes.get_mut(&initial) {
                scene.on_enter(context);
            } else {
                warn!("Initial scene {:?} not registered", initial);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Key of the scene on top of the stack.
    pub fn top(&self) -> Option<S> {
        self.stack.last().copied()
    }

    /// Stack keys, bottom first.
    pub fn stack(&self) -> &[S] {
        &self.stack
    }

    pub fn is_active(&self, key: S) -> bool {
        self.stack.contains(&key)
    }

    /// Whether the top scene wants the world to step this tick.
    pub fn should_world_update(&self) -> bool {
        self.top()
            .and_then(|key| self.scenes.get(&key))
            .is_some_and(|scene| scene.should_world_update())
    }

    //--- Event Dispatch ---------------------------------------------------

    /// Routes an event to the top scene, then to the base handler unless
    /// the scene consumed it.
    pub fn dispatch_event(&mut self, context: &mut GameContext<S>, event: &InputEvent) {
        let flow = match self.stack.last().and_then(|key| self.scenes.get_mut(key)) {
            Some(scene) => scene.handle_event(context, event),
            None => EventFlow::Continue,
        };

        if flow == EventFlow::Continue {
            context.window.observe(event);
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the topmost opaque scene and every transparent scene above it.
    pub fn update(&mut self, context: &mut GameContext<S>, dt: f32) {
        if self.stack.is_empty() {
            return;
        }

        for key in self.collect_active_scenes() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.update(context, dt);
            }
        }
    }

    /// Draws every scene on the stack, bottom first.
    pub fn draw(&mut self, context: &GameContext<S>, renderer: &mut dyn Renderer, alpha: f32) {
        for key in &self.stack {
            if let Some(scene) = self.scenes.get_mut(key) {
                scene.draw(context, renderer, alpha);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies all queued scene transitions in FIFO order.
    pub fn process_transitions(&mut self, context: &mut GameContext<S>) {
        for transition in context.scene_transitions.take() {
            match transition {
                SceneTransition::Push(key) => self.push_internal(key, context),
                SceneTransition::Remove(key) => self.remove_internal(key, context),
                SceneTransition::Replace(old_key, new_key) => {
                    self.replace_internal(old_key, new_key, context)
                }
                SceneTransition::Clear => self.clear_internal(context),
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: S, context: &mut GameContext<S>) {
        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack, skipping push", key);
            return;
        }

        let Some(scene) = self.scenes.get_mut(&key) else {
            warn!("Attempted to push unregistered scene {:?}", key);
            return;
        };

        debug!("Pushing scene {:?} onto stack", key);
        self.stack.push(key);
        scene.on_enter(context);
    }

    fn remove_internal(&mut self, key: S, context: &mut GameContext<S>) {
        let Some(pos) = self.stack.iter().position(|&k| k == key) else {
            debug!("Scene {:?} not found in stack, skipping removal", key);
            return;
        };

        debug!("Removing scene {:?} from stack at position {}", key, pos);
        self.stack.remove(pos);

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_exit(context);
        }
    }

    fn replace_internal(&mut self, old_key: S, new_key: S, context: &mut GameContext<S>) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!("Scene {:?} not found in stack, skipping replacement", old_key);
            return;
        };

        if self.stack.contains(&new_key) {
            warn!("Scene {:?} is already in the stack, skipping replacement", new_key);
            return;
        }

        if !self.scenes.contains_key(&new_key) {
            warn!("Attempted to replace with unregistered scene {:?}", new_key);
            return;
        }

        debug!("Replacing scene {:?} with {:?} at position {}", old_key, new_key, pos);

        if let Some(scene) = self.scenes.get_mut(&old_key) {
            scene.on_exit(context);
        }

        self.stack[pos] = new_key;

        if let Some(scene) = self.scenes.get_mut(&new_key) {
            scene.on_enter(context);
        }
    }

    fn clear_internal(&mut self, context: &mut GameContext<S>) {
        debug!("Clearing all scenes from stack");

        for key in std::mem::take(&mut self.stack).into_iter().rev() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        }
    }

    fn collect_active_scenes(&self) -> Vec<S> {
        let mut active = Vec::new();

        // Top-down, stopping at the first opaque scene
        for &key in self.stack.iter().rev() {
            active.insert(0, key);

            if let Some(scene) = self.scenes.get(&key) {
                if !scene.is_transparent() {
                    break;
                }
            }
        }

        active
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::config::GameConfig;
    use crate::core::input::{KeyCode, Modifiers};
    use crate::core::render::NullRenderer;
    use crate::core::world::{Collaborators, GameData, GameWorld};

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        C,
    }

    impl SceneKey for TestScene {}

    //--- Test Helpers -----------------------------------------------------

    type Log = Arc<Mutex<Vec<String>>>;

    struct Recorder {
        key: TestScene,
        log: Log,
        transparent: bool,
        world_updates: bool,
        consume: bool,
    }

    impl Recorder {
        fn new(key: TestScene, log: &Log) -> Self {
            Self {
                key,
                log: Arc::clone(log),
                transparent: false,
                world_updates: false,
                consume: false,
            }
        }

        fn transparent(mut self) -> Self {
            self.transparent = true;
            self
        }

        fn world_updates(mut self) -> Self {
            self.world_updates = true;
            self
        }

        fn consuming(mut self) -> Self {
            self.consume = true;
            self
        }

        fn record(&self, what: &str) {
            self.log.lock().unwrap().push(format!("{:?} {}", self.key, what));
        }
    }

    impl Scene<TestScene> for Recorder {
        fn on_enter(&mut self, _context: &mut GameContext<TestScene>) {
            self.record("enter");
        }

        fn on_exit(&mut self, _context: &mut GameContext<TestScene>) {
            self.record("exit");
        }

        fn update(&mut self, _context: &mut GameContext<TestScene>, _dt: f32) {
            self.record("update");
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
            _context: &mut GameContext<TestScene>,
            _event: &InputEvent,
        ) -> EventFlow {
            self.record("event");
            if self.consume {
                EventFlow::Consumed
            } else {
                EventFlow::Continue
            }
        }

        fn is_transparent(&self) -> bool {
            self.transparent
        }

        fn should_world_update(&self) -> bool {
            self.world_updates
        }
    }

    fn context() -> GameContext<TestScene> {
        GameContext::new(
            GameWorld::new(GameData::default(), Collaborators::null()),
            GameConfig::default(),
        )
    }

    fn drain(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    fn apply(manager: &mut SceneManager<TestScene>, ctx: &mut GameContext<TestScene>, t: SceneTransition<TestScene>) {
        ctx.scene_transitions.push(t);
        manager.process_transitions(ctx);
    }

    //=====================================================================
    // Lifecycle Tests
    //=====================================================================

    #[test]
    fn start_enters_default_scene() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));

        manager.start(&mut ctx);

        assert_eq!(drain(&log), vec!["A enter"]);
        assert_eq!(manager.top(), Some(TestScene::A));
    }

    #[test]
    fn push_remove_and_replace_call_hooks() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));
        manager.register_scene(TestScene::B, Recorder::new(TestScene::B, &log));
        manager.register_scene(TestScene::C, Recorder::new(TestScene::C, &log));

        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        apply(&mut manager, &mut ctx, SceneTransition::Replace(TestScene::A, TestScene::C));
        apply(&mut manager, &mut ctx, SceneTransition::Remove(TestScene::B));

        assert_eq!(drain(&log), vec!["B enter", "A exit", "C enter", "B exit"]);
        assert_eq!(manager.stack(), &[TestScene::C]);
    }

    #[test]
    fn invalid_transitions_are_ignored() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));

        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::A));
        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        apply(&mut manager, &mut ctx, SceneTransition::Replace(TestScene::C, TestScene::A));
        apply(&mut manager, &mut ctx, SceneTransition::Remove(TestScene::C));

        assert!(drain(&log).is_empty());
        assert_eq!(manager.stack(), &[TestScene::A]);
    }

    #[test]
    fn clear_exits_top_first() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));
        manager.register_scene(TestScene::B, Recorder::new(TestScene::B, &log));
        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        drain(&log);

        apply(&mut manager, &mut ctx, SceneTransition::Clear);

        assert_eq!(drain(&log), vec!["B exit", "A exit"]);
        assert!(manager.stack().is_empty());
    }

    //=====================================================================
    // Update / Draw Tests
    //=====================================================================

    #[test]
    fn opaque_scene_blocks_updates_below() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));
        manager.register_scene(TestScene::B, Recorder::new(TestScene::B, &log));
        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        drain(&log);

        manager.update(&mut ctx, 0.1);

        assert_eq!(drain(&log), vec!["B update"]);
    }

    #[test]
    fn transparent_scene_lets_lower_scene_update() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));
        manager.register_scene(TestScene::B, Recorder::new(TestScene::B, &log).transparent());
        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        drain(&log);

        manager.update(&mut ctx, 0.1);

        assert_eq!(drain(&log), vec!["A update", "B update"]);
    }

    #[test]
    fn draw_covers_whole_stack_bottom_up() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));
        manager.register_scene(TestScene::B, Recorder::new(TestScene::B, &log));
        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        drain(&log);

        manager.draw(&ctx, &mut NullRenderer, 1.0);

        assert_eq!(drain(&log), vec!["A draw", "B draw"]);
    }

    #[test]
    fn world_update_follows_top_scene() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        assert!(!manager.should_world_update());

        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log).world_updates());
        assert!(manager.should_world_update());

        manager.register_scene(TestScene::B, Recorder::new(TestScene::B, &log));
        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        assert!(!manager.should_world_update());
    }

    //=====================================================================
    // Event Dispatch Tests
    //=====================================================================

    #[test]
    fn only_top_scene_receives_events() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));
        manager.register_scene(TestScene::B, Recorder::new(TestScene::B, &log));
        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        drain(&log);

        let event = InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::NONE };
        manager.dispatch_event(&mut ctx, &event);

        assert_eq!(drain(&log), vec!["B event"]);
    }

    #[test]
    fn base_handler_sees_unconsumed_events_only() {
        let log = Log::default();
        let mut ctx = context();
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new(TestScene::A, &log));
        manager.register_scene(TestScene::B, Recorder::new(TestScene::B, &log).consuming());

        manager.dispatch_event(&mut ctx, &InputEvent::Focused(false));
        assert!(!ctx.window.focused);

        apply(&mut manager, &mut ctx, SceneTransition::Push(TestScene::B));
        manager.dispatch_event(&mut ctx, &InputEvent::Focused(true));
        assert!(!ctx.window.focused);
    }

    #[test]
    fn empty_stack_still_runs_base_handler() {
        let mut ctx = context();
        let mut manager: SceneManager<TestScene> = SceneManager::new();

        manager.dispatch_event(&mut ctx, &InputEvent::Resized { width: 320, height: 200 });

        assert_eq!((ctx.window.width, ctx.window.height), (320, 200));
    }
}
