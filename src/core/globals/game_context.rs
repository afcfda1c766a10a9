//=========================================================================
// Game Context
//=========================================================================
//
// Shared data container handed to scenes.
//
// Contains state that scenes read and write:
// - world: authoritative game world (objects, state, collaborators)
// - input: raw input tracker and binding tables
// - window: focus and size bookkeeping from the base event handler
// - scene_transitions: command queue for scene changes
// - session / debug_view: hand-offs between sibling scenes
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::camera::CameraPose;
use crate::core::input::{InputEvent, InputSystem};
use crate::core::scene::{SceneKey, TransitionQueue};
use crate::core::world::GameWorld;

//=== SessionStart ========================================================

/// How the in-game scene should populate the world on first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStart {
    /// Start the campaign script from the beginning.
    NewGame,
    /// Spawn the built-in test scenario.
    Test,
    /// Load the named save.
    LoadSave(String),
}

impl SessionStart {
    /// Maps a save name to a session, treating `"test"` as the test
    /// scenario and an empty name as a new game.
    pub fn from_save_name(name: &str) -> Self {
        match name {
            "" => Self::NewGame,
            "test" => Self::Test,
            other => Self::LoadSave(other.to_string()),
        }
    }
}

//=== WindowState =========================================================

/// Window bookkeeping maintained by the base event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub width: u32,
    pub height: u32,
    pub focused: bool,
}

impl WindowState {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, focused: true }
    }

    /// Applies focus and resize events; ignores everything else.
    pub fn observe(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Focused(focused) => self.focused = focused,
            InputEvent::Resized { width, height } => {
                self.width = width;
                self.height = height;
            }
            _ => {}
        }
    }

    /// Window size as floats, or `None` while minimised.
    pub fn size(&self) -> Option<(f32, f32)> {
        (self.width > 0 && self.height > 0).then(|| (self.width as f32, self.height as f32))
    }
}

//=== GameContext =========================================================

/// Shared context data accessible to scenes.
///
/// Scenes receive `&mut GameContext` in their lifecycle, update and event
/// hooks and `&GameContext` while drawing.
pub struct GameContext<S: SceneKey> {
    pub world: GameWorld,

    /// Raw input state and bindings. Scenes use it to resolve commands.
    pub input: InputSystem,

    pub config: GameConfig,

    pub window: WindowState,

    /// Scenes queue transitions here; the scene manager applies them at
    /// the end of the tick.
    pub scene_transitions: TransitionQueue<S>,

    /// Session choice made by the menu, consumed by the in-game scene.
    pub session: Option<SessionStart>,

    /// Camera pose captured when the debug inspector was opened.
    pub debug_view: Option<CameraPose>,

    quit_requested: bool,
}

impl<S: SceneKey> GameContext<S> {
    pub fn new(world: GameWorld, config: GameConfig) -> Self {
        let [width, height] = config.window_size;
        Self {
            world,
            input: InputSystem::new(),
            window: WindowState::new(width, height),
            config,
            scene_transitions: TransitionQueue::new(),
            session: None,
            debug_view: None,
            quit_requested: false,
        }
    }

    /// Asks the logic thread to stop after the current tick.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::{Collaborators, GameData};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    #[test]
    fn context_starts_from_config() {
        let config = GameConfig { window_size: [1024, 768], ..GameConfig::default() };
        let context = GameContext::<TestScene>::new(
            GameWorld::new(GameData::default(), Collaborators::null()),
            config,
        );

        assert_eq!(context.window, WindowState { width: 1024, height: 768, focused: true });
        assert!(context.scene_transitions.is_empty());
        assert!(context.session.is_none());
        assert!(!context.quit_requested());
    }

    #[test]
    fn quit_request_is_sticky() {
        let mut context = GameContext::<TestScene>::new(
            GameWorld::new(GameData::default(), Collaborators::null()),
            GameConfig::default(),
        );
        context.request_quit();
        assert!(context.quit_requested());
    }

    #[test]
    fn window_tracks_focus_and_resize() {
        let mut window = WindowState::new(800, 600);

        window.observe(&InputEvent::Focused(false));
        window.observe(&InputEvent::Resized { width: 640, height: 480 });
        window.observe(&InputEvent::MouseWheel { delta: 1.0 });

        assert_eq!(window, WindowState { width: 640, height: 480, focused: false });
    }

    #[test]
    fn minimised_window_has_no_size() {
        let mut window = WindowState::new(800, 600);
        assert_eq!(window.size(), Some((800.0, 600.0)));

        window.observe(&InputEvent::Resized { width: 0, height: 0 });
        assert_eq!(window.size(), None);
    }

    #[test]
    fn save_names_map_to_sessions() {
        assert_eq!(SessionStart::from_save_name(""), SessionStart::NewGame);
        assert_eq!(SessionStart::from_save_name("test"), SessionStart::Test);
        assert_eq!(
            SessionStart::from_save_name("slot1"),
            SessionStart::LoadSave("slot1".to_string())
        );
    }
}
