//=========================================================================
// Game Scenes
//=========================================================================
//
// Concrete scenes of the game client and their keys.
//
// Flow:
//   Loading ──(work queue drained)──> Menu ──(session chosen)──> Ingame
//                                      ↑                           │
//                                      └──────(Pause: quit)────────┤
//                                                 Pause <──Escape──┤
//                                                 Debug <────M─────┘
//
//=========================================================================

//=== Module Declarations =================================================

mod debug;
mod ingame;
mod loading;
mod menu;
mod pause;

//=== Public API ==========================================================

pub use debug::DebugScene;
pub use ingame::IngameScene;
pub use loading::LoadingScene;
pub use menu::{MenuEntry, MenuScene};
pub use pause::PauseScene;

//=== Internal Dependencies ===============================================

use crate::core::scene::{SceneKey, SceneManager};

//=== GameScene ===========================================================

/// Keys of the built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScene {
    Loading,
    Menu,
    Ingame,
    Pause,
    Debug,
}

impl SceneKey for GameScene {}

/// Registers every built-in scene, with loading as the initial one.
pub fn register_scenes(manager: &mut SceneManager<GameScene>) {
    manager.register_default(GameScene::Loading, LoadingScene::new());
    manager.register_scene(GameScene::Menu, MenuScene::new());
    manager.register_scene(GameScene::Ingame, IngameScene::new());
    manager.register_scene(GameScene::Pause, PauseScene::new());
    manager.register_scene(GameScene::Debug, DebugScene::new());
}

//=========================================================================
// Test Support
//=========================================================================


//=========================================================================
// Unit Tests
//=========================================================================
