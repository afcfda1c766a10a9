//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GameSystems: SceneManager + Renderer (owned by orchestrator)
//   GameContext: GameWorld + InputSystem + TransitionQueue (passed to scenes)
//
//=========================================================================

//=== Module Declarations =================================================

mod game_context;
mod game_systems;

//=== Public API ==========================================================

pub use game_context::{GameContext, SessionStart, WindowState};
pub use game_systems::GameSystems;
