//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use streetwise_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::EngineError;

// Configuration
pub use crate::config::GameConfig;

// Global systems and context
pub use crate::core::globals::{GameContext, GameSystems, SessionStart};

// Input system
pub use crate::core::input::{Command, Control, InputEvent, KeyCode, Modifiers, MouseButton};

// Scene system
pub use crate::core::scene::{EventFlow, Scene, SceneKey, SceneTransition};

// World and rendering
pub use crate::core::render::Renderer;
pub use crate::core::world::GameWorld;
