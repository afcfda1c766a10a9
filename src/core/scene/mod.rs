//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and stack-based scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     └─ stack: Vec<S>
//
// Flow per tick:
//   dispatch_event() → top Scene::handle_event() → base handler
//   update()         → collect_active_scenes() → Scene::update()
//   draw()           → every stacked Scene::draw(), bottom-up
//   process_transitions() → on_exit() / on_enter()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GameContext;
use crate::core::input::InputEvent;
use crate::core::render::Renderer;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager};
pub use transition_queue::{SceneTransition, TransitionQueue};

//=== EventFlow ===========================================================

/// Whether an event continues to the base handler after a scene saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFlow {
    #[default]
    Continue,
    Consumed,
}

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks, update, draw and event
/// handling.
///
/// Scenes are registered in SceneManager and activated via scene stack.
/// Each scene keeps its own state between activations.
///
/// # Minimal Implementation
///
/// Only `update()` is required:
///
/// ```rust
/// # use streetwise_engine::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScene { Main }
/// # impl SceneKey for GameScene {}
/// struct MyScene;
///
/// impl Scene<GameScene> for MyScene {
///     fn update(&mut self, context: &mut GameContext<GameScene>, dt: f32) {
///         // Only this method is required
///     }
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// Called when the scene enters the active stack.
    fn on_enter(&mut self, _context: &mut GameContext<S>) {}

    /// Called when the scene leaves the active stack.
    fn on_exit(&mut self, _context: &mut GameContext<S>) {}

    /// Called every tick while the scene is active.
    fn update(&mut self, context: &mut GameContext<S>, dt: f32);

    /// Called every tick while the scene is on the stack.
    ///
    /// `alpha` is the interpolation factor between the previous and the
    /// current world step.
    fn draw(&mut self, _context: &GameContext<S>, _renderer: &mut dyn Renderer, _alpha: f32) {}

    /// Called for each platform event while the scene is on top.
    ///
    /// Returning [`EventFlow::Continue`] lets the base handler see the
    /// event (window focus and size bookkeeping).
    fn handle_event(&mut self, _context: &mut GameContext<S>, _event: &InputEvent) -> EventFlow {
        EventFlow::Continue
    }

    /// Whether scenes below this one should receive updates.
    ///
    /// Transparent scenes allow underlying scenes to keep updating.
    /// Opaque scenes block updates to the lower stack.
    fn is_transparent(&self) -> bool {
        false
    }

    /// Whether the world simulation steps while this scene is on top.
    fn should_world_update(&self) -> bool {
        false
    }
}
