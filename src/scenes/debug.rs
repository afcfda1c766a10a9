//=========================================================================
// Debug Scene
//=========================================================================
//
// Inspector pushed over the in-game scene, showing the camera pose that
// was current when it opened. Escape or M closes it.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::GameScene;
use crate::core::globals::GameContext;
use crate::core::input::{InputEvent, KeyCode};
use crate::core::render::Renderer;
use crate::core::scene::{EventFlow, Scene, SceneTransition};

//=== DebugScene ==========================================================

#[derive(Debug, Default)]
pub struct DebugScene;

impl DebugScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene<GameScene> for DebugScene {
    fn on_exit(&mut self, context: &mut GameContext<GameScene>) {
        context.debug_view = None;
    }

    fn update(&mut self, _context: &mut GameContext<GameScene>, _dt: f32) {}

    fn draw(&mut self, context: &GameContext<GameScene>, renderer: &mut dyn Renderer, _alpha: f32) {
        let Some(pose) = context.debug_view else {
            return;
        };
        renderer.draw_debug(&pose);
        let p = pose.position;
        renderer.draw_text(
            &format!("Camera: {:.2} {:.2} {:.2}", p.x, p.y, p.z),
            Vec2::new(10.0, 10.0),
            16.0,
        );
    }

    fn handle_event(
        &mut self,
        context: &mut GameContext<GameScene>,
        event: &InputEvent,
    ) -> EventFlow {
        match event {
            InputEvent::KeyDown { key: KeyCode::Escape | KeyCode::KeyM, .. } => {
                context.scene_transitions.push(SceneTransition::Remove(GameScene::Debug));
                EventFlow::Consumed
            }
            _ => EventFlow::Continue,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
