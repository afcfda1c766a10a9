//=========================================================================
// Pause Scene
//=========================================================================
//
// Pushed over the in-game scene. Opaque, so the session is frozen while
// it is on top.
// Escape resumes; Q abandons the session and returns to the menu.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::info;

//=== Internal Dependencies ===============================================

use super::GameScene;
use crate::core::globals::GameContext;
use crate::core::input::{InputEvent, KeyCode};
use crate::core::render::Renderer;
use crate::core::scene::{EventFlow, Scene, SceneTransition};

//=== PauseScene ==========================================================

#[derive(Debug, Default)]
pub struct PauseScene;

impl PauseScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene<GameScene> for PauseScene {
    fn update(&mut self, _context: &mut GameContext<GameScene>, _dt: f32) {}

    fn draw(&mut self, _context: &GameContext<GameScene>, renderer: &mut dyn Renderer, _alpha: f32) {
        renderer.draw_text("Paused", Vec2::new(30.0, 20.0), 28.0);
        renderer.draw_text("Esc: resume  Q: quit to menu", Vec2::new(30.0, 60.0), 18.0);
    }

    fn handle_event(
        &mut self,
        context: &mut GameContext<GameScene>,
        event: &InputEvent,
    ) -> EventFlow {
        let InputEvent::KeyDown { key, .. } = event else {
            return EventFlow::Continue;
        };

        match key {
            KeyCode::Escape => {
                context.scene_transitions.push(SceneTransition::Remove(GameScene::Pause));
            }
            KeyCode::KeyQ => {
                info!("Leaving session");
                context.scene_transitions.push(SceneTransition::Remove(GameScene::Pause));
                context
                    .scene_transitions
                    .push(SceneTransition::Replace(GameScene::Ingame, GameScene::Menu));
            }
            _ => return EventFlow::Continue,
        }
        EventFlow::Consumed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
