//=========================================================================
// Loading Scene
//=========================================================================
//
// Queues world population on entry, then polls the work queue and hands
// over to the menu once it drains.
//
// Passes (in order):
//   1. define_items() for every item-definition descriptor
//   2. load_zone() + place_items() for every zone descriptor
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::info;

//=== Internal Dependencies ===============================================

use super::GameScene;
use crate::core::globals::GameContext;
use crate::core::render::Renderer;
use crate::core::scene::{Scene, SceneTransition};

//=== LoadingScene ========================================================

#[derive(Debug, Default)]
pub struct LoadingScene {
    finished: bool,
}

impl LoadingScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Scene<GameScene> for LoadingScene {
    fn on_enter(&mut self, context: &mut GameContext<GameScene>) {
        self.finished = false;
        let world = &context.world;

        info!(
            "Loading {} item definitions and {} zones",
            world.data.item_definitions.len(),
            world.data.zones.len()
        );

        for descriptor in world.data.item_definitions.values() {
            world.define_items(descriptor);
        }

        for descriptor in world.data.zones.values() {
            world.load_zone(descriptor);
            world.place_items(descriptor);
        }
    }

    fn update(&mut self, context: &mut GameContext<GameScene>, _dt: f32) {
        if self.finished || !context.world.is_work_empty() {
            return;
        }

        self.finished = true;
        info!("Loading complete");
        context
            .scene_transitions
            .push(SceneTransition::Replace(GameScene::Loading, GameScene::Menu));
    }

    fn draw(&mut self, _context: &GameContext<GameScene>, renderer: &mut dyn Renderer, _alpha: f32) {
        renderer.draw_text("Loading...", Vec2::new(30.0, 20.0), 28.0);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
