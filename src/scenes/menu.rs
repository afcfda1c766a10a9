//=========================================================================
// Menu Scene
//=========================================================================
//
// Front-end menu. Chooses how the in-game session starts and hands the
// choice over through `GameContext::session`.
//
// Keys: ArrowUp / ArrowDown move the selection (wrapping), Enter
// activates it.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::info;

//=== Internal Dependencies ===============================================

use super::GameScene;
use crate::core::globals::{GameContext, SessionStart};
use crate::core::input::{InputEvent, KeyCode};
use crate::core::render::Renderer;
use crate::core::scene::{EventFlow, Scene, SceneTransition};

//=== MenuEntry ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    NewGame,
    TestScenario,
    Quit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::NewGame, MenuEntry::TestScenario, MenuEntry::Quit];

    pub fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New Game",
            Self::TestScenario => "Test",
            Self::Quit => "Quit",
        }
    }
}

//=== MenuScene ===========================================================

#[derive(Debug, Default)]
pub struct MenuScene {
    selected: usize,
}

impl MenuScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected]
    }

    fn move_selection(&mut self, forward: bool) {
        let count = MenuEntry::ALL.len();
        self.selected = if forward {
            (self.selected + 1) % count
        } else {
            (self.selected + count - 1) % count
        };
    }

    fn activate(&self, context: &mut GameContext<GameScene>) {
        let session = match self.selected() {
            MenuEntry::NewGame => SessionStart::NewGame,
            MenuEntry::TestScenario => SessionStart::Test,
            MenuEntry::Quit => {
                info!("Quit selected from menu");
                context.request_quit();
                return;
            }
        };

        info!("Starting session: {:?}", session);
        context.session = Some(session);
        context
            .scene_transitions
            .push(SceneTransition::Replace(GameScene::Menu, GameScene::Ingame));
    }
}

impl Scene<GameScene> for MenuScene {
    fn on_enter(&mut self, _context: &mut GameContext<GameScene>) {
        self.selected = 0;
    }

    fn update(&mut self, _context: &mut GameContext<GameScene>, _dt: f32) {}

    fn draw(&mut self, _context: &GameContext<GameScene>, renderer: &mut dyn Renderer, _alpha: f32) {
        for (index, entry) in MenuEntry::ALL.iter().enumerate() {
            let text = if index == self.selected {
                format!("> {}", entry.label())
            } else {
                entry.label().to_string()
            };
            renderer.draw_text(&text, Vec2::new(30.0, 60.0 + index as f32 * 30.0), 24.0);
        }
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
            KeyCode::ArrowUp => self.move_selection(false),
            KeyCode::ArrowDown => self.move_selection(true),
            KeyCode::Enter => self.activate(context),
            _ => return EventFlow::Continue,
        }
        EventFlow::Consumed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
