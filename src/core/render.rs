//=========================================================================
// Renderer Seam
//=========================================================================
//
// Drawing interface scenes talk to. The crate ships only a null
// implementation; a host plugs its own renderer in through
// `EngineBuilder::with_renderer`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::camera::CameraPose;
use crate::core::world::GameWorld;

//=== Renderer ============================================================

/// Frame drawing commands issued by scenes.
///
/// Called on the logic thread, bottom scene first.
pub trait Renderer: Send {
    /// Draws screen-space text; `position` is in pixels from the top-left.
    fn draw_text(&mut self, text: &str, position: Vec2, size: f32);

    /// Sets the view used for world rendering this frame.
    fn set_view(&mut self, pose: &CameraPose);

    /// Draws the in-game HUD (money, health, weapon) for the given view.
    fn draw_hud(&mut self, pose: &CameraPose, world: &GameWorld);

    /// Draws the debug inspector for a frozen view.
    fn draw_debug(&mut self, pose: &CameraPose);
}

//=== NullRenderer ========================================================

/// Renderer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_text(&mut self, _text: &str, _position: Vec2, _size: f32) {}
    fn set_view(&mut self, _pose: &CameraPose) {}
    fn draw_hud(&mut self, _pose: &CameraPose, _world: &GameWorld) {}
    fn draw_debug(&mut self, _pose: &CameraPose) {}
}

//=========================================================================
// Test Support
//=========================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// One recorded draw call.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Text { text: String, position: Vec2, size: f32 },
        View(CameraPose),
        Hud(CameraPose),
        Debug(CameraPose),
    }

    /// Renderer that records every call in order.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingRenderer {
        pub(crate) calls: Vec<DrawCall>,
    }

    impl RecordingRenderer {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn hud_count(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, DrawCall::Hud(_))).count()
        }

        pub(crate) fn last_view(&self) -> Option<CameraPose> {
            self.calls.iter().rev().find_map(|call| match call {
                DrawCall::View(pose) => Some(*pose),
                _ => None,
            })
        }
    }

    impl Renderer for RecordingRenderer {
        fn draw_text(&mut self, text: &str, position: Vec2, size: f32) {
            self.calls.push(DrawCall::Text { text: text.to_string(), position, size });
        }

        fn set_view(&mut self, pose: &CameraPose) {
            self.calls.push(DrawCall::View(*pose));
        }

        fn draw_hud(&mut self, pose: &CameraPose, _world: &GameWorld) {
            self.calls.push(DrawCall::Hud(*pose));
        }

        fn draw_debug(&mut self, pose: &CameraPose) {
            self.calls.push(DrawCall::Debug(*pose));
        }
    }
}
