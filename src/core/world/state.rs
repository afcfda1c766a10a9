//=========================================================================
// Game State
//=========================================================================
//
// Authoritative per-session state: player money, the control snapshot
// double buffer, camera target, cutscene flags and game time.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::object::EntityId;
use crate::core::input::ControlBuffer;

//=== PlayerInfo ==========================================================

/// Player economy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInfo {
    /// Authoritative balance.
    pub money: i32,
    /// Value shown on the HUD; converges towards `money`.
    pub displayed_money: i32,
}

//=== Cutscene ============================================================

/// A cutscene that is currently playing.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutscene {
    pub name: String,
    /// Game time at which the cutscene started.
    pub start_time: f32,
    /// Length in seconds.
    pub duration: f32,
}

//=== GameState ===========================================================

#[derive(Debug, Default)]
pub struct GameState {
    pub player_info: PlayerInfo,
    /// Current and previous raw control snapshots.
    pub controls: ControlBuffer,
    /// Object the camera should follow; falls back to the player when unset
    /// or stale.
    pub camera_target: Option<EntityId>,
    /// Character controlled by the player.
    pub player_object: Option<EntityId>,
    pub current_cutscene: Option<Cutscene>,
    /// Set by input; consumed by the next world step.
    pub skip_cutscene: bool,
    pub is_cinematic: bool,
    /// Seconds of simulated time.
    pub game_time: f32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no cutscene is playing or the current one has run out.
    pub fn is_cutscene_done(&self) -> bool {
        match &self.current_cutscene {
            Some(cutscene) => cutscene.start_time + cutscene.duration < self.game_time,
            None => true,
        }
    }

    /// Starts a cutscene at the current game time.
    pub fn play_cutscene(&mut self, name: impl Into<String>, duration: f32) {
        self.current_cutscene = Some(Cutscene {
            name: name.into(),
            start_time: self.game_time,
            duration,
        });
        self.skip_cutscene = false;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
