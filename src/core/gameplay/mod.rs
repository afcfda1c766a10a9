//=========================================================================
// Gameplay
//=========================================================================
//
// Per-tick rules that turn sampled controls into player intent, and the
// HUD money roll-up.
//
// Architecture:
//   ControlBuffer (GameState) ──sampler(enabled)──> apply_player_input()
//                                                     └─> PlayerController
//   PlayerInfo ──MoneyTicker::advance(dt)──> displayed_money
//
//=========================================================================

//=== Module Declarations =================================================

mod intent;
mod money;

//=== Public API ==========================================================

pub use intent::apply_player_input;
pub use money::{money_increment, MoneyTicker, MONEY_STEP};
