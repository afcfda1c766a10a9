//=========================================================================
// Displayed Money
//=========================================================================
//
// HUD money counter that rolls towards the authoritative balance in
// fixed sub-steps. The step size grows with the digit count of the
// remaining difference, so large changes still settle quickly.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::world::PlayerInfo;

//=== Constants ===========================================================

/// Length of one roll-up sub-step in seconds.
pub const MONEY_STEP: f32 = 1.0 / 30.0;

//=== Increment ===========================================================

/// Amount the displayed value moves by in one sub-step.
///
/// `0` for no difference. Otherwise `r = 1, i = 2`, and while the
/// difference has three or more digits it is divided by ten and
/// `r = r * 10 + i; i += 1`. The sign of the difference is kept:
/// `1 → 1`, `50 → 1`, `150 → 12`, `1500 → 123`.
///
/// For differences of a billion or more the step is smaller than the
/// leading digit alone would suggest; the counter still converges.
pub fn money_increment(difference: i32) -> i32 {
    if difference == 0 {
        return 0;
    }

    let mut remaining = difference;
    let mut step: i32 = 1;
    let mut digit: i32 = 2;
    while remaining.unsigned_abs() >= 100 {
        remaining /= 10;
        step = step.wrapping_mul(10).wrapping_add(digit);
        digit += 1;
    }

    if difference < 0 {
        step.wrapping_neg()
    } else {
        step
    }
}

//=== MoneyTicker =========================================================

/// Fixed-step accumulator driving the displayed money.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneyTicker {
    accumulator: f32,
}

impl MoneyTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by `dt`, applying one increment per elapsed sub-step.
    pub fn advance(&mut self, info: &mut PlayerInfo, dt: f32) {
        self.accumulator += dt;

        while self.accumulator >= MONEY_STEP {
            let difference = info.money.wrapping_sub(info.displayed_money);
            info.displayed_money = info.displayed_money.wrapping_add(money_increment(difference));
            self.accumulator -= MONEY_STEP;
        }

        trace!("Displayed money {} / {}", info.displayed_money, info.money);
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Increment Tests
    //=====================================================================

    #[test]
    fn documented_examples() {
        assert_eq!(money_increment(0), 0);
        assert_eq!(money_increment(1), 1);
        assert_eq!(money_increment(50), 1);
        assert_eq!(money_increment(99), 1);
        assert_eq!(money_increment(100), 12);
        assert_eq!(money_increment(150), 12);
        assert_eq!(money_increment(1500), 123);
    }

    #[test]
    fn sign_is_preserved() {
        for difference in [1, 50, 150, 1500, 123_456, i32::MAX] {
            assert_eq!(money_increment(-difference), -money_increment(difference));
        }
        assert!(money_increment(i32::MIN) < 0);
    }

    #[test]
    fn never_overshoots_and_grows_with_difference() {
        let mut last = 0;
        for difference in (1..200_000).step_by(7) {
            let step = money_increment(difference);
            assert!(step > 0 && step <= difference, "{difference} -> {step}");
            assert!(step >= last, "{difference} -> {step} after {last}");
            last = step;
        }
    }

    #[test]
    fn large_differences_use_shortened_step() {
        // Ten digits: the step stays nine digits long.
        assert_eq!(money_increment(1_000_000_000), 123_456_789);
        assert_eq!(money_increment(i32::MAX), 123_456_789);
    }

    //=====================================================================
    // Ticker Tests
    //=====================================================================

    #[test]
    fn one_step_applies_one_increment() {
        let mut ticker = MoneyTicker::new();
        let mut info = PlayerInfo { money: 150, displayed_money: 0 };

        ticker.advance(&mut info, MONEY_STEP);

        assert_eq!(info.displayed_money, 12);
    }

    #[test]
    fn partial_steps_accumulate() {
        let mut ticker = MoneyTicker::new();
        let mut info = PlayerInfo { money: 10, displayed_money: 0 };

        ticker.advance(&mut info, MONEY_STEP * 0.6);
        assert_eq!(info.displayed_money, 0);

        ticker.advance(&mut info, MONEY_STEP * 0.6);
        assert_eq!(info.displayed_money, 1);
    }

    #[test]
    fn converges_to_balance_in_both_directions() {
        let mut ticker = MoneyTicker::new();
        let mut info = PlayerInfo { money: 98_765, displayed_money: 0 };
        for _ in 0..1200 {
            ticker.advance(&mut info, 1.0 / 60.0);
        }
        assert_eq!(info.displayed_money, 98_765);

        info.money = 12;
        for _ in 0..1200 {
            ticker.advance(&mut info, 1.0 / 60.0);
        }
        assert_eq!(info.displayed_money, 12);
    }

    #[test]
    fn extreme_balances_wrap_onto_target() {
        let mut ticker = MoneyTicker::new();
        let mut info = PlayerInfo { money: i32::MAX, displayed_money: i32::MIN };

        // MAX - MIN wraps to -1, so one step of -1 wraps MIN onto MAX
        ticker.advance(&mut info, 1.0);

        assert_eq!(info.displayed_money, i32::MAX);
    }

    #[test]
    fn largest_difference_steps_by_approximate_increment() {
        let mut ticker = MoneyTicker::new();
        let mut info = PlayerInfo { money: i32::MAX, displayed_money: 0 };

        ticker.advance(&mut info, MONEY_STEP);

        assert_eq!(info.displayed_money, 123_456_789);
    }
}
