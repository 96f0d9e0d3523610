//! Centralised randomness.
//!
//! Every random draw in the rules goes through [`Dice`], so one seeded
//! source drives a whole life and tests can force outcomes with
//! [`ScriptedDice`].
//!
//! ```
//! use lifesim_logic::dice::{Dice, ScriptedDice};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let roll = rng.roll(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! let mut forced = ScriptedDice::always();
//! assert!(forced.chance(0.01));
//! ```

use rand::Rng;
use std::collections::VecDeque;

/// A source of random draws.
pub trait Dice {
    /// Uniform integer in `lo..=hi`. Returns `lo` when `hi <= lo`.
    fn roll(&mut self, lo: i32, hi: i32) -> i32;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`. Returns 0 for empty or single-element ranges.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..=hi)
    }

    fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() || p <= 0.0 {
            return false;
        }
        self.gen_bool(p.min(1.0))
    }

    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Which end of a range [`ScriptedDice`] lands on when no roll is queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollBias {
    #[default]
    Low,
    High,
}

/// Deterministic dice for tests.
///
/// Queued chance results are consumed first, then every chance answers
/// `default_chance`. Certain odds (`p <= 0` or `p >= 1`) always answer
/// truthfully without consuming the queue.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    chances: VecDeque<bool>,
    rolls: VecDeque<i32>,
    default_chance: bool,
    bias: RollBias,
}

impl ScriptedDice {
    /// Every uncertain chance succeeds; rolls land low.
    pub fn always() -> Self {
        Self {
            default_chance: true,
            ..Self::default()
        }
    }

    /// Every uncertain chance fails; rolls land low.
    pub fn never() -> Self {
        Self::default()
    }

    /// Queue chance results, consumed in order before the default applies.
    pub fn with_chances(mut self, results: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(results);
        self
    }

    /// Queue roll results. Each is clamped into the range it is drawn for.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Unqueued rolls land on the top of their range.
    pub fn rolling_high(mut self) -> Self {
        self.bias = RollBias::High;
        self
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        if let Some(value) = self.rolls.pop_front() {
            return value.clamp(lo, hi);
        }
        match self.bias {
            RollBias::Low => lo,
            RollBias::High => hi,
        }
    }

    fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() || p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.chances.pop_front().unwrap_or(self.default_chance)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        match self.bias {
            RollBias::Low => 0,
            RollBias::High => len - 1,
        }
    }
}
