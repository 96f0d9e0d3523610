//! Strength contests.

/// Whether `strength` beats an opponent's rolled strength. Ties lose.
pub fn overpowers(strength: u8, opponent: i32) -> bool {
    i32::from(strength) > opponent
}

/// How a duel went, by strength difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelTier {
    /// Won by more than 20.
    Rout,
    /// Won narrowly.
    Victory,
    /// Lost by less than 20.
    Defeat,
    /// Lost badly.
    Crushed,
}

pub fn duel_tier(strength: u8, opponent: i32) -> DuelTier {
    let diff = i32::from(strength) - opponent;
    if diff > 20 {
        DuelTier::Rout
    } else if diff > 0 {
        DuelTier::Victory
    } else if diff > -20 {
        DuelTier::Defeat
    } else {
        DuelTier::Crushed
    }
}
