//! Percentage stats and clamping.
//!
//! Health, honor, faith, strength, intelligence and sanity are percentages
//! held in `0..=100`. Money and food are open-ended but never negative.

use serde::{Deserialize, Serialize};

pub const STAT_MAX: u8 = 100;

/// Identifies one percentage stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    Honor,
    Faith,
    Strength,
    Intelligence,
    Sanity,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Health,
        StatKind::Honor,
        StatKind::Faith,
        StatKind::Strength,
        StatKind::Intelligence,
        StatKind::Sanity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StatKind::Health => "Health",
            StatKind::Honor => "Honor",
            StatKind::Faith => "Faith",
            StatKind::Strength => "Strength",
            StatKind::Intelligence => "Intelligence",
            StatKind::Sanity => "Sanity",
        }
    }
}

/// The character's percentage stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health: u8,
    pub honor: u8,
    pub faith: u8,
    pub strength: u8,
    pub intelligence: u8,
    pub sanity: u8,
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> u8 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Honor => self.honor,
            StatKind::Faith => self.faith,
            StatKind::Strength => self.strength,
            StatKind::Intelligence => self.intelligence,
            StatKind::Sanity => self.sanity,
        }
    }

    fn slot(&mut self, kind: StatKind) -> &mut u8 {
        match kind {
            StatKind::Health => &mut self.health,
            StatKind::Honor => &mut self.honor,
            StatKind::Faith => &mut self.faith,
            StatKind::Strength => &mut self.strength,
            StatKind::Intelligence => &mut self.intelligence,
            StatKind::Sanity => &mut self.sanity,
        }
    }

    /// Add `delta` to a stat, clamped. Returns the change actually applied.
    pub fn adjust(&mut self, kind: StatKind, delta: i32) -> i32 {
        let slot = self.slot(kind);
        let before = *slot;
        *slot = clamp_percent(before, delta);
        i32::from(*slot) - i32::from(before)
    }
}

/// `current + delta` clamped to `0..=100`.
pub fn clamp_percent(current: u8, delta: i32) -> u8 {
    (i32::from(current).saturating_add(delta)).clamp(0, i32::from(STAT_MAX)) as u8
}

/// `current + delta` floored at zero.
pub fn clamp_amount(current: u32, delta: i64) -> u32 {
    (i64::from(current).saturating_add(delta)).clamp(0, i64::from(u32::MAX)) as u32
}

/// Death is health of exactly zero.
pub fn is_dead(health: u8) -> bool {
    health == 0
}

/// Format a signed delta the way the log shows it: `+5 Honor`, `-10 Health`.
pub fn signed(delta: i32, label: &str) -> String {
    if delta >= 0 {
        format!("+{delta} {label}")
    } else {
        format!("{delta} {label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Stats {
        Stats {
            health: 80,
            honor: 90,
            faith: 10,
            strength: 0,
            intelligence: 0,
            sanity: 100,
        }
    }

    #[test]
    fn test_clamp_percent_bounds() {
        assert_eq!(clamp_percent(90, 15), 100);
        assert_eq!(clamp_percent(5, -10), 0);
        assert_eq!(clamp_percent(50, 0), 50);
        assert_eq!(clamp_percent(0, i32::MAX), 100);
        assert_eq!(clamp_percent(100, i32::MIN), 0);
    }

    #[test]
    fn test_clamp_amount_floor() {
        assert_eq!(clamp_amount(3, -5), 0);
        assert_eq!(clamp_amount(3, 5), 8);
        assert_eq!(clamp_amount(u32::MAX, 10), u32::MAX);
    }

    #[test]
    fn test_adjust_reports_applied_change() {
        let mut s = sample();
        assert_eq!(s.adjust(StatKind::Honor, 15), 10);
        assert_eq!(s.honor, 100);
        assert_eq!(s.adjust(StatKind::Strength, -3), 0);
        assert_eq!(s.adjust(StatKind::Health, -30), -30);
        assert_eq!(s.health, 50);
    }

    #[test]
    fn test_get_matches_fields() {
        let s = sample();
        for kind in StatKind::ALL {
            let expected = match kind {
                StatKind::Health => 80,
                StatKind::Honor => 90,
                StatKind::Faith => 10,
                StatKind::Strength | StatKind::Intelligence => 0,
                StatKind::Sanity => 100,
            };
            assert_eq!(s.get(kind), expected, "{}", kind.name());
        }
    }

    #[test]
    fn test_is_dead_only_at_zero() {
        assert!(is_dead(0));
        assert!(!is_dead(1));
    }

    #[test]
    fn test_signed_format() {
        assert_eq!(signed(5, "Honor"), "+5 Honor");
        assert_eq!(signed(-10, "Health"), "-10 Health");
    }
}
