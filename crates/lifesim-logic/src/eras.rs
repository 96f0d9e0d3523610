//! Historical eras per location.
//!
//! An era is derived from (location, year) and carries the tags the random
//! event pool is filtered by.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EraId {
    Tudor,
    Stuart,
    Georgian,
    Victorian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    pub id: EraId,
    pub name: &'static str,
    pub location: &'static str,
    pub start_year: u32,
    pub end_year: u32,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

impl Era {
    pub fn contains(&self, year: u32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|t| self.tags.contains(t))
    }
}

pub static ERAS: &[Era] = &[
    Era {
        id: EraId::Tudor,
        name: "Tudor England",
        location: "England",
        start_year: 1485,
        end_year: 1602,
        description: "The Tudor crown, the break with Rome, and a realm of open fields.",
        tags: &["tudor", "reformation", "court", "plague", "rural"],
    },
    Era {
        id: EraId::Stuart,
        name: "Stuart England",
        location: "England",
        start_year: 1603,
        end_year: 1713,
        description: "Union of crowns, civil war, and the restless years after.",
        tags: &["stuart", "civil_war", "court", "plague", "rural"],
    },
    Era {
        id: EraId::Georgian,
        name: "Georgian England",
        location: "England",
        start_year: 1714,
        end_year: 1836,
        description: "Coffee houses, canals, and a growing trade with the world.",
        tags: &["georgian", "trade", "enlightenment", "rural"],
    },
    Era {
        id: EraId::Victorian,
        name: "Victorian England",
        location: "England",
        start_year: 1837,
        end_year: 1900,
        description: "Mills, railways, and an empire at its height.",
        tags: &["victorian", "industry", "empire", "rural"],
    },
];

/// The era covering `year` at `location`, if any.
pub fn era_for(location: &str, year: u32) -> Option<&'static Era> {
    ERAS.iter()
        .find(|e| e.location.eq_ignore_ascii_case(location) && e.contains(year))
}

/// Look up an era by id.
pub fn era_by_id(id: EraId) -> Option<&'static Era> {
    ERAS.iter().find(|e| e.id == id)
}

/// Whether any era is defined for `location`.
pub fn is_known_location(location: &str) -> bool {
    ERAS.iter().any(|e| e.location.eq_ignore_ascii_case(location))
}

/// Earliest and latest year covered at `location`.
pub fn year_span(location: &str) -> Option<(u32, u32)> {
    let mut eras = ERAS
        .iter()
        .filter(|e| e.location.eq_ignore_ascii_case(location));
    let first = eras.next()?;
    Some(eras.fold((first.start_year, first.end_year), |(lo, hi), e| {
        (lo.min(e.start_year), hi.max(e.end_year))
    }))
}

/// The new era entered when moving from `previous` to `year`, if the era changed.
pub fn era_transition(location: &str, previous: Option<EraId>, year: u32) -> Option<&'static Era> {
    let era = era_for(location, year)?;
    (Some(era.id) != previous).then_some(era)
}
