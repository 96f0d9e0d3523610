//! Priority-ordered event selection.
//!
//! 1. the historical event for this year and place;
//! 2. an unused childhood event, up to age 12;
//! 3. a random event from the current era's pool;
//! 4. the fallback pool of everyday events;
//! 5. a one-choice filler ("calm day" up to age 4, otherwise "an ordinary year").
//!
//! Selection is pure: choosing a childhood event does not mark it used.
//! The turn resolver calls [`mark_selected`] for the event it surfaces.

use crate::character::Character;
use crate::dice::Dice;
use crate::events::{self, childhood, historical, random, simple, Event, EventKind};

/// The first event found in priority order, before any filler.
pub fn select_event(character: &Character, dice: &mut impl Dice) -> Option<Event> {
    if let Some(event) = historical::lookup(character) {
        return Some(event);
    }
    if character.is_child() {
        if let Some(event) = childhood::draw(character, dice) {
            return Some(event);
        }
    }
    if let Some(event) = random::draw(character, dice) {
        return Some(event);
    }
    simple::draw(character, dice)
}

/// Like [`select_event`] but never empty: falls back to a filler.
pub fn select_or_fallback(character: &Character, dice: &mut impl Dice) -> Event {
    select_event(character, dice).unwrap_or_else(|| events::filler(character.age))
}

/// Record that `event` was shown. Childhood events are excluded for the
/// rest of this life.
pub fn mark_selected(character: &mut Character, event: &Event) {
    if event.kind == EventKind::Childhood {
        character.used_childhood_events.insert(event.id.clone());
    }
}
