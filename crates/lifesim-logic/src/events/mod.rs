//! Event model and catalogs.
//!
//! Every event, whatever its origin, has the same shape: an id, a
//! [`EventKind`] tag, a title, a description and a list of choices. Catalog
//! entries are `'static` templates; [`EventTemplate::instantiate`] turns one
//! into an owned [`Event`] the engine can hold while a choice is pending.
//!
//! | Module | Source |
//! |--------|--------|
//! | [`historical`] | Fixed (year, location) events |
//! | [`childhood`] | Class-specific events for ages 0..=12, each seen once |
//! | [`random`] | Era-tagged pool with age, gender and money conditions |
//! | [`simple`] | Fallback pool filtered by age and class |
//! | [`coworker`] | Reactive events raised by coworkers |

pub mod childhood;
pub mod coworker;
pub mod historical;
pub mod random;
pub mod simple;

use serde::Serialize;

use crate::character::FlagUpdate;
use crate::stats::signed;

/// Where an event came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Historical,
    Childhood,
    Random,
    Simple,
    Filler,
    Coworker { coworker_id: String },
}

/// What choosing an option does. Absent deltas leave a stat untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Effect {
    pub health: Option<i32>,
    pub sanity: Option<i32>,
    pub honor: Option<i32>,
    pub intelligence: Option<i32>,
    pub faith: Option<i32>,
    pub strength: Option<i32>,
    pub money: Option<i32>,
    pub food: Option<i32>,
    /// Applied to the NPC who raised the event, if any.
    pub relationship: Option<i32>,
    pub add_trait: Option<&'static str>,
    pub set_flags: Option<FlagUpdate>,
    pub add_sibling: bool,
    pub death: bool,
}

impl Effect {
    pub const NONE: Effect = Effect {
        health: None,
        sanity: None,
        honor: None,
        intelligence: None,
        faith: None,
        strength: None,
        money: None,
        food: None,
        relationship: None,
        add_trait: None,
        set_flags: None,
        add_sibling: false,
        death: false,
    };

    /// Short human-readable summary, e.g. `+5 Honor, -10 Health`.
    pub fn preview(&self) -> String {
        if self.death {
            return "Death".to_string();
        }
        let deltas = [
            (self.health, "Health"),
            (self.sanity, "Sanity"),
            (self.honor, "Honor"),
            (self.intelligence, "Intelligence"),
            (self.faith, "Faith"),
            (self.strength, "Strength"),
            (self.money, "Coins"),
            (self.food, "Food"),
            (self.relationship, "Relationship"),
        ];
        let mut parts: Vec<String> = deltas
            .iter()
            .filter_map(|(delta, label)| delta.filter(|d| *d != 0).map(|d| signed(d, label)))
            .collect();
        if let Some(t) = self.add_trait {
            parts.push(format!("Trait: {t}"));
        }
        if self.add_sibling {
            parts.push("New sibling".to_string());
        }
        if parts.is_empty() {
            "No effect".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: String,
    pub label: String,
    /// Narrative line logged when chosen.
    pub outcome: String,
    pub effect: Effect,
    pub min_age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: String,
    pub kind: EventKind,
    pub title: String,
    pub description: String,
    pub choices: Vec<Choice>,
}

impl Event {
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Drop choices the character is too young for.
    pub fn retain_for_age(&mut self, age: u32) {
        self.choices.retain(|c| c.min_age.map_or(true, |min| age >= min));
    }

    pub fn descriptor(&self) -> EventDescriptor {
        EventDescriptor {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            choices: self
                .choices
                .iter()
                .map(|c| ChoiceDescriptor {
                    id: c.id.clone(),
                    label: c.label.clone(),
                    preview: c.effect.preview(),
                })
                .collect(),
        }
    }
}

/// What the player sees while an event is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub choices: Vec<ChoiceDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceDescriptor {
    pub id: String,
    pub label: String,
    pub preview: String,
}

// ── Templates ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ChoiceTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub outcome: &'static str,
    pub effect: Effect,
    pub min_age: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
pub struct EventTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub choices: &'static [ChoiceTemplate],
}

impl EventTemplate {
    pub fn instantiate(&self, kind: EventKind) -> Event {
        Event {
            id: self.id.to_string(),
            kind,
            title: self.title.to_string(),
            description: self.description.to_string(),
            choices: self
                .choices
                .iter()
                .map(|c| Choice {
                    id: c.id.to_string(),
                    label: c.label.to_string(),
                    outcome: c.outcome.to_string(),
                    effect: c.effect,
                    min_age: c.min_age,
                })
                .collect(),
        }
    }

    /// Instantiate with under-age choices removed; `None` if nothing is left.
    pub fn instantiate_for_age(&self, kind: EventKind, age: u32) -> Option<Event> {
        let mut event = self.instantiate(kind);
        event.retain_for_age(age);
        (!event.choices.is_empty()).then_some(event)
    }
}

/// Shorthand for a choice with no age gate.
pub(crate) const fn choice(
    id: &'static str,
    label: &'static str,
    outcome: &'static str,
    effect: Effect,
) -> ChoiceTemplate {
    ChoiceTemplate {
        id,
        label,
        outcome,
        effect,
        min_age: None,
    }
}

/// Shorthand for a choice only offered from `min_age`.
pub(crate) const fn choice_from(
    min_age: u32,
    id: &'static str,
    label: &'static str,
    outcome: &'static str,
    effect: Effect,
) -> ChoiceTemplate {
    ChoiceTemplate {
        id,
        label,
        outcome,
        effect,
        min_age: Some(min_age),
    }
}

// ── Fillers ────────────────────────────────────────────────────────────────

static CALM_DAY: EventTemplate = EventTemplate {
    id: "calm_day",
    title: "A Calm Day",
    description: "Nothing much happens. You sleep, eat, and watch the world go by.",
    choices: &[
        choice(
            "rest",
            "Rest",
            "The year passes gently.",
            Effect {
                health: Some(1),
                ..Effect::NONE
            },
        ),
    ],
};

static ORDINARY_DAY: EventTemplate = EventTemplate {
    id: "ordinary_day",
    title: "An Ordinary Year",
    description: "The seasons turn and little of note disturbs your life.",
    choices: &[
        choice(
            "carry_on",
            "Carry on",
            "You go about your business.",
            Effect::NONE,
        ),
    ],
};

/// The one-choice filler shown when no other event applies.
pub fn filler(age: u32) -> Event {
    let template = if age <= crate::constants::ages::CALM_DAY_MAX {
        &CALM_DAY
    } else {
        &ORDINARY_DAY
    };
    template.instantiate(EventKind::Filler)
}
