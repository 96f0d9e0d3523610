//! Once-per-year activities and petty crimes.
//!
//! Activities offer two ways of going about them and a way to give up.
//! Giving up changes nothing and leaves the activity available. Crimes are
//! open to common children from age ten; pickpocketing failures grow
//! harsher with every strike.

use serde::{Deserialize, Serialize};

use crate::character::{Character, ItemKind, NewItem, Tone};
use crate::constants::{ages, odds};
use crate::dice::Dice;
use crate::interactions::{InteractionDelta, InteractionOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityOption {
    pub label: &'static str,
    pub outcome: &'static str,
    pub health: i32,
    pub strength: i32,
    pub faith: i32,
    pub honor: i32,
}

const NOTHING: ActivityOption = ActivityOption {
    label: "",
    outcome: "",
    health: 0,
    strength: 0,
    faith: 0,
    honor: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub id: &'static str,
    pub title: &'static str,
    pub min_age: u32,
    /// Restricted to artisans and peasants.
    pub common_only: bool,
    pub options: [ActivityOption; 2],
}

pub static ACTIVITIES: &[Activity] = &[
    Activity {
        id: "play_mud",
        title: "Play in the Mud",
        min_age: 2,
        common_only: false,
        options: [
            ActivityOption {
                label: "Wrestle in the mud",
                outcome: "You come home filthy and stronger.",
                strength: 2,
                ..NOTHING
            },
            ActivityOption {
                label: "Build mud castles",
                outcome: "A fine afternoon in the sun.",
                strength: 1,
                health: 1,
                ..NOTHING
            },
        ],
    },
    Activity {
        id: "listen_priest",
        title: "Listen to the Priest",
        min_age: 5,
        common_only: false,
        options: [
            ActivityOption {
                label: "Hang on every word",
                outcome: "The scriptures stir something in you.",
                faith: 4,
                ..NOTHING
            },
            ActivityOption {
                label: "Ask him questions",
                outcome: "He praises your curiosity before the congregation.",
                faith: 2,
                honor: 2,
                ..NOTHING
            },
        ],
    },
    Activity {
        id: "carry_wood",
        title: "Carry Firewood",
        min_age: 8,
        common_only: false,
        options: [
            ActivityOption {
                label: "Carry the heavy logs",
                outcome: "Your back aches but your arms thicken.",
                strength: 5,
                ..NOTHING
            },
            ActivityOption {
                label: "Carry kindling",
                outcome: "Light work, honestly done.",
                strength: 2,
                ..NOTHING
            },
        ],
    },
    Activity {
        id: "beg_food",
        title: "Beg for Food",
        min_age: 5,
        common_only: true,
        options: [
            ActivityOption {
                label: "Beg at the church door",
                outcome: "You eat well, but people stare.",
                health: 10,
                honor: -5,
                ..NOTHING
            },
            ActivityOption {
                label: "Ask a neighbour quietly",
                outcome: "A crust and some pity.",
                health: 5,
                honor: -2,
                ..NOTHING
            },
        ],
    },
];

/// How to go about an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityChoice {
    First,
    Second,
    GiveUp,
}

pub fn find_activity(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

/// Activities the character can do right now.
pub fn available(character: &Character) -> impl Iterator<Item = &'static Activity> + '_ {
    ACTIVITIES.iter().filter(move |a| {
        character.age >= a.min_age
            && (!a.common_only || character.social_class.is_common())
            && !character.did_activity_this_year(a.id)
    })
}

pub fn perform(
    character: &Character,
    activity_id: &str,
    choice: ActivityChoice,
) -> InteractionOutcome {
    let Some(activity) = find_activity(activity_id) else {
        return InteractionOutcome::refused("There is no such pastime.");
    };
    if character.age < activity.min_age {
        return InteractionOutcome::refused("You are too young for that.");
    }
    if activity.common_only && !character.social_class.is_common() {
        return InteractionOutcome::refused("That is beneath your station.");
    }
    if character.did_activity_this_year(activity.id) {
        return InteractionOutcome::refused("You have already done that this year.");
    }
    let option = match choice {
        ActivityChoice::First => &activity.options[0],
        ActivityChoice::Second => &activity.options[1],
        ActivityChoice::GiveUp => {
            return InteractionOutcome::new(
                format!("You think better of it: {}.", activity.title.to_lowercase()),
                Tone::Neutral,
                InteractionDelta::default(),
            )
        }
    };
    InteractionOutcome::new(
        option.outcome,
        Tone::Success,
        InteractionDelta {
            health: option.health,
            strength: option.strength,
            faith: option.faith,
            honor: option.honor,
            mark_activity: Some(activity.id),
            ..InteractionDelta::default()
        },
    )
}

// ── Crimes ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crime {
    PickpocketEasy,
    PickpocketHard,
    Poach,
}

impl Crime {
    pub fn activity_id(self) -> &'static str {
        match self {
            Crime::PickpocketEasy | Crime::PickpocketHard => "pickpocket",
            Crime::Poach => "poach",
        }
    }

    pub fn success_chance(self) -> f64 {
        match self {
            Crime::PickpocketEasy => odds::PICKPOCKET_EASY,
            Crime::PickpocketHard => odds::PICKPOCKET_HARD,
            Crime::Poach => odds::POACHING,
        }
    }
}

/// Punishment for the `strike`th time caught pickpocketing, as (health, honor).
pub fn strike_penalty(strike: u32) -> (i32, i32) {
    match strike {
        0 | 1 => (-10, -5),
        2 => (-30, -20),
        _ => (-60, -50),
    }
}

pub fn commit_crime(
    character: &Character,
    crime: Crime,
    dice: &mut impl Dice,
) -> InteractionOutcome {
    if character.age < ages::CRIME_MIN {
        return InteractionOutcome::refused("You are too young to turn to crime.");
    }
    if !character.social_class.is_common() {
        return InteractionOutcome::refused("Someone of your station has no need to steal.");
    }
    let activity = crime.activity_id();
    if character.did_activity_this_year(activity) {
        return InteractionOutcome::refused("Better lie low until next year.");
    }
    let succeeded = dice.chance(crime.success_chance());
    let base = InteractionDelta {
        mark_activity: Some(activity),
        ..InteractionDelta::default()
    };

    match (crime, succeeded) {
        (Crime::PickpocketEasy | Crime::PickpocketHard, true) => {
            let take = if crime == Crime::PickpocketEasy {
                5
            } else {
                dice.roll(40, 70)
            };
            InteractionOutcome::new(
                format!("You lift a purse in the crowd: {take} coins."),
                Tone::Success,
                InteractionDelta {
                    money: i64::from(take),
                    ..base
                },
            )
        }
        (Crime::PickpocketEasy | Crime::PickpocketHard, false) => {
            let strike = character.crime_strikes + 1;
            let (health, honor) = strike_penalty(strike);
            let message = match strike {
                1 => "Caught! You are beaten and sent home.",
                2 => "Caught again! You are flogged in the square.",
                _ => "Caught once more! You are branded a thief.",
            };
            InteractionOutcome::new(
                message,
                Tone::Fail,
                InteractionDelta {
                    health,
                    honor,
                    crime_strike: true,
                    ..base
                },
            )
        }
        (Crime::Poach, true) => InteractionOutcome::new(
            "You bring down a deer in the lord's forest.",
            Tone::Success,
            InteractionDelta {
                add_item: Some(NewItem {
                    name: "Venison".to_string(),
                    kind: ItemKind::Food,
                    value: 15,
                }),
                ..base
            },
        ),
        (Crime::Poach, false) => InteractionOutcome::new(
            "The gamekeeper catches you with a snare.",
            Tone::Fail,
            InteractionDelta {
                health: -30,
                honor: -20,
                ..base
            },
        ),
    }
}
