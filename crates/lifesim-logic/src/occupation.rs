//! Childhood work for the household.
//!
//! Before a real job is possible, a child can put in a year's work suited
//! to the family's station. Once per year.

use crate::character::{Character, SocialClass, Tone};
use crate::constants::{ages, odds};
use crate::dice::Dice;
use crate::interactions::{InteractionDelta, InteractionOutcome};

pub const ACTIVITY_ID: &str = "child_work";

pub fn work(character: &Character, dice: &mut impl Dice) -> InteractionOutcome {
    if character.age < ages::WORK_MIN {
        return InteractionOutcome::refused("You are too small to be any use yet.");
    }
    if character.job.is_some() {
        return InteractionOutcome::refused("Your job keeps you busy enough.");
    }
    if character.did_activity_this_year(ACTIVITY_ID) {
        return InteractionOutcome::refused("You have already put in your year's work.");
    }

    let (message, mut delta) = match character.social_class {
        SocialClass::Nobility => (
            "You practise swordplay and carry messages for the steward.",
            InteractionDelta {
                strength: 2,
                honor: 1,
                health: -2,
                ..InteractionDelta::default()
            },
        ),
        SocialClass::Gentry => (
            "You copy accounts and attend your father on his rounds.",
            InteractionDelta {
                honor: 2,
                faith: 1,
                health: -1,
                ..InteractionDelta::default()
            },
        ),
        SocialClass::Artisan => (
            "You fetch and carry in the workshop.",
            InteractionDelta {
                honor: 1,
                health: -1,
                money: i64::from(dice.chance(0.5)),
                ..InteractionDelta::default()
            },
        ),
        SocialClass::Peasant => (
            "You labour in the fields from first light.",
            InteractionDelta {
                strength: 2,
                faith: 1,
                health: -3,
                ..InteractionDelta::default()
            },
        ),
    };
    delta.mark_activity = Some(ACTIVITY_ID);

    let mut message = message.to_string();
    if dice.chance(odds::NEW_CLASSMATE_AT_WORK) {
        delta.new_classmate = true;
        message.push_str(" You make a new friend along the way.");
    }
    InteractionOutcome::new(message, Tone::Success, delta)
}
