//! Classmate cohorts.
//!
//! On the sixth birthday a child joins a cohort whose size and setting
//! depend on class: pages at court, pupils at grammar school, apprentices
//! in the workshop, or the children of the village.

use serde::{Deserialize, Serialize};

use crate::character::{Character, SocialClass};
use crate::dice::Dice;
use crate::names;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classmate {
    pub id: String,
    pub name: String,
    pub relationship: u8,
    pub social_class: SocialClass,
}

/// How many classmates a child of `class` starts with.
pub fn cohort_size(class: SocialClass) -> usize {
    match class {
        SocialClass::Nobility => 3,
        SocialClass::Gentry => 4,
        SocialClass::Artisan => 5,
        SocialClass::Peasant => 6,
    }
}

/// Where the cohort gathers, for log text.
pub fn setting(class: SocialClass) -> &'static str {
    match class {
        SocialClass::Nobility => "fellow pages at court",
        SocialClass::Gentry => "pupils at the grammar school",
        SocialClass::Artisan => "apprentices in the workshop",
        SocialClass::Peasant => "children of the village",
    }
}

/// A classmate of the player's class with the given starting relationship.
pub fn new_classmate(
    character: &mut Character,
    relationship: u8,
    dice: &mut impl Dice,
) -> Classmate {
    let class = character.social_class;
    Classmate {
        id: character.mint_id("classmate"),
        name: names::classmate_name(class, dice),
        relationship,
        social_class: class,
    }
}

/// Fill the cohort if it is empty. Returns a log line when one was formed.
pub fn enroll(character: &mut Character, dice: &mut impl Dice) -> Option<String> {
    if !character.classmates.is_empty() {
        return None;
    }
    let class = character.social_class;
    for _ in 0..cohort_size(class) {
        let relationship = dice.roll(20, 50) as u8;
        let classmate = new_classmate(character, relationship, dice);
        character.classmates.push(classmate);
    }
    Some(format!(
        "You now spend your days among {} {}.",
        cohort_size(class),
        setting(class)
    ))
}
