//! Name generation utilities

use crate::character::{Gender, SocialClass};
use crate::dice::Dice;

/// A given name for `gender`.
pub fn given_name(gender: Gender, dice: &mut impl Dice) -> &'static str {
    let table = match gender {
        Gender::Male => MALE_NAMES,
        Gender::Female => FEMALE_NAMES,
    };
    table[dice.pick(table.len())]
}

/// A surname fitting `class`.
pub fn surname_for_class(class: SocialClass, dice: &mut impl Dice) -> &'static str {
    let table = match class {
        SocialClass::Nobility => NOBLE_SURNAMES,
        SocialClass::Gentry => GENTRY_SURNAMES,
        SocialClass::Artisan | SocialClass::Peasant => COMMON_SURNAMES,
    };
    table[dice.pick(table.len())]
}

/// Full name of a newborn sibling: given name plus a common surname.
pub fn sibling_name(gender: Gender, dice: &mut impl Dice) -> String {
    let given = given_name(gender, dice);
    let surname = COMMON_SURNAMES[dice.pick(COMMON_SURNAMES.len())];
    format!("{given} {surname}")
}

/// A coworker's name with a workplace byname, e.g. "Thomas the Elder".
pub fn coworker_name(dice: &mut impl Dice) -> String {
    let gender = Gender::random(dice);
    let given = given_name(gender, dice);
    let byname = BYNAMES[dice.pick(BYNAMES.len())];
    format!("{given} {byname}")
}

/// A classmate's name; surname drawn from their class.
pub fn classmate_name(class: SocialClass, dice: &mut impl Dice) -> String {
    let gender = Gender::random(dice);
    let given = given_name(gender, dice);
    let surname = surname_for_class(class, dice);
    format!("{given} {surname}")
}

static MALE_NAMES: &[&str] = &[
    "William", "John", "Henry", "Edward", "Thomas", "Richard", "George", "Robert", "James",
    "Charles",
];

static FEMALE_NAMES: &[&str] = &[
    "Elizabeth", "Mary", "Catherine", "Anne", "Margaret", "Jane", "Alice", "Dorothy", "Joan",
    "Agnes",
];

static COMMON_SURNAMES: &[&str] = &[
    "Smith", "Taylor", "Brown", "Wilson", "Moore", "Clark", "White", "Hall", "Wood", "Baker",
];

static GENTRY_SURNAMES: &[&str] = &[
    "Ashley", "Carew", "Digby", "Fortescue", "Hampden", "Knollys", "Lovell", "Paston",
];

static NOBLE_SURNAMES: &[&str] = &[
    "Howard", "Percy", "Neville", "Seymour", "Stanley", "Talbot", "Courtenay", "Grey",
];

static BYNAMES: &[&str] = &[
    "the Elder",
    "the Younger",
    "of the Mill",
    "Longshanks",
    "the Quiet",
    "Redhand",
    "of Kent",
    "the Loud",
];
