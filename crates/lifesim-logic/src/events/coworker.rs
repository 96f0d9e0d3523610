//! Reactive events raised by coworkers.
//!
//! Each year every coworker, in order, gets one roll; the first success
//! raises one of four events and no other coworker is rolled. Most choices
//! resolve to their listed effect; confronting a slanderer is a strength
//! contest and lending money needs the coins in hand.

use serde::Serialize;

use super::{Choice, Effect, Event, EventKind};
use crate::character::{Character, Tone};
use crate::constants::{costs, odds};
use crate::dice::Dice;
use crate::interactions::combat;
use crate::jobs::Coworker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReactiveKind {
    HelpRequest,
    TavernInvite,
    Slander,
    LoanRequest,
}

impl ReactiveKind {
    pub const ALL: [ReactiveKind; 4] = [
        ReactiveKind::HelpRequest,
        ReactiveKind::TavernInvite,
        ReactiveKind::Slander,
        ReactiveKind::LoanRequest,
    ];
}

pub mod choice_ids {
    pub const HELP_YES: &str = "help_yes";
    pub const HELP_NO: &str = "help_no";
    pub const TAVERN_YES: &str = "tavern_yes";
    pub const TAVERN_NO: &str = "tavern_no";
    pub const CONFRONT: &str = "confront";
    pub const IGNORE: &str = "ignore";
    pub const LEND_MONEY: &str = "lend_money";
    pub const REFUSE_MONEY: &str = "refuse_money";
}

use choice_ids::*;

const fn rel(delta: i32) -> Effect {
    Effect {
        relationship: Some(delta),
        ..Effect::NONE
    }
}

fn base_effect(choice_id: &str) -> Option<Effect> {
    let effect = match choice_id {
        HELP_YES => Effect {
            health: Some(-10),
            ..rel(15)
        },
        HELP_NO => rel(-5),
        TAVERN_YES => Effect {
            money: Some(-(costs::TAVERN_INVITE as i32)),
            health: Some(-5),
            ..rel(10)
        },
        TAVERN_NO => rel(-2),
        CONFRONT => rel(-20),
        IGNORE => Effect {
            faith: Some(5),
            honor: Some(-10),
            ..rel(-5)
        },
        LEND_MONEY => Effect {
            money: Some(-(costs::COWORKER_LOAN as i32)),
            honor: Some(5),
            ..rel(20)
        },
        REFUSE_MONEY => rel(-10),
        _ => return None,
    };
    Some(effect)
}

fn option(id: &str, label: &str, outcome: impl Into<String>) -> Choice {
    Choice {
        id: id.to_string(),
        label: label.to_string(),
        outcome: outcome.into(),
        effect: base_effect(id).unwrap_or_default(),
        min_age: None,
    }
}

/// Build the event a coworker raises.
pub fn build(kind: ReactiveKind, coworker: &Coworker) -> Event {
    let name = &coworker.name;
    let (id, title, description, choices) = match kind {
        ReactiveKind::HelpRequest => (
            "coworker_help_request",
            "A Plea for Help",
            format!(
                "{name} ({}) is behind on their work and begs for your help.",
                coworker.role
            ),
            vec![
                option(
                    HELP_YES,
                    "Help them",
                    format!("You stay late to help {name}."),
                ),
                option(
                    HELP_NO,
                    "Refuse",
                    format!("{name} mutters something under their breath."),
                ),
            ],
        ),
        ReactiveKind::TavernInvite => (
            "coworker_tavern_invite",
            "An Invitation",
            format!("{name} invites you for a drink after work."),
            vec![
                option(
                    TAVERN_YES,
                    "Go to the tavern",
                    format!("You and {name} drink until closing."),
                ),
                option(
                    TAVERN_NO,
                    "Decline",
                    format!("{name} shrugs and goes alone."),
                ),
            ],
        ),
        ReactiveKind::Slander => (
            "coworker_slander",
            "Slander",
            format!("You hear that {name} has been spreading lies about you."),
            vec![
                option(CONFRONT, "Confront them", format!("You seek out {name}.")),
                option(
                    IGNORE,
                    "Turn the other cheek",
                    "You let it pass and pray for patience.",
                ),
            ],
        ),
        ReactiveKind::LoanRequest => (
            "coworker_loan_request",
            "A Loan",
            format!(
                "{name} asks to borrow {} coins until quarter day.",
                costs::COWORKER_LOAN
            ),
            vec![
                option(
                    LEND_MONEY,
                    "Lend the coins",
                    format!("You count out the coins for {name}."),
                ),
                option(REFUSE_MONEY, "Refuse", format!("{name} looks wounded.")),
            ],
        ),
    };
    Event {
        id: id.to_string(),
        kind: EventKind::Coworker {
            coworker_id: coworker.id.clone(),
        },
        title: title.to_string(),
        description,
        choices,
    }
}

/// Roll each coworker in order; the first success raises an event.
pub fn roll_reactive(character: &Character, dice: &mut impl Dice) -> Option<Event> {
    let job = character.job.as_ref()?;
    for coworker in &job.coworkers {
        if dice.chance(odds::COWORKER_EVENT) {
            let kind = ReactiveKind::ALL[dice.pick(ReactiveKind::ALL.len())];
            return Some(build(kind, coworker));
        }
    }
    None
}

/// The final outcome of a coworker event choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub message: String,
    pub tone: Tone,
    /// Stat changes for the player; `relationship` applies to the coworker.
    pub effect: Effect,
}

/// Resolve `choice_id` against the coworker. `None` for an unknown choice.
pub fn resolve(
    character: &Character,
    coworker: &Coworker,
    choice_id: &str,
    dice: &mut impl Dice,
) -> Option<Resolution> {
    let base = base_effect(choice_id)?;
    let name = &coworker.name;
    let resolution = match choice_id {
        CONFRONT => {
            let opponent = dice.roll(40, 79);
            if combat::overpowers(character.stats.strength, opponent) {
                Resolution {
                    message: format!("You confront {name} and they back down before witnesses."),
                    tone: Tone::Success,
                    effect: Effect {
                        honor: Some(10),
                        ..base
                    },
                }
            } else {
                Resolution {
                    message: format!("You confront {name}, who knocks you into the mud."),
                    tone: Tone::Fail,
                    effect: Effect {
                        honor: Some(-20),
                        health: Some(-15),
                        ..base
                    },
                }
            }
        }
        LEND_MONEY if character.money < costs::COWORKER_LOAN => Resolution {
            message: format!("You have nothing to lend. {name} is disappointed."),
            tone: Tone::Fail,
            effect: rel(-5),
        },
        HELP_YES | TAVERN_YES | LEND_MONEY => Resolution {
            message: format!("{name} will remember your kindness."),
            tone: Tone::Success,
            effect: base,
        },
        IGNORE => Resolution {
            message: format!("You ignore {name}'s slander. Some take it as weakness."),
            tone: Tone::Neutral,
            effect: base,
        },
        _ => Resolution {
            message: format!("{name} will remember that."),
            tone: Tone::Fail,
            effect: base,
        },
    };
    Some(resolution)
}
