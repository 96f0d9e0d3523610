//! Fixed historical events, keyed by (year, location).

use super::{choice, choice_from, Effect, Event, EventKind, EventTemplate};
use crate::character::Character;

#[derive(Debug, Clone, Copy)]
pub struct HistoricalEvent {
    pub year: u32,
    pub location: &'static str,
    pub template: EventTemplate,
}

/// The historical event for the character's current year and location, if
/// one exists and any of its choices fits their age.
pub fn lookup(character: &Character) -> Option<Event> {
    HISTORICAL_EVENTS
        .iter()
        .filter(|h| {
            h.year == character.current_year && h.location.eq_ignore_ascii_case(&character.location)
        })
        .find_map(|h| {
            h.template
                .instantiate_for_age(EventKind::Historical, character.age)
        })
}

pub static HISTORICAL_EVENTS: &[HistoricalEvent] = &[
    HistoricalEvent {
        year: 1509,
        location: "England",
        template: EventTemplate {
            id: "henry_viii_crowned",
            title: "A New King",
            description: "Young Henry, eighth of his name, is crowned. Bells ring in every parish.",
            choices: &[
                choice(
                    "celebrate",
                    "Join the celebrations",
                    "You dance in the street until the bonfires burn low.",
                    Effect {
                        sanity: Some(5),
                        health: Some(-2),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "pray",
                    "Pray for the new king",
                    "You kneel in the parish church and pray for a long reign.",
                    Effect {
                        faith: Some(5),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    HistoricalEvent {
        year: 1534,
        location: "England",
        template: EventTemplate {
            id: "act_of_supremacy",
            title: "The Act of Supremacy",
            description: "The King is Supreme Head of the Church of England. Oaths are demanded.",
            choices: &[
                choice_from(
                    13,
                    "swear",
                    "Swear the oath",
                    "You swear. Your conscience is quiet, or quiet enough.",
                    Effect {
                        honor: Some(5),
                        faith: Some(-5),
                        ..Effect::NONE
                    },
                ),
                choice_from(
                    13,
                    "refuse",
                    "Refuse the oath",
                    "You refuse. Men in the King's livery take note of your name.",
                    Effect {
                        faith: Some(10),
                        honor: Some(-15),
                        health: Some(-10),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "listen",
                    "Listen to the grown-ups argue",
                    "The adults speak in low voices about Rome and the King.",
                    Effect {
                        intelligence: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    HistoricalEvent {
        year: 1536,
        location: "England",
        template: EventTemplate {
            id: "dissolution",
            title: "Dissolution of the Monasteries",
            description: "The King's men close the abbeys. The monks are turned out.",
            choices: &[
                choice(
                    "mourn",
                    "Mourn the old ways",
                    "You light a candle for the monks who fed the poor.",
                    Effect {
                        faith: Some(5),
                        sanity: Some(-3),
                        ..Effect::NONE
                    },
                ),
                choice_from(
                    13,
                    "scavenge",
                    "Scavenge the abandoned abbey",
                    "You carry off lead and timber before anyone notices.",
                    Effect {
                        money: Some(15),
                        faith: Some(-5),
                        honor: Some(-5),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    HistoricalEvent {
        year: 1553,
        location: "England",
        template: EventTemplate {
            id: "mary_crowned",
            title: "Queen Mary",
            description: "Mary Tudor takes the throne and the old faith returns to the churches.",
            choices: &[
                choice(
                    "conform",
                    "Attend the Latin mass",
                    "The incense and Latin feel familiar to the old folk.",
                    Effect {
                        faith: Some(5),
                        ..Effect::NONE
                    },
                ),
                choice_from(
                    13,
                    "protest",
                    "Speak against the Queen's religion",
                    "Your words reach the wrong ears.",
                    Effect {
                        honor: Some(5),
                        health: Some(-15),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    HistoricalEvent {
        year: 1558,
        location: "England",
        template: EventTemplate {
            id: "elizabeth_crowned",
            title: "Gloriana",
            description: "Elizabeth, daughter of Henry and Anne Boleyn, is proclaimed Queen.",
            choices: &[
                choice(
                    "cheer",
                    "Cheer the new Queen",
                    "Hope runs through the crowd like a warm wind.",
                    Effect {
                        sanity: Some(5),
                        honor: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    HistoricalEvent {
        year: 1588,
        location: "England",
        template: EventTemplate {
            id: "spanish_armada",
            title: "The Armada",
            description: "The Spanish fleet sails up the Channel. Beacons blaze along the coast.",
            choices: &[
                choice_from(
                    15,
                    "muster",
                    "Muster with the militia",
                    "You drill at Tilbury and hear the Queen speak.",
                    Effect {
                        honor: Some(10),
                        strength: Some(3),
                        health: Some(-5),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "watch",
                    "Watch the beacons",
                    "Fire leaps from hill to hill through the night.",
                    Effect {
                        sanity: Some(-2),
                        faith: Some(3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    HistoricalEvent {
        year: 1603,
        location: "England",
        template: EventTemplate {
            id: "james_i",
            title: "The Union of Crowns",
            description: "The old Queen is dead. James of Scotland rides south to take the throne.",
            choices: &[
                choice(
                    "witness",
                    "Line the road to see him pass",
                    "A Scottish king, people mutter, but a king nonetheless.",
                    Effect {
                        intelligence: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    HistoricalEvent {
        year: 1665,
        location: "England",
        template: EventTemplate {
            id: "great_plague",
            title: "The Great Plague",
            description: "Red crosses appear on doors. The pestilence has come again.",
            choices: &[
                choice(
                    "flee",
                    "Flee to the countryside",
                    "You escape the worst of it, but lose what you left behind.",
                    Effect {
                        money: Some(-20),
                        health: Some(-5),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "stay",
                    "Shut the door and stay",
                    "The sickness takes neighbours on both sides.",
                    Effect {
                        health: Some(-30),
                        sanity: Some(-10),
                        ..Effect::NONE
                    },
                ),
                choice_from(
                    16,
                    "nurse",
                    "Nurse the sick",
                    "You tend the dying with vinegar and prayer.",
                    Effect {
                        honor: Some(15),
                        faith: Some(10),
                        health: Some(-40),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    HistoricalEvent {
        year: 1666,
        location: "England",
        template: EventTemplate {
            id: "great_fire",
            title: "The Great Fire",
            description: "A baker's oven in Pudding Lane sets London ablaze.",
            choices: &[
                choice(
                    "flee",
                    "Run for the river",
                    "You escape with the clothes on your back.",
                    Effect {
                        money: Some(-10),
                        ..Effect::NONE
                    },
                ),
                choice_from(
                    13,
                    "fight",
                    "Help pull down houses to stop the fire",
                    "Your hands are blistered, but the firebreak holds.",
                    Effect {
                        honor: Some(10),
                        health: Some(-15),
                        strength: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
];
