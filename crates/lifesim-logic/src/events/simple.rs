//! Fallback pool of everyday events, filtered by age and class only.

use super::{choice, Effect, Event, EventKind, EventTemplate};
use crate::character::{Character, SocialClass};
use crate::dice::Dice;

#[derive(Debug, Clone, Copy)]
pub struct SimpleEvent {
    pub min_age: u32,
    pub max_age: u32,
    pub classes: Option<&'static [SocialClass]>,
    pub template: EventTemplate,
}

impl SimpleEvent {
    fn applies_to(&self, character: &Character) -> bool {
        (self.min_age..=self.max_age).contains(&character.age)
            && self
                .classes
                .map_or(true, |classes| classes.contains(&character.social_class))
    }
}

pub fn draw(character: &Character, dice: &mut impl Dice) -> Option<Event> {
    let eligible: Vec<Event> = SIMPLE_EVENTS
        .iter()
        .filter(|e| e.applies_to(character))
        .filter_map(|e| e.template.instantiate_for_age(EventKind::Simple, character.age))
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let idx = dice.pick(eligible.len());
    eligible.into_iter().nth(idx)
}

pub static SIMPLE_EVENTS: &[SimpleEvent] = &[
    SimpleEvent {
        min_age: 2,
        max_age: 4,
        classes: None,
        template: EventTemplate {
            id: "puddle",
            title: "A Muddy Puddle",
            description: "There is a glorious puddle in the yard.",
            choices: &[
                choice(
                    "splash",
                    "Splash in it",
                    "You are scrubbed raw afterwards, but it was worth it.",
                    Effect {
                        sanity: Some(3),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "stay_clean",
                    "Stay clean",
                    "Your mother is pleased with you.",
                    Effect {
                        honor: Some(1),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    SimpleEvent {
        min_age: 5,
        max_age: 200,
        classes: None,
        template: EventTemplate {
            id: "sunday_sermon",
            title: "Sunday Sermon",
            description: "The priest preaches long and loud about hellfire.",
            choices: &[
                choice(
                    "attend",
                    "Listen attentively",
                    "You leave the church sober and thoughtful.",
                    Effect {
                        faith: Some(3),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "doze",
                    "Doze in the pew",
                    "The churchwarden prods you awake.",
                    Effect {
                        honor: Some(-1),
                        sanity: Some(1),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    SimpleEvent {
        min_age: 5,
        max_age: 200,
        classes: Some(&[SocialClass::Artisan, SocialClass::Peasant]),
        template: EventTemplate {
            id: "market_day",
            title: "Market Day",
            description: "The town fills with stalls, animals and shouting.",
            choices: &[
                choice(
                    "help",
                    "Help carry goods",
                    "Your arms ache, but a stallholder tosses you a coin.",
                    Effect {
                        strength: Some(2),
                        money: Some(1),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "wander",
                    "Wander the stalls",
                    "You see a dancing bear and a man swallowing fire.",
                    Effect {
                        sanity: Some(3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    SimpleEvent {
        min_age: 5,
        max_age: 200,
        classes: Some(&[SocialClass::Nobility, SocialClass::Gentry]),
        template: EventTemplate {
            id: "feast",
            title: "A Feast",
            description: "Your household hosts a feast with swan, venison and sugar subtleties.",
            choices: &[
                choice(
                    "indulge",
                    "Eat your fill",
                    "You groan for two days afterwards.",
                    Effect {
                        health: Some(-3),
                        sanity: Some(4),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "converse",
                    "Charm the guests",
                    "A guest remarks on your good manners.",
                    Effect {
                        honor: Some(3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    SimpleEvent {
        min_age: 13,
        max_age: 200,
        classes: None,
        template: EventTemplate {
            id: "alehouse",
            title: "The Alehouse",
            description: "Friends call you to the alehouse after a long week.",
            choices: &[
                choice(
                    "drink",
                    "Drink with them",
                    "A merry night and a sore head.",
                    Effect {
                        sanity: Some(5),
                        health: Some(-2),
                        money: Some(-1),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "home",
                    "Go home",
                    "You sleep early and rise refreshed.",
                    Effect {
                        health: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
];
