//! Childhood events for ages 0..=12, each shown at most once per life.

use super::{choice, choice_from, Effect, Event, EventKind, EventTemplate};
use crate::character::{Character, FlagUpdate, SocialClass};
use crate::dice::Dice;

use SocialClass::{Artisan, Gentry, Nobility, Peasant};

#[derive(Debug, Clone, Copy)]
pub struct ChildhoodEvent {
    pub classes: &'static [SocialClass],
    pub min_age: u32,
    pub max_age: u32,
    pub template: EventTemplate,
}

impl ChildhoodEvent {
    fn applies_to(&self, character: &Character) -> bool {
        character.is_child()
            && (self.min_age..=self.max_age).contains(&character.age)
            && self.classes.contains(&character.social_class)
            && !character.used_childhood_events.contains(self.template.id)
    }
}

/// Draw an unused childhood event fitting the character, if any.
///
/// The caller records the id in `used_childhood_events` once selected.
pub fn draw(character: &Character, dice: &mut impl Dice) -> Option<Event> {
    let eligible: Vec<Event> = CHILDHOOD_EVENTS
        .iter()
        .filter(|e| e.applies_to(character))
        .filter_map(|e| {
            e.template
                .instantiate_for_age(EventKind::Childhood, character.age)
        })
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let idx = dice.pick(eligible.len());
    eligible.into_iter().nth(idx)
}

const ALL: &[SocialClass] = &[Nobility, Gentry, Artisan, Peasant];
const COMMON: &[SocialClass] = &[Artisan, Peasant];
const GENTLE: &[SocialClass] = &[Nobility, Gentry];

pub static CHILDHOOD_EVENTS: &[ChildhoodEvent] = &[
    ChildhoodEvent {
        classes: ALL,
        min_age: 1,
        max_age: 2,
        template: EventTemplate {
            id: "first_steps",
            title: "First Steps",
            description: "You pull yourself up on a stool and totter across the floor.",
            choices: &[
                choice(
                    "keep_walking",
                    "Keep walking",
                    "You make it all the way to your mother.",
                    Effect {
                        strength: Some(2),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "sit_down",
                    "Sit down and cry",
                    "Someone scoops you up. Walking can wait.",
                    Effect {
                        sanity: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: ALL,
        min_age: 2,
        max_age: 4,
        template: EventTemplate {
            id: "childhood_fever",
            title: "A Fever",
            description: "You burn with fever for three days. The household fears the worst.",
            choices: &[
                choice(
                    "herbs",
                    "Drink the bitter herbs",
                    "The fever breaks on the fourth morning.",
                    Effect {
                        health: Some(-10),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "pray",
                    "Listen to your mother's prayers",
                    "You recover, and your mother thanks God.",
                    Effect {
                        health: Some(-15),
                        faith: Some(5),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: ALL,
        min_age: 3,
        max_age: 6,
        template: EventTemplate {
            id: "foundling",
            title: "A Foundling",
            description: "A swaddled baby is left at the door one winter morning.",
            choices: &[
                choice(
                    "take_in",
                    "Beg your parents to keep the baby",
                    "The baby stays. You have a new sibling.",
                    Effect {
                        add_sibling: true,
                        faith: Some(3),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "parish",
                    "Let the parish take it",
                    "The baby is carried off to the church.",
                    Effect::NONE,
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: COMMON,
        min_age: 4,
        max_age: 8,
        template: EventTemplate {
            id: "geese",
            title: "Minding the Geese",
            description: "You are sent to keep the geese out of the barley.",
            choices: &[
                choice(
                    "chase",
                    "Chase them with a stick",
                    "The geese learn respect. So do you.",
                    Effect {
                        strength: Some(3),
                        health: Some(-2),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "nap",
                    "Nap under the hedge",
                    "The geese eat the barley. Your father is not pleased.",
                    Effect {
                        honor: Some(-3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: GENTLE,
        min_age: 4,
        max_age: 8,
        template: EventTemplate {
            id: "letters",
            title: "Letters",
            description: "A tutor arrives to teach you your letters.",
            choices: &[
                choice(
                    "study",
                    "Study diligently",
                    "By Michaelmas you can read the psalter.",
                    Effect {
                        intelligence: Some(8),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "mischief",
                    "Put a frog in his satchel",
                    "He leaves. Another, sterner tutor arrives.",
                    Effect {
                        intelligence: Some(2),
                        honor: Some(-2),
                        add_trait: Some("Mischievous"),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: ALL,
        min_age: 5,
        max_age: 9,
        template: EventTemplate {
            id: "parish_festival",
            title: "The May Festival",
            description: "The village raises a maypole and there are sweets and games.",
            choices: &[
                choice(
                    "dance",
                    "Dance around the maypole",
                    "You dance until you are dizzy.",
                    Effect {
                        sanity: Some(5),
                        strength: Some(1),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "steal_sweets",
                    "Steal sweets from the stall",
                    "Sticky fingers and a guilty heart.",
                    Effect {
                        health: Some(3),
                        honor: Some(-4),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: &[Nobility],
        min_age: 7,
        max_age: 10,
        template: EventTemplate {
            id: "page_service",
            title: "Sent as a Page",
            description: "You are sent to a greater lord's household to learn courtly ways.",
            choices: &[
                choice(
                    "serve",
                    "Serve with grace",
                    "You learn to carve meat and bow low.",
                    Effect {
                        honor: Some(8),
                        set_flags: Some(
                            FlagUpdate {
                                living_with: Some("a lord's household"),
                                ..FlagUpdate::NONE
                            },
                        ),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "homesick",
                    "Write home every week",
                    "Your letters make your mother weep.",
                    Effect {
                        sanity: Some(-3),
                        intelligence: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: &[Gentry],
        min_age: 7,
        max_age: 11,
        template: EventTemplate {
            id: "grammar_school",
            title: "Grammar School",
            description: "You walk each morning to the grammar school to learn Latin by the birch.",
            choices: &[
                choice(
                    "latin",
                    "Master your declensions",
                    "Amo, amas, amat.",
                    Effect {
                        intelligence: Some(10),
                        health: Some(-2),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "truant",
                    "Play truant by the river",
                    "The birch finds you eventually.",
                    Effect {
                        health: Some(-5),
                        sanity: Some(3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: &[Artisan],
        min_age: 7,
        max_age: 11,
        template: EventTemplate {
            id: "workshop_sweeping",
            title: "The Workshop Floor",
            description: "You sweep shavings in your father's workshop and watch the journeymen.",
            choices: &[
                choice(
                    "watch",
                    "Watch the masters closely",
                    "Your hands itch to try the tools.",
                    Effect {
                        intelligence: Some(4),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "try_tools",
                    "Sneak a try with the chisel",
                    "A gouge in the bench and a gash in your thumb.",
                    Effect {
                        strength: Some(2),
                        health: Some(-4),
                        add_trait: Some("Curious"),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: &[Peasant],
        min_age: 6,
        max_age: 10,
        template: EventTemplate {
            id: "harvest",
            title: "The Harvest",
            description: "Every pair of hands is needed to bring in the harvest before the rain.",
            choices: &[
                choice(
                    "glean",
                    "Glean the fields",
                    "You gather a bag of grain for the household.",
                    Effect {
                        food: Some(5),
                        strength: Some(2),
                        health: Some(-3),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "hide",
                    "Hide in the hayloft",
                    "No one finds you, but the rain ruins a field.",
                    Effect {
                        honor: Some(-5),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: ALL,
        min_age: 8,
        max_age: 12,
        template: EventTemplate {
            id: "first_confession",
            title: "Confession",
            description: "The priest asks whether you have anything to confess.",
            choices: &[
                choice(
                    "confess",
                    "Confess everything",
                    "Three Hail Marys and a lighter heart.",
                    Effect {
                        faith: Some(6),
                        honor: Some(2),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "lie",
                    "Say nothing",
                    "The words stick in your throat.",
                    Effect {
                        faith: Some(-3),
                        sanity: Some(-2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: COMMON,
        min_age: 9,
        max_age: 12,
        template: EventTemplate {
            id: "apprentice_offer",
            title: "An Apprenticeship",
            description: "A master in the next town offers to take you on.",
            choices: &[
                choice(
                    "accept",
                    "Go with the master",
                    "You leave home with a bundle and a letter.",
                    Effect {
                        intelligence: Some(5),
                        set_flags: Some(
                            FlagUpdate {
                                living_with: Some("master"),
                                has_apprentice: Some(true),
                                ..FlagUpdate::NONE
                            },
                        ),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "stay_home",
                    "Stay with your family",
                    "Your mother is relieved.",
                    Effect {
                        sanity: Some(3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: GENTLE,
        min_age: 10,
        max_age: 12,
        template: EventTemplate {
            id: "first_hunt",
            title: "The First Hunt",
            description: "You ride out with the adults after a stag.",
            choices: &[
                choice(
                    "ride_hard",
                    "Ride at the front",
                    "You are first to the kill and blooded on the spot.",
                    Effect {
                        honor: Some(6),
                        strength: Some(3),
                        ..Effect::NONE
                    },
                ),
                choice_from(
                    11,
                    "spare",
                    "Let the stag go",
                    "The adults laugh, but you sleep soundly.",
                    Effect {
                        faith: Some(4),
                        honor: Some(-3),
                        add_trait: Some("Gentle"),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
    ChildhoodEvent {
        classes: ALL,
        min_age: 10,
        max_age: 12,
        template: EventTemplate {
            id: "millpond",
            title: "The Frozen Millpond",
            description: "The other children dare you to cross the millpond on the thin ice.",
            choices: &[
                choice(
                    "cross",
                    "Cross the ice",
                    "The ice cracks beneath you. You crawl out, half drowned.",
                    Effect {
                        health: Some(-25),
                        honor: Some(5),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "refuse",
                    "Refuse the dare",
                    "They call you a coward all winter.",
                    Effect {
                        honor: Some(-3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
    },
];
