//! Era-tagged random events.
//!
//! An event is eligible when it shares a tag with the current era and the
//! character meets its age, gender and money conditions.

use super::{choice, choice_from, Effect, Event, EventKind, EventTemplate};
use crate::character::{Character, Gender};
use crate::dice::Dice;
use crate::eras;

#[derive(Debug, Clone, Copy)]
pub struct RandomEvent {
    pub tags: &'static [&'static str],
    pub min_age: u32,
    pub max_age: u32,
    pub gender: Option<Gender>,
    pub min_money: u32,
    pub template: EventTemplate,
}

impl RandomEvent {
    fn applies_to(&self, character: &Character, era_tags: &[&str]) -> bool {
        self.tags.iter().any(|t| era_tags.contains(t))
            && (self.min_age..=self.max_age).contains(&character.age)
            && self.gender.map_or(true, |g| g == character.gender)
            && character.money >= self.min_money
    }
}

/// Draw an eligible event from the current era's pool.
pub fn draw(character: &Character, dice: &mut impl Dice) -> Option<Event> {
    let era = character.era.and_then(eras::era_by_id)?;
    let eligible: Vec<Event> = RANDOM_EVENTS
        .iter()
        .filter(|e| e.applies_to(character, era.tags))
        .filter_map(|e| e.template.instantiate_for_age(EventKind::Random, character.age))
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let idx = dice.pick(eligible.len());
    eligible.into_iter().nth(idx)
}

const ANY: u32 = u32::MAX;

const BASE: RandomEvent = RandomEvent {
    tags: &[],
    min_age: 5,
    max_age: ANY,
    gender: None,
    min_money: 0,
    template: EventTemplate {
        id: "",
        title: "",
        description: "",
        choices: &[],
    },
};

pub static RANDOM_EVENTS: &[RandomEvent] = &[
    RandomEvent {
        tags: &["rural"],
        template: EventTemplate {
            id: "travelling_players",
            title: "Travelling Players",
            description: "A troupe of players sets up a stage in the market square.",
            choices: &[
                choice(
                    "watch",
                    "Watch the play",
                    "You laugh until your sides ache.",
                    Effect {
                        sanity: Some(5),
                        ..Effect::NONE
                    },
                ),
                choice_from(
                    13,
                    "pay_extra",
                    "Pay for a seat at the front",
                    "The players bow to you at the end.",
                    Effect {
                        money: Some(-2),
                        sanity: Some(8),
                        honor: Some(1),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["rural"],
        template: EventTemplate {
            id: "bad_winter",
            title: "A Hard Winter",
            description: "Snow lies deep into March. The stores run low.",
            choices: &[
                choice(
                    "ration",
                    "Eat sparingly",
                    "You grow thin, but you see the spring.",
                    Effect {
                        health: Some(-8),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "hunt",
                    "Set snares in the woods",
                    "A few rabbits keep the pot bubbling.",
                    Effect {
                        food: Some(3),
                        strength: Some(1),
                        health: Some(-3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["rural"],
        min_age: 13,
        min_money: 10,
        template: EventTemplate {
            id: "pedlar",
            title: "The Pedlar",
            description: "A pedlar offers ribbons, needles and a cure-all tonic.",
            choices: &[
                choice(
                    "tonic",
                    "Buy the tonic",
                    "It tastes of turpentine. You feel a little better.",
                    Effect {
                        money: Some(-10),
                        health: Some(5),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "decline",
                    "Send him on his way",
                    "He curses your stinginess.",
                    Effect::NONE,
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["plague"],
        template: EventTemplate {
            id: "sweating_sickness",
            title: "The Sweating Sickness",
            description: "A sickness that kills between dinner and supper runs through the town.",
            choices: &[
                choice(
                    "isolate",
                    "Keep to yourself",
                    "You avoid the sick and pray.",
                    Effect {
                        sanity: Some(-5),
                        faith: Some(2),
                        ..Effect::NONE
                    },
                ),
                choice_from(
                    13,
                    "tend",
                    "Tend a sick neighbour",
                    "You catch a touch of it, but they live.",
                    Effect {
                        health: Some(-20),
                        honor: Some(8),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["reformation"],
        min_age: 10,
        template: EventTemplate {
            id: "english_bible",
            title: "The English Bible",
            description: "A copy of the Bible in English is chained in the parish church.",
            choices: &[
                choice(
                    "read",
                    "Puzzle out the words",
                    "The stories are strange and vivid in your own tongue.",
                    Effect {
                        intelligence: Some(5),
                        faith: Some(3),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "ignore",
                    "Leave it to the clerks",
                    "Reading is for other people.",
                    Effect::NONE,
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["court"],
        min_age: 16,
        template: EventTemplate {
            id: "royal_progress",
            title: "The Royal Progress",
            description: "The monarch's progress passes through your county.",
            choices: &[
                choice(
                    "petition",
                    "Present a petition",
                    "A clerk takes your paper with a bored look.",
                    Effect {
                        honor: Some(3),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "gawk",
                    "Gawk from the roadside",
                    "You glimpse a jewelled hat and a great many horses.",
                    Effect {
                        sanity: Some(3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["rural"],
        min_age: 16,
        max_age: 40,
        gender: Some(Gender::Male),
        template: EventTemplate {
            id: "press_gang",
            title: "The Press Gang",
            description: "Men from the navy are seizing likely lads at the inn.",
            choices: &[
                choice(
                    "hide",
                    "Hide in the cellar",
                    "You wait among the barrels until they leave.",
                    Effect {
                        sanity: Some(-3),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "fight",
                    "Fight your way out",
                    "You break a nose and lose a tooth.",
                    Effect {
                        health: Some(-12),
                        strength: Some(3),
                        honor: Some(4),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["rural"],
        min_age: 16,
        max_age: 40,
        gender: Some(Gender::Female),
        template: EventTemplate {
            id: "wise_woman",
            title: "The Wise Woman",
            description: "The village wise woman offers to teach you her remedies.",
            choices: &[
                choice(
                    "learn",
                    "Learn her craft",
                    "You learn feverfew from foxglove.",
                    Effect {
                        intelligence: Some(6),
                        add_trait: Some("Herbalist"),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "refuse",
                    "Keep your distance",
                    "People whisper she is a witch.",
                    Effect {
                        faith: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["civil_war"],
        min_age: 16,
        template: EventTemplate {
            id: "king_or_parliament",
            title: "King or Parliament",
            description: "Armies march across the shires. Every household must choose a side.",
            choices: &[
                choice(
                    "royalist",
                    "Declare for the King",
                    "Cavaliers drink to your health.",
                    Effect {
                        honor: Some(6),
                        money: Some(-5),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "parliament",
                    "Declare for Parliament",
                    "You wear the orange sash of the New Model.",
                    Effect {
                        faith: Some(5),
                        health: Some(-5),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "neutral",
                    "Keep your head down",
                    "Both sides think you a coward.",
                    Effect {
                        honor: Some(-4),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["trade", "empire"],
        min_age: 16,
        min_money: 20,
        template: EventTemplate {
            id: "merchant_venture",
            title: "A Merchant Venture",
            description: "A ship's captain seeks investors for a voyage to the Indies.",
            choices: &[
                choice(
                    "invest",
                    "Invest twenty coins",
                    "The ship is lost off the Cape.",
                    Effect {
                        money: Some(-20),
                        sanity: Some(-5),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "decline",
                    "Keep your coin",
                    "You sleep soundly.",
                    Effect::NONE,
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["enlightenment"],
        min_age: 13,
        template: EventTemplate {
            id: "coffee_house",
            title: "The Coffee House",
            description: "Men argue about philosophy and the price of stocks over bitter coffee.",
            choices: &[
                choice(
                    "debate",
                    "Join the debate",
                    "You leave with a headache and new ideas.",
                    Effect {
                        intelligence: Some(6),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "listen",
                    "Listen quietly",
                    "You learn a great deal about other people's business.",
                    Effect {
                        intelligence: Some(3),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["industry"],
        min_age: 8,
        template: EventTemplate {
            id: "mill_work",
            title: "The Mill",
            description: "The new cotton mill is hiring hands of any age.",
            choices: &[
                choice(
                    "work",
                    "Take a place at the looms",
                    "The noise never leaves your ears.",
                    Effect {
                        money: Some(5),
                        health: Some(-10),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "refuse",
                    "Stay away",
                    "You find other ways to get by.",
                    Effect::NONE,
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["rural"],
        min_age: 18,
        template: EventTemplate {
            id: "highwayman",
            title: "The Highwayman",
            description: "A masked rider blocks the road. \"Stand and deliver!\"",
            choices: &[
                choice(
                    "deliver",
                    "Hand over your purse",
                    "He tips his hat and rides off.",
                    Effect {
                        money: Some(-15),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "resist",
                    "Draw on him",
                    "His pistol is faster. The road is quiet again.",
                    Effect {
                        death: true,
                        ..Effect::NONE
                    },
                ),
                choice(
                    "run",
                    "Run for the hedge",
                    "A ball whistles past your ear.",
                    Effect {
                        health: Some(-10),
                        sanity: Some(-5),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
    RandomEvent {
        tags: &["rural"],
        template: EventTemplate {
            id: "lost_purse",
            title: "A Lost Purse",
            description: "You find a purse in the mud by the churchyard.",
            choices: &[
                choice(
                    "keep",
                    "Keep it",
                    "Three coins richer, and a little ashamed.",
                    Effect {
                        money: Some(3),
                        honor: Some(-3),
                        ..Effect::NONE
                    },
                ),
                choice(
                    "return",
                    "Hand it to the priest",
                    "The owner blesses you at Sunday mass.",
                    Effect {
                        honor: Some(5),
                        faith: Some(2),
                        ..Effect::NONE
                    },
                ),
            ],
        },
        ..BASE
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::new_life;
    use crate::config::LifeConfig;
    use crate::dice::ScriptedDice;
    use crate::eras::EraId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn person(age: u32, year: u32, money: u32) -> Character {
        let mut rng = StdRng::seed_from_u64(61);
        let mut c = new_life(&LifeConfig::default(), &mut rng).character;
        c.age = age;
        c.current_year = year;
        c.era = eras::era_for("England", year).map(|e| e.id);
        c.money = money;
        c
    }

    fn eligible_ids(c: &Character) -> HashSet<String> {
        let mut dice = StdRng::seed_from_u64(62);
        (0..400).filter_map(|_| draw(c, &mut dice)).map(|e| e.id).collect()
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = RANDOM_EVENTS.iter().map(|e| e.template.id).collect();
        assert_eq!(ids.len(), RANDOM_EVENTS.len());
    }

    #[test]
    fn test_toddlers_have_no_random_events() {
        let mut dice = ScriptedDice::never();
        assert!(draw(&person(3, 1503, 0), &mut dice).is_none());
    }

    #[test]
    fn test_era_tags_filter() {
        let tudor = eligible_ids(&person(30, 1550, 100));
        assert!(tudor.contains("english_bible"));
        assert!(!tudor.contains("king_or_parliament"));
        assert!(!tudor.contains("mill_work"));

        let stuart = eligible_ids(&person(30, 1645, 100));
        assert!(stuart.contains("king_or_parliament"));
        assert!(!stuart.contains("english_bible"));
    }

    #[test]
    fn test_money_condition() {
        let poor = eligible_ids(&person(30, 1550, 0));
        assert!(!poor.contains("pedlar"));
        let rich = eligible_ids(&person(30, 1550, 50));
        assert!(rich.contains("pedlar"));
    }

    #[test]
    fn test_gender_condition() {
        let mut c = person(20, 1550, 0);
        c.gender = Gender::Female;
        let ids = eligible_ids(&c);
        assert!(ids.contains("wise_woman"));
        assert!(!ids.contains("press_gang"));
    }

    #[test]
    fn test_no_era_no_events() {
        let mut c = person(30, 1950, 0);
        c.era = None;
        let mut dice = ScriptedDice::never();
        assert!(draw(&c, &mut dice).is_none());
        assert_eq!(c.era, None::<EraId>);
    }

    #[test]
    fn test_under_age_choices_removed() {
        let c = person(8, 1550, 0);
        let mut dice = StdRng::seed_from_u64(63);
        for _ in 0..200 {
            if let Some(e) = draw(&c, &mut dice) {
                assert!(e.choices.iter().all(|ch| ch.min_age.map_or(true, |m| m <= 8)));
            }
        }
    }
}
