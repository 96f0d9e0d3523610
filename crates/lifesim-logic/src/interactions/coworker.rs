//! Interactions with coworkers at the current job.

use serde::{Deserialize, Serialize};

use super::combat::{duel_tier, overpowers, DuelTier};
use super::{InteractionDelta, InteractionOutcome};
use crate::character::{Character, Tone};
use crate::constants::{costs, odds, relationship, HERESY_YEARS};
use crate::dice::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoworkerAction {
    Compliment,
    Tavern,
    Gift,
    Loan,
    Please,
    Help,
    Report,
    Insult,
    Sabotage,
    Heresy,
    Duel,
}

impl CoworkerAction {
    pub const ALL: [CoworkerAction; 11] = [
        CoworkerAction::Compliment,
        CoworkerAction::Tavern,
        CoworkerAction::Gift,
        CoworkerAction::Loan,
        CoworkerAction::Please,
        CoworkerAction::Help,
        CoworkerAction::Report,
        CoworkerAction::Insult,
        CoworkerAction::Sabotage,
        CoworkerAction::Heresy,
        CoworkerAction::Duel,
    ];
}

fn delta(relationship: i32) -> InteractionDelta {
    InteractionDelta {
        relationship,
        ..InteractionDelta::default()
    }
}

pub fn interact(
    character: &Character,
    coworker_id: &str,
    action: CoworkerAction,
    dice: &mut impl Dice,
) -> InteractionOutcome {
    let Some(coworker) = character.job.as_ref().and_then(|j| j.coworker(coworker_id)) else {
        return InteractionOutcome::refused("You have no such coworker.");
    };
    let name = coworker.name.as_str();

    match action {
        CoworkerAction::Compliment => InteractionOutcome::new(
            format!("You praise {name}'s work. They look pleased."),
            Tone::Success,
            delta(5),
        ),
        CoworkerAction::Tavern => {
            if character.money < costs::TAVERN_ROUND {
                return InteractionOutcome::refused(format!(
                    "You cannot afford a round with {name}."
                ));
            }
            InteractionOutcome::new(
                format!("You buy {name} ale until the landlord throws you out."),
                Tone::Success,
                InteractionDelta {
                    money: -i64::from(costs::TAVERN_ROUND),
                    health: -5,
                    ..delta(10)
                },
            )
        }
        CoworkerAction::Gift => {
            if character.inventory.is_empty() {
                return InteractionOutcome::refused("You have nothing to give.");
            }
            let item = &character.inventory[dice.pick(character.inventory.len())];
            InteractionOutcome::new(
                format!("You give {name} your {}.", item.name),
                Tone::Success,
                InteractionDelta {
                    remove_item: Some(item.id.clone()),
                    ..delta(15)
                },
            )
        }
        CoworkerAction::Loan => {
            if coworker.relationship <= relationship::LOAN_ABOVE {
                return InteractionOutcome::refused(format!(
                    "{name} does not trust you enough to lend you money."
                ));
            }
            let amount = dice.roll(10, 50);
            InteractionOutcome::new(
                format!("{name} lends you {amount} coins."),
                Tone::Success,
                InteractionDelta {
                    money: i64::from(amount),
                    ..delta(-5)
                },
            )
        }
        CoworkerAction::Please => InteractionOutcome::new(
            format!("You take on {name}'s hardest tasks. The master notices."),
            Tone::Neutral,
            InteractionDelta {
                honor: 5,
                health: -10,
                ..delta(3)
            },
        ),
        CoworkerAction::Help => {
            if coworker.relationship <= relationship::HELP_ABOVE {
                return InteractionOutcome::refused(format!("{name} has no time for you."));
            }
            InteractionOutcome::new(
                format!("{name} agrees to shoulder some of your work next year."),
                Tone::Success,
                InteractionDelta {
                    job_relief: true,
                    ..delta(-10)
                },
            )
        }
        CoworkerAction::Report => InteractionOutcome::new(
            format!("You report {name}'s misdeeds to the master."),
            Tone::Neutral,
            InteractionDelta {
                honor: 10,
                ..delta(-100)
            },
        ),
        CoworkerAction::Insult => {
            if !dice.chance(odds::INSULT_FIGHT) {
                return InteractionOutcome::new(
                    format!("You insult {name}, who turns away in disgust."),
                    Tone::Neutral,
                    delta(-20),
                );
            }
            if overpowers(character.stats.strength, dice.roll(40, 79)) {
                InteractionOutcome::new(
                    format!("{name} swings at you, and you knock them flat."),
                    Tone::Success,
                    InteractionDelta {
                        honor: 5,
                        health: -10,
                        ..delta(-20)
                    },
                )
            } else {
                InteractionOutcome::new(
                    format!("{name} answers your insult with a beating."),
                    Tone::Fail,
                    InteractionDelta {
                        honor: -10,
                        health: -20,
                        ..delta(-20)
                    },
                )
            }
        }
        CoworkerAction::Sabotage => {
            if dice.chance(odds::SABOTAGE_SUCCESS) {
                InteractionOutcome::new(
                    format!("You spoil {name}'s work and no one suspects you."),
                    Tone::Success,
                    delta(-30),
                )
            } else {
                InteractionOutcome::new(
                    format!("You are caught sabotaging {name} and fined."),
                    Tone::Fail,
                    InteractionDelta {
                        honor: -15,
                        money: -20,
                        ..delta(-50)
                    },
                )
            }
        }
        CoworkerAction::Heresy => {
            if !HERESY_YEARS.contains(&character.current_year) {
                return InteractionOutcome::refused(
                    "No one cares much about heresy these days.",
                );
            }
            InteractionOutcome::new(
                format!("You whisper to the churchwardens that {name} is a heretic."),
                Tone::Neutral,
                InteractionDelta {
                    honor: -10,
                    ..delta(-50)
                },
            )
        }
        CoworkerAction::Duel => {
            let opponent = dice.roll(30, 89);
            let tier = duel_tier(character.stats.strength, opponent);
            let (message, tone, honor, health) = match tier {
                DuelTier::Rout => (
                    format!("You disarm {name} with contemptuous ease."),
                    Tone::Success,
                    20,
                    -15,
                ),
                DuelTier::Victory => (
                    format!("You beat {name}, but not without wounds."),
                    Tone::Success,
                    10,
                    -30,
                ),
                DuelTier::Defeat => (
                    format!("{name} gets the better of you."),
                    Tone::Fail,
                    -15,
                    -40,
                ),
                DuelTier::Crushed if dice.chance(odds::DUEL_NEAR_FATAL) => (
                    format!("{name} leaves you bleeding in the dust, near death."),
                    Tone::Fail,
                    -30,
                    -80,
                ),
                DuelTier::Crushed => (
                    format!("{name} humiliates you before the whole workshop."),
                    Tone::Fail,
                    -20,
                    -60,
                ),
            };
            InteractionOutcome::new(
                message,
                tone,
                InteractionDelta {
                    honor,
                    health,
                    ..delta(-100)
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{new_life, ItemKind, NewItem, SocialClass};
    use crate::config::LifeConfig;
    use crate::dice::ScriptedDice;
    use crate::interactions::{apply, Target};
    use crate::jobs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn worker() -> (Character, String) {
        let mut rng = StdRng::seed_from_u64(131);
        let mut c = new_life(&LifeConfig::default(), &mut rng).character;
        c.age = 20;
        c.current_year = 1520;
        c.social_class = SocialClass::Artisan;
        c.stats.honor = 60;
        c.stats.health = 90;
        c.stats.strength = 50;
        let mut dice = ScriptedDice::never();
        jobs::hire(&mut c, "market_trader", &mut dice).unwrap();
        let id = c.job.as_ref().unwrap().coworkers[0].id.clone();
        (c, id)
    }

    fn set_relationship(c: &mut Character, id: &str, value: u8) {
        c.job.as_mut().unwrap().coworker_mut(id).unwrap().relationship = value;
    }

    #[test]
    fn test_unknown_coworker() {
        let (c, _) = worker();
        let mut dice = ScriptedDice::never();
        let out = interact(&c, "nobody", CoworkerAction::Compliment, &mut dice);
        assert!(!out.changed());
        assert_eq!(out.tone, Tone::Fail);
    }

    #[test]
    fn test_tavern_without_money_changes_nothing() {
        let (mut c, id) = worker();
        c.money = 3;
        let before = c.clone();
        let mut dice = ScriptedDice::never();
        let out = interact(&c, &id, CoworkerAction::Tavern, &mut dice);
        assert_eq!(out.tone, Tone::Fail);
        apply(&mut c, &Target::Coworker(id), &out, &mut dice);
        assert_eq!(c, before);
    }

    #[test]
    fn test_tavern_with_money() {
        let (mut c, id) = worker();
        c.money = 7;
        let mut dice = ScriptedDice::never();
        let out = interact(&c, &id, CoworkerAction::Tavern, &mut dice);
        apply(&mut c, &Target::Coworker(id.clone()), &out, &mut dice);
        assert_eq!(c.money, 2);
        assert_eq!(c.stats.health, 85);
        assert_eq!(c.job.as_ref().unwrap().coworker(&id).unwrap().relationship, 60);
    }

    #[test]
    fn test_gift_removes_item() {
        let (mut c, id) = worker();
        let mut dice = ScriptedDice::never();
        assert!(!interact(&c, &id, CoworkerAction::Gift, &mut dice).changed());
        c.receive_item(NewItem {
            name: "Spinning Top".to_string(),
            kind: ItemKind::Toy,
            value: 2,
        });
        let out = interact(&c, &id, CoworkerAction::Gift, &mut dice);
        apply(&mut c, &Target::Coworker(id), &out, &mut dice);
        assert!(c.inventory.is_empty());
    }

    #[test]
    fn test_loan_and_help_thresholds() {
        let (mut c, id) = worker();
        let mut dice = ScriptedDice::never();
        set_relationship(&mut c, &id, 80);
        assert!(!interact(&c, &id, CoworkerAction::Loan, &mut dice).changed());
        set_relationship(&mut c, &id, 81);
        let loan = interact(&c, &id, CoworkerAction::Loan, &mut dice);
        assert_eq!(loan.delta.money, 10);
        assert_eq!(loan.delta.relationship, -5);

        set_relationship(&mut c, &id, 60);
        assert!(!interact(&c, &id, CoworkerAction::Help, &mut dice).changed());
        set_relationship(&mut c, &id, 61);
        let help = interact(&c, &id, CoworkerAction::Help, &mut dice);
        apply(&mut c, &Target::Coworker(id), &help, &mut dice);
        assert!(c.flags.job_relief);
    }

    #[test]
    fn test_insult_without_fight() {
        let (c, id) = worker();
        let mut dice = ScriptedDice::never();
        let out = interact(&c, &id, CoworkerAction::Insult, &mut dice);
        assert_eq!(out.delta.relationship, -20);
        assert_eq!(out.delta.health, 0);
    }

    #[test]
    fn test_insult_fight_lost() {
        let (c, id) = worker();
        let mut dice = ScriptedDice::always().rolling_high();
        let out = interact(&c, &id, CoworkerAction::Insult, &mut dice);
        assert_eq!(out.delta.honor, -10);
        assert_eq!(out.delta.health, -20);
    }

    #[test]
    fn test_sabotage_caught() {
        let (c, id) = worker();
        let mut dice = ScriptedDice::never();
        let out = interact(&c, &id, CoworkerAction::Sabotage, &mut dice);
        assert_eq!(out.delta.money, -20);
        assert_eq!(out.delta.relationship, -50);
    }

    #[test]
    fn test_heresy_window() {
        let (mut c, id) = worker();
        let mut dice = ScriptedDice::never();
        assert!(interact(&c, &id, CoworkerAction::Heresy, &mut dice).changed());
        c.current_year = 1750;
        assert!(!interact(&c, &id, CoworkerAction::Heresy, &mut dice).changed());
    }

    #[test]
    fn test_duel_tiers() {
        let (mut c, id) = worker();
        c.stats.strength = 90;
        let mut low = ScriptedDice::never();
        let rout = interact(&c, &id, CoworkerAction::Duel, &mut low);
        assert_eq!((rout.delta.honor, rout.delta.health), (20, -15));
        assert_eq!(rout.delta.relationship, -100);

        c.stats.strength = 10;
        let mut crushed = ScriptedDice::never().rolling_high();
        let out = interact(&c, &id, CoworkerAction::Duel, &mut crushed);
        assert_eq!((out.delta.honor, out.delta.health), (-20, -60));

        let mut near_fatal = ScriptedDice::always().rolling_high();
        let out = interact(&c, &id, CoworkerAction::Duel, &mut near_fatal);
        assert_eq!((out.delta.honor, out.delta.health), (-30, -80));
    }

    #[test]
    fn test_near_fatal_duel_can_kill() {
        let (mut c, id) = worker();
        c.stats.strength = 10;
        c.stats.health = 70;
        let mut dice = ScriptedDice::always().rolling_high();
        let out = interact(&c, &id, CoworkerAction::Duel, &mut dice);
        assert!(apply(&mut c, &Target::Coworker(id), &out, &mut dice));
    }
}
