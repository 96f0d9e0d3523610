//! Interactions with classmates.

use serde::{Deserialize, Serialize};

use super::combat::overpowers;
use super::{InteractionDelta, InteractionOutcome};
use crate::character::{Character, Tone};
use crate::dice::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassmateAction {
    Play,
    Chat,
    Fight,
}

impl ClassmateAction {
    pub const ALL: [ClassmateAction; 3] = [
        ClassmateAction::Play,
        ClassmateAction::Chat,
        ClassmateAction::Fight,
    ];
}

pub fn interact(
    character: &Character,
    classmate_id: &str,
    action: ClassmateAction,
    dice: &mut impl Dice,
) -> InteractionOutcome {
    let Some(classmate) = character.classmates.iter().find(|m| m.id == classmate_id) else {
        return InteractionOutcome::refused("You have no such classmate.");
    };
    let name = classmate.name.as_str();

    match action {
        ClassmateAction::Play => InteractionOutcome::new(
            format!("You and {name} play until dark."),
            Tone::Success,
            InteractionDelta {
                relationship: dice.roll(5, 10),
                ..InteractionDelta::default()
            },
        ),
        ClassmateAction::Chat => InteractionOutcome::new(
            format!("You swap gossip with {name}."),
            Tone::Success,
            InteractionDelta {
                relationship: dice.roll(2, 4),
                ..InteractionDelta::default()
            },
        ),
        ClassmateAction::Fight => {
            if overpowers(character.stats.strength, dice.roll(0, 99)) {
                InteractionOutcome::new(
                    format!("You win the scuffle with {name}."),
                    Tone::Success,
                    InteractionDelta {
                        relationship: -10,
                        honor: 2,
                        ..InteractionDelta::default()
                    },
                )
            } else {
                InteractionOutcome::new(
                    format!("{name} gives you a bloody nose."),
                    Tone::Fail,
                    InteractionDelta {
                        relationship: -5,
                        health: -5,
                        honor: -2,
                        ..InteractionDelta::default()
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::new_life;
    use crate::classmates::enroll;
    use crate::config::LifeConfig;
    use crate::dice::ScriptedDice;
    use crate::interactions::{apply, Target};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pupil() -> (Character, String) {
        let mut rng = StdRng::seed_from_u64(141);
        let mut c = new_life(&LifeConfig::default(), &mut rng).character;
        c.age = 7;
        enroll(&mut c, &mut rng);
        let id = c.classmates[0].id.clone();
        (c, id)
    }

    #[test]
    fn test_play_and_chat_ranges() {
        let (c, id) = pupil();
        let mut rng = StdRng::seed_from_u64(142);
        for _ in 0..50 {
            let play = interact(&c, &id, ClassmateAction::Play, &mut rng);
            assert!((5..=10).contains(&play.delta.relationship));
            let chat = interact(&c, &id, ClassmateAction::Chat, &mut rng);
            assert!((2..=4).contains(&chat.delta.relationship));
        }
    }

    #[test]
    fn test_fight_outcomes() {
        let (mut c, id) = pupil();
        c.stats.strength = 30;
        let mut low = ScriptedDice::never();
        let win = interact(&c, &id, ClassmateAction::Fight, &mut low);
        assert_eq!(win.delta.honor, 2);
        assert_eq!(win.delta.relationship, -10);

        let mut high = ScriptedDice::never().rolling_high();
        let loss = interact(&c, &id, ClassmateAction::Fight, &mut high);
        assert_eq!(loss.delta.health, -5);
        assert_eq!(loss.delta.honor, -2);
    }

    #[test]
    fn test_relationship_applied_to_classmate() {
        let (mut c, id) = pupil();
        let before = c.classmates[0].relationship;
        let mut dice = ScriptedDice::never();
        let out = interact(&c, &id, ClassmateAction::Play, &mut dice);
        apply(&mut c, &Target::Classmate(id), &out, &mut dice);
        assert_eq!(c.classmates[0].relationship, before + 5);
    }

    #[test]
    fn test_unknown_classmate() {
        let (c, _) = pupil();
        let mut dice = ScriptedDice::never();
        assert!(!interact(&c, "x", ClassmateAction::Play, &mut dice).changed());
    }
}
