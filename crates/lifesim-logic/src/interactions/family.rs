//! Interactions with parents and siblings.

use serde::{Deserialize, Serialize};

use super::{InteractionDelta, InteractionOutcome};
use crate::character::{Character, ItemKind, NewItem, SocialClass, Tone};
use crate::constants::{ages, odds};
use crate::dice::Dice;
use crate::family::{member, FamilyMember};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyAction {
    Chat,
    AskMoney,
    HelpWork,
    AskToy,
    Tantrum,
}

impl FamilyAction {
    pub const ALL: [FamilyAction; 5] = [
        FamilyAction::Chat,
        FamilyAction::AskMoney,
        FamilyAction::HelpWork,
        FamilyAction::AskToy,
        FamilyAction::Tantrum,
    ];

    /// Whether the action is limited to once per person per year.
    pub fn once_per_year(self) -> bool {
        !matches!(self, FamilyAction::Tantrum)
    }
}

const TOYS: &[&str] = &[
    "Wooden Doll",
    "Leather Ball",
    "Stick Horse",
    "Spinning Top",
    "Rag Doll",
];

/// Coins a family member of `class` hands over when asked.
pub fn gift_range(class: SocialClass) -> (i32, i32) {
    match class {
        SocialClass::Nobility => (20, 50),
        SocialClass::Gentry => (10, 25),
        SocialClass::Artisan => (3, 10),
        SocialClass::Peasant => (1, 3),
    }
}

pub fn interact(
    character: &Character,
    who: &FamilyMember,
    action: FamilyAction,
    dice: &mut impl Dice,
) -> InteractionOutcome {
    let Some(view) = member(character, who) else {
        return InteractionOutcome::refused("There is no one by that name to turn to.");
    };
    let name = view.name;
    let age = character.age;

    if action.once_per_year() && character.has_interacted(who.npc_id(), action) {
        return InteractionOutcome::refused(format!(
            "You have already done that with {name} this year."
        ));
    }
    let noted = |delta: InteractionDelta| InteractionDelta {
        note: action.once_per_year().then_some(action),
        ..delta
    };

    match action {
        FamilyAction::Chat => {
            if age < ages::CHAT_MIN {
                return InteractionOutcome::refused("You are too young to hold a conversation.");
            }
            let gain = dice.roll(1, 5);
            let message = match view.relationship {
                0..=30 => format!("{name} answers you curtly, but listens."),
                31..=70 => format!("You pass a pleasant hour talking with {name}."),
                _ => format!("{name} laughs with you late into the evening."),
            };
            InteractionOutcome::new(
                message,
                Tone::Success,
                noted(InteractionDelta {
                    relationship: gain,
                    ..InteractionDelta::default()
                }),
            )
        }
        FamilyAction::AskMoney => {
            if age < ages::ADULTHOOD {
                return InteractionOutcome::refused("Children do not ask for money.");
            }
            let (lo, hi) = gift_range(character.social_class);
            let purse = view.stats.map_or(i64::from(hi), |s| i64::from(s.money));
            if purse == 0 {
                return InteractionOutcome::refused(format!("{name} has nothing to spare."));
            }
            if dice.chance(f64::from(view.relationship) / 100.0) {
                let amount = i64::from(dice.roll(lo, hi)).min(purse);
                InteractionOutcome::new(
                    format!("{name} presses {amount} coins into your hand."),
                    Tone::Success,
                    noted(InteractionDelta {
                        money: amount,
                        npc_money: -amount,
                        ..InteractionDelta::default()
                    }),
                )
            } else {
                InteractionOutcome::new(
                    format!("{name} refuses and tells you to earn your own keep."),
                    Tone::Fail,
                    noted(InteractionDelta {
                        relationship: -3,
                        ..InteractionDelta::default()
                    }),
                )
            }
        }
        FamilyAction::HelpWork => {
            if !who.is_parent() {
                return InteractionOutcome::refused(format!("{name} has no work for you."));
            }
            if !(ages::WORK_MIN..=ages::CHILDHOOD_MAX).contains(&age) {
                return InteractionOutcome::refused("That is work for a child of the house.");
            }
            if !character.social_class.is_common() {
                return InteractionOutcome::refused("Servants do that work in your household.");
            }
            InteractionOutcome::new(
                format!("You work alongside {name} all day. They are proud of you."),
                Tone::Success,
                noted(InteractionDelta {
                    relationship: 10,
                    health: -2,
                    ..InteractionDelta::default()
                }),
            )
        }
        FamilyAction::AskToy => {
            if !who.is_parent() {
                return InteractionOutcome::refused(format!("{name} has no toys to give."));
            }
            if age > ages::CHILDHOOD_MAX {
                return InteractionOutcome::refused("You are too old for toys.");
            }
            let denial = if character.social_class == SocialClass::Peasant {
                odds::TOY_DENIAL_PEASANT
            } else {
                odds::TOY_DENIAL_OTHER
            };
            if dice.chance(denial) {
                InteractionOutcome::new(
                    format!("{name} says there is no money for toys."),
                    Tone::Fail,
                    noted(InteractionDelta {
                        relationship: -10,
                        ..InteractionDelta::default()
                    }),
                )
            } else {
                let toy = TOYS[dice.pick(TOYS.len())];
                InteractionOutcome::new(
                    format!("{name} gives you a {toy}."),
                    Tone::Success,
                    noted(InteractionDelta {
                        add_item: Some(NewItem {
                            name: toy.to_string(),
                            kind: ItemKind::Toy,
                            value: dice.roll(1, 3) as u32,
                        }),
                        ..InteractionDelta::default()
                    }),
                )
            }
        }
        FamilyAction::Tantrum => {
            if !who.is_parent() {
                return InteractionOutcome::refused(format!("{name} ignores your screaming."));
            }
            if age > ages::CHILDHOOD_MAX {
                return InteractionOutcome::refused("You are too old for tantrums.");
            }
            InteractionOutcome::new(
                format!("You scream and kick until {name} sends you to bed without supper."),
                Tone::Fail,
                InteractionDelta {
                    relationship: -10,
                    health: -2,
                    honor: -2,
                    ..InteractionDelta::default()
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::new_life;
    use crate::config::LifeConfig;
    use crate::dice::ScriptedDice;
    use crate::family::add_sibling;
    use crate::interactions::{apply, Target};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn person(age: u32, class: SocialClass) -> Character {
        let mut rng = StdRng::seed_from_u64(121);
        let mut c = new_life(&LifeConfig::default(), &mut rng).character;
        c.age = age;
        c.social_class = class;
        c
    }

    #[test]
    fn test_chat_once_per_year() {
        let mut c = person(8, SocialClass::Gentry);
        let mut dice = ScriptedDice::never().rolling_high();
        let target = Target::Family(FamilyMember::Mother);
        let before = c.family.mother.relationship;

        let first = interact(&c, &FamilyMember::Mother, FamilyAction::Chat, &mut dice);
        assert_eq!(first.delta.relationship, 5);
        apply(&mut c, &target, &first, &mut dice);
        assert_eq!(c.family.mother.relationship, (before + 5).min(100));

        let second = interact(&c, &FamilyMember::Mother, FamilyAction::Chat, &mut dice);
        assert!(!second.changed());

        // still allowed with the father
        assert!(interact(&c, &FamilyMember::Father, FamilyAction::Chat, &mut dice).changed());

        c.current_year += 1;
        assert!(interact(&c, &FamilyMember::Mother, FamilyAction::Chat, &mut dice).changed());
    }

    #[test]
    fn test_chat_too_young() {
        let c = person(4, SocialClass::Gentry);
        let mut dice = ScriptedDice::always();
        let out = interact(&c, &FamilyMember::Father, FamilyAction::Chat, &mut dice);
        assert_eq!(out.tone, Tone::Fail);
        assert!(!out.changed());
    }

    #[test]
    fn test_dead_parent_unreachable() {
        let mut c = person(8, SocialClass::Gentry);
        c.family.father.alive = false;
        let mut dice = ScriptedDice::always();
        assert!(!interact(&c, &FamilyMember::Father, FamilyAction::Chat, &mut dice).changed());
    }

    #[test]
    fn test_ask_money_success_capped_by_purse() {
        let mut c = person(15, SocialClass::Nobility);
        c.family.father.stats.money = 30;
        let mut dice = ScriptedDice::always().rolling_high();
        let out = interact(&c, &FamilyMember::Father, FamilyAction::AskMoney, &mut dice);
        assert_eq!(out.delta.money, 30);
        assert_eq!(out.delta.npc_money, -30);
    }

    #[test]
    fn test_ask_money_refused() {
        let mut c = person(15, SocialClass::Peasant);
        c.family.mother.stats.money = 10;
        let mut dice = ScriptedDice::never();
        let out = interact(&c, &FamilyMember::Mother, FamilyAction::AskMoney, &mut dice);
        assert_eq!(out.tone, Tone::Fail);
        assert_eq!(out.delta.money, 0);
        assert_eq!(out.delta.relationship, -3);
    }

    #[test]
    fn test_ask_money_child_refused() {
        let c = person(12, SocialClass::Gentry);
        let mut dice = ScriptedDice::always();
        assert!(!interact(&c, &FamilyMember::Father, FamilyAction::AskMoney, &mut dice).changed());
    }

    #[test]
    fn test_help_work_common_children_only() {
        let mut dice = ScriptedDice::never();
        let peasant = person(8, SocialClass::Peasant);
        let out = interact(&peasant, &FamilyMember::Father, FamilyAction::HelpWork, &mut dice);
        assert_eq!(out.delta.relationship, 10);
        assert_eq!(out.delta.health, -2);

        let noble = person(8, SocialClass::Nobility);
        let outcome = interact(&noble, &FamilyMember::Father, FamilyAction::HelpWork, &mut dice);
        assert!(!outcome.changed());
        let adult = person(20, SocialClass::Peasant);
        let outcome = interact(&adult, &FamilyMember::Father, FamilyAction::HelpWork, &mut dice);
        assert!(!outcome.changed());
    }

    #[test]
    fn test_ask_toy() {
        let mut c = person(6, SocialClass::Artisan);
        let mut denied = ScriptedDice::always();
        let out = interact(&c, &FamilyMember::Mother, FamilyAction::AskToy, &mut denied);
        assert_eq!(out.delta.relationship, -10);
        assert!(out.delta.add_item.is_none());

        let mut granted = ScriptedDice::never();
        let out = interact(&c, &FamilyMember::Father, FamilyAction::AskToy, &mut granted);
        let toy = out.delta.add_item.clone().unwrap();
        assert_eq!(toy.kind, ItemKind::Toy);
        assert!(TOYS.contains(&toy.name.as_str()));
        apply(&mut c, &Target::Family(FamilyMember::Father), &out, &mut granted);
        assert_eq!(c.inventory.len(), 1);
    }

    #[test]
    fn test_tantrum_repeatable() {
        let mut c = person(5, SocialClass::Gentry);
        let mut dice = ScriptedDice::never();
        for _ in 0..2 {
            let out = interact(&c, &FamilyMember::Mother, FamilyAction::Tantrum, &mut dice);
            assert_eq!(out.delta.honor, -2);
            apply(&mut c, &Target::Family(FamilyMember::Mother), &out, &mut dice);
        }
    }

    #[test]
    fn test_sibling_chat_but_no_toys() {
        let mut c = person(8, SocialClass::Peasant);
        let mut dice = ScriptedDice::never();
        add_sibling(&mut c, 50, true, &mut dice);
        let sib = FamilyMember::Sibling(c.siblings[0].id.clone());
        assert!(interact(&c, &sib, FamilyAction::Chat, &mut dice).changed());
        assert!(!interact(&c, &sib, FamilyAction::AskToy, &mut dice).changed());
    }
}
