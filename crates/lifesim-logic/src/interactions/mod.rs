//! Social interactions and small personal actions.
//!
//! Every handler is a pure function of the character, a target, an action
//! and the dice, returning an [`InteractionOutcome`]. Unmet preconditions
//! give a `Fail` outcome with an empty delta. [`apply`] writes an outcome
//! back to the character; an empty delta changes nothing.
//!
//! | Module | Targets |
//! |--------|---------|
//! | [`family`] | Parents and siblings |
//! | [`coworker`] | Coworkers at the current job |
//! | [`classmate`] | The classmate cohort |
//! | [`combat`] | Strength contests shared by fights and duels |

pub mod classmate;
pub mod combat;
pub mod coworker;
pub mod family;

use serde::Serialize;

use crate::character::{Character, NewItem, Tone};
use crate::classmates;
use crate::constants::relationship;
use crate::dice::Dice;
use crate::family::{adjust_member, FamilyMember};
use crate::stats::{clamp_amount, clamp_percent, StatKind};

use self::family::FamilyAction;

/// Who an outcome's relationship change applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Target {
    Player,
    Family(FamilyMember),
    Coworker(String),
    Classmate(String),
}

/// Changes an interaction makes. Zero and `None` fields change nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractionDelta {
    pub relationship: i32,
    pub health: i32,
    pub honor: i32,
    pub faith: i32,
    pub strength: i32,
    pub money: i64,
    /// Taken from (negative) or given to the target NPC's purse.
    pub npc_money: i64,
    pub add_item: Option<NewItem>,
    pub remove_item: Option<String>,
    pub new_classmate: bool,
    pub job_relief: bool,
    pub mark_activity: Option<&'static str>,
    pub crime_strike: bool,
    pub note: Option<FamilyAction>,
}

impl InteractionDelta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionOutcome {
    pub message: String,
    pub tone: Tone,
    pub delta: InteractionDelta,
}

impl InteractionOutcome {
    pub fn new(message: impl Into<String>, tone: Tone, delta: InteractionDelta) -> Self {
        Self {
            message: message.into(),
            tone,
            delta,
        }
    }

    /// A refusal: nothing changes.
    pub fn refused(message: impl Into<String>) -> Self {
        Self::new(message, Tone::Fail, InteractionDelta::default())
    }

    pub fn changed(&self) -> bool {
        !self.delta.is_empty()
    }
}

/// Write an outcome back to the character. Returns `true` if the character
/// died of it. Once health hits zero no further changes are applied.
pub fn apply(
    character: &mut Character,
    target: &Target,
    outcome: &InteractionOutcome,
    dice: &mut impl Dice,
) -> bool {
    let delta = &outcome.delta;
    if delta.is_empty() {
        return false;
    }
    character.record(outcome.message.clone(), outcome.tone);

    match target {
        Target::Player => {}
        Target::Family(who) => adjust_member(character, who, delta.relationship, delta.npc_money),
        Target::Coworker(id) => {
            if let Some(w) = character.job.as_mut().and_then(|j| j.coworker_mut(id)) {
                w.relationship = clamp_percent(w.relationship, delta.relationship);
            }
        }
        Target::Classmate(id) => {
            if let Some(m) = character.classmates.iter_mut().find(|m| &m.id == id) {
                m.relationship = clamp_percent(m.relationship, delta.relationship);
            }
        }
    }

    for (kind, change) in [
        (StatKind::Health, delta.health),
        (StatKind::Honor, delta.honor),
        (StatKind::Faith, delta.faith),
        (StatKind::Strength, delta.strength),
    ] {
        if change != 0 {
            character.stats.adjust(kind, change);
        }
    }
    character.money = clamp_amount(character.money, delta.money);
    if character.is_dead() {
        return true;
    }

    if let Some(id) = &delta.remove_item {
        character.take_item(id);
    }
    if let Some(item) = &delta.add_item {
        character.receive_item(item.clone());
    }
    if delta.new_classmate {
        let classmate = classmates::new_classmate(character, relationship::ACQUAINTANCE, dice);
        character.classmates.push(classmate);
    }
    if delta.job_relief {
        character.flags.job_relief = true;
    }
    if let Some(activity) = delta.mark_activity {
        character.mark_activity(activity);
    }
    if delta.crime_strike {
        character.crime_strikes += 1;
    }
    if let (Some(action), Target::Family(who)) = (delta.note, target) {
        character.note_interaction(who.npc_id(), action);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::new_life;
    use crate::config::LifeConfig;
    use crate::dice::ScriptedDice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn person() -> Character {
        let mut rng = StdRng::seed_from_u64(111);
        new_life(&LifeConfig::default(), &mut rng).character
    }

    #[test]
    fn test_refusal_changes_nothing() {
        let mut c = person();
        let before = c.clone();
        let mut dice = ScriptedDice::never();
        let outcome = InteractionOutcome::refused("No.");
        assert!(!apply(&mut c, &Target::Player, &outcome, &mut dice));
        assert_eq!(c, before);
    }

    #[test]
    fn test_apply_family_relationship_and_money() {
        let mut c = person();
        c.family.father.relationship = 50;
        c.family.father.stats.money = 20;
        let mut dice = ScriptedDice::never();
        let outcome = InteractionOutcome::new(
            "Father gives you coins.",
            Tone::Success,
            InteractionDelta {
                relationship: 3,
                money: 10,
                npc_money: -10,
                note: Some(FamilyAction::AskMoney),
                ..InteractionDelta::default()
            },
        );
        apply(&mut c, &Target::Family(FamilyMember::Father), &outcome, &mut dice);
        assert_eq!(c.family.father.relationship, 53);
        assert_eq!(c.family.father.stats.money, 10);
        assert_eq!(c.money, 10);
        assert!(c.has_interacted("father", FamilyAction::AskMoney));
        let year = c.event_log.last().unwrap();
        assert_eq!(year.entries.last().unwrap().text, "Father gives you coins.");
    }

    #[test]
    fn test_death_stops_side_effects() {
        let mut c = person();
        c.stats.health = 5;
        let mut dice = ScriptedDice::never();
        let outcome = InteractionOutcome::new(
            "Ouch.",
            Tone::Fail,
            InteractionDelta {
                health: -20,
                crime_strike: true,
                ..InteractionDelta::default()
            },
        );
        assert!(apply(&mut c, &Target::Player, &outcome, &mut dice));
        assert_eq!(c.stats.health, 0);
        assert_eq!(c.crime_strikes, 0);
    }

    #[test]
    fn test_new_classmate_added() {
        let mut c = person();
        let mut dice = ScriptedDice::never();
        let outcome = InteractionOutcome::new(
            "A new friend.",
            Tone::Success,
            InteractionDelta {
                new_classmate: true,
                ..InteractionDelta::default()
            },
        );
        apply(&mut c, &Target::Player, &outcome, &mut dice);
        assert_eq!(c.classmates.len(), 1);
        assert_eq!(c.classmates[0].relationship, 25);
    }
}
