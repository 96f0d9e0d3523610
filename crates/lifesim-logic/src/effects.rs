//! Applying an event choice to the character.
//!
//! Only the deltas present in an [`Effect`] are applied. Percentage stats
//! clamp to `0..=100`; money and food floor at zero. An explicit `death`
//! ends the life before anything else is applied, and a resulting health of
//! exactly zero ends it before any side effect (trait, flags, sibling).

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::constants::relationship;
use crate::dice::Dice;
use crate::events::{Choice, Effect};
use crate::family;
use crate::stats::{clamp_amount, signed, StatKind};

/// Why a life ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Health ran out under the yearly strain of a job.
    Exhaustion { job: String },
    /// A choice that was fatal outright.
    Fate { account: String },
    /// Health driven to zero by a choice or interaction.
    Injuries { account: String },
}

impl DeathCause {
    pub fn describe(&self) -> String {
        match self {
            DeathCause::Exhaustion { job } => format!("worked to death as {job}"),
            DeathCause::Fate { account } => account.clone(),
            DeathCause::Injuries { account } => format!("died of injuries: {account}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceReport {
    /// Log lines, in order: the outcome, then the stat summary and side effects.
    pub lines: Vec<String>,
    pub death: Option<DeathCause>,
    /// Name of a sibling who joined the family.
    pub new_sibling: Option<String>,
}

/// Apply `choice` to the character.
pub fn apply_choice(
    character: &mut Character,
    choice: &Choice,
    dice: &mut impl Dice,
) -> ChoiceReport {
    let mut report = ChoiceReport {
        lines: vec![choice.outcome.clone()],
        ..ChoiceReport::default()
    };
    let effect = &choice.effect;

    if effect.death {
        report.death = Some(DeathCause::Fate {
            account: choice.outcome.clone(),
        });
        return report;
    }

    let changes = apply_deltas(character, effect);
    if !changes.is_empty() {
        report.lines.push(changes.join(", "));
    }

    if character.is_dead() {
        report.death = Some(DeathCause::Injuries {
            account: choice.label.clone(),
        });
        return report;
    }

    if let Some(t) = effect.add_trait {
        if !character.traits.iter().any(|existing| existing == t) {
            character.traits.push(t.to_string());
            report.lines.push(format!("You are now known as {t}."));
        }
    }
    if let Some(update) = effect.set_flags {
        update.merge_into(&mut character.flags);
    }
    if effect.add_sibling {
        let name = family::add_sibling(character, relationship::DOTING, false, dice);
        report.lines.push(format!("{name} joins the family."));
        report.new_sibling = Some(name);
    }
    report
}

/// Apply the stat, money and food deltas of `effect`, ignoring
/// `relationship` and side effects. Returns the applied changes for the log.
pub fn apply_deltas(character: &mut Character, effect: &Effect) -> Vec<String> {
    let mut changes = Vec::new();
    let stats = [
        (StatKind::Health, effect.health),
        (StatKind::Sanity, effect.sanity),
        (StatKind::Honor, effect.honor),
        (StatKind::Intelligence, effect.intelligence),
        (StatKind::Faith, effect.faith),
        (StatKind::Strength, effect.strength),
    ];
    for (kind, delta) in stats {
        if let Some(delta) = delta {
            let applied = character.stats.adjust(kind, delta);
            if applied != 0 {
                changes.push(signed(applied, kind.name()));
            }
        }
    }
    if let Some(delta) = effect.money {
        let before = character.money;
        character.money = clamp_amount(before, i64::from(delta));
        let applied = i64::from(character.money) - i64::from(before);
        if applied != 0 {
            changes.push(signed(applied as i32, "Coins"));
        }
    }
    if let Some(delta) = effect.food {
        let before = character.food;
        character.food = clamp_amount(before, i64::from(delta));
        let applied = i64::from(character.food) - i64::from(before);
        if applied != 0 {
            changes.push(signed(applied as i32, "Food"));
        }
    }
    changes
}
