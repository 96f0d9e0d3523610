//! Eating and selling carried items.

use serde::{Deserialize, Serialize};

use crate::character::{Character, ItemKind, Tone};
use crate::interactions::{InteractionDelta, InteractionOutcome};

/// Health restored by eating a food item.
pub const MEAL_HEALTH: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemUse {
    Eat,
    Sell,
}

pub fn use_item(character: &Character, item_id: &str, how: ItemUse) -> InteractionOutcome {
    let Some(item) = character.inventory.iter().find(|i| i.id == item_id) else {
        return InteractionOutcome::refused("You are not carrying that.");
    };
    match how {
        ItemUse::Eat if item.kind != ItemKind::Food => {
            InteractionOutcome::refused(format!("You cannot eat a {}.", item.name))
        }
        ItemUse::Eat => InteractionOutcome::new(
            format!("You eat the {} and feel your strength return.", item.name),
            Tone::Success,
            InteractionDelta {
                health: MEAL_HEALTH,
                remove_item: Some(item.id.clone()),
                ..InteractionDelta::default()
            },
        ),
        ItemUse::Sell => InteractionOutcome::new(
            format!("You sell the {} for {} coins.", item.name, item.value),
            Tone::Success,
            InteractionDelta {
                money: i64::from(item.value),
                remove_item: Some(item.id.clone()),
                ..InteractionDelta::default()
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{new_life, NewItem};
    use crate::config::LifeConfig;
    use crate::dice::ScriptedDice;
    use crate::interactions::{apply, Target};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stocked() -> (Character, String, String) {
        let mut rng = StdRng::seed_from_u64(171);
        let mut c = new_life(&LifeConfig::default(), &mut rng).character;
        c.stats.health = 50;
        let food = c.receive_item(NewItem {
            name: "Venison".to_string(),
            kind: ItemKind::Food,
            value: 15,
        });
        let toy = c.receive_item(NewItem {
            name: "Leather Ball".to_string(),
            kind: ItemKind::Toy,
            value: 2,
        });
        (c, food, toy)
    }

    #[test]
    fn test_eat_food() {
        let (mut c, food, _) = stocked();
        let mut dice = ScriptedDice::never();
        let out = use_item(&c, &food, ItemUse::Eat);
        apply(&mut c, &Target::Player, &out, &mut dice);
        assert_eq!(c.stats.health, 80);
        assert_eq!(c.inventory.len(), 1);
    }

    #[test]
    fn test_cannot_eat_toy() {
        let (c, _, toy) = stocked();
        assert!(!use_item(&c, &toy, ItemUse::Eat).changed());
    }

    #[test]
    fn test_sell() {
        let (mut c, _, toy) = stocked();
        let mut dice = ScriptedDice::never();
        let out = use_item(&c, &toy, ItemUse::Sell);
        apply(&mut c, &Target::Player, &out, &mut dice);
        assert_eq!(c.money, 2);
        assert!(c.inventory.iter().all(|i| i.id != toy));
    }

    #[test]
    fn test_missing_item() {
        let (c, _, _) = stocked();
        assert!(!use_item(&c, "item-999", ItemUse::Sell).changed());
    }
}
