//! Parents, siblings, NPC stats and yearly family aging.
//!
//! NPCs carry a small stat bundle that decays with age. A parent who dies
//! stays in the record, frozen, with `alive == false`; a sibling who dies is
//! removed from the list.

use serde::{Deserialize, Serialize};

use crate::character::{Character, Gender, SocialClass};
use crate::constants::{ages, odds};
use crate::dice::Dice;
use crate::names;
use crate::stats::{clamp_amount, clamp_percent};

/// Stat bundle for parents and siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcStats {
    pub vitality: u8,
    pub faith: u8,
    pub strength: u8,
    pub honor: u8,
    pub money: u32,
}

impl NpcStats {
    /// Roll a fresh bundle; honor and money depend on class.
    pub fn generate(class: SocialClass, dice: &mut impl Dice) -> Self {
        let (honor, money) = match class {
            SocialClass::Nobility => (dice.roll(70, 100), dice.roll(500, 1000)),
            SocialClass::Gentry => (dice.roll(50, 80), dice.roll(100, 300)),
            SocialClass::Artisan => (dice.roll(30, 60), dice.roll(50, 200)),
            SocialClass::Peasant => (dice.roll(10, 40), dice.roll(0, 25)),
        };
        Self {
            vitality: dice.roll(50, 100) as u8,
            faith: dice.roll(20, 100) as u8,
            strength: dice.roll(20, 80) as u8,
            honor: honor as u8,
            money: money as u32,
        }
    }
}

/// Yearly household income of an adult NPC.
pub fn annual_income(class: SocialClass) -> u32 {
    match class {
        SocialClass::Nobility => 100,
        SocialClass::Gentry => 50,
        SocialClass::Artisan => 20,
        SocialClass::Peasant => 5,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    pub name: String,
    pub occupation: String,
    pub alive: bool,
    pub age: u32,
    pub relationship: u8,
    pub stats: NpcStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub father: Parent,
    pub mother: Parent,
}

impl Family {
    /// False once both parents are dead.
    pub fn is_alive(&self) -> bool {
        self.father.alive || self.mother.alive
    }

    /// Whether a new child can still be born this year.
    pub fn can_have_children(&self) -> bool {
        self.mother.alive && self.mother.age < ages::MOTHER_FERTILE_BELOW
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sibling {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub relationship: u8,
    pub stats: Option<NpcStats>,
}

/// Addresses one member of the player's family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyMember {
    Father,
    Mother,
    Sibling(String),
}

impl FamilyMember {
    pub fn npc_id(&self) -> &str {
        match self {
            FamilyMember::Father => "father",
            FamilyMember::Mother => "mother",
            FamilyMember::Sibling(id) => id,
        }
    }

    pub fn is_parent(&self) -> bool {
        !matches!(self, FamilyMember::Sibling(_))
    }
}

/// A read-only view of one living family member.
#[derive(Debug, Clone, Copy)]
pub struct MemberView<'a> {
    pub name: &'a str,
    pub relationship: u8,
    pub stats: Option<&'a NpcStats>,
}

/// Look up a living family member.
pub fn member<'a>(character: &'a Character, who: &FamilyMember) -> Option<MemberView<'a>> {
    match who {
        FamilyMember::Father | FamilyMember::Mother => {
            let parent = parent(&character.family, who)?;
            parent.alive.then_some(MemberView {
                name: &parent.name,
                relationship: parent.relationship,
                stats: Some(&parent.stats),
            })
        }
        FamilyMember::Sibling(id) => {
            let sibling = character.siblings.iter().find(|s| &s.id == id)?;
            Some(MemberView {
                name: &sibling.name,
                relationship: sibling.relationship,
                stats: sibling.stats.as_ref(),
            })
        }
    }
}

fn parent<'a>(family: &'a Family, who: &FamilyMember) -> Option<&'a Parent> {
    match who {
        FamilyMember::Father => Some(&family.father),
        FamilyMember::Mother => Some(&family.mother),
        FamilyMember::Sibling(_) => None,
    }
}

/// Change a living member's relationship and money. No-op for the dead.
pub fn adjust_member(
    character: &mut Character,
    who: &FamilyMember,
    relationship_delta: i32,
    money_delta: i64,
) {
    let (relationship, stats) = match who {
        FamilyMember::Father | FamilyMember::Mother => {
            let parent = match who {
                FamilyMember::Father => &mut character.family.father,
                _ => &mut character.family.mother,
            };
            if !parent.alive {
                return;
            }
            (&mut parent.relationship, Some(&mut parent.stats))
        }
        FamilyMember::Sibling(id) => {
            let Some(sibling) = character.siblings.iter_mut().find(|s| &s.id == id) else {
                return;
            };
            (&mut sibling.relationship, sibling.stats.as_mut())
        }
    };
    *relationship = clamp_percent(*relationship, relationship_delta);
    if let Some(stats) = stats {
        stats.money = clamp_amount(stats.money, money_delta);
    }
}

fn occupations(class: SocialClass) -> (&'static str, &'static str) {
    match class {
        SocialClass::Nobility => ("Lord of the manor", "Lady of the house"),
        SocialClass::Gentry => ("Landowner", "Mistress of the estate"),
        SocialClass::Artisan => ("Craftsman", "Weaver"),
        SocialClass::Peasant => ("Tenant farmer", "Farm wife"),
    }
}

/// Parents for a newborn of `class` sharing `surname`.
pub fn new_family(class: SocialClass, surname: &str, dice: &mut impl Dice) -> Family {
    let (father_job, mother_job) = occupations(class);
    let father = Parent {
        name: format!("{} {surname}", names::given_name(Gender::Male, dice)),
        occupation: father_job.to_string(),
        alive: true,
        age: dice.roll(25, 34) as u32,
        relationship: 75,
        stats: NpcStats::generate(class, dice),
    };
    let mother = Parent {
        name: format!("{} {surname}", names::given_name(Gender::Female, dice)),
        occupation: mother_job.to_string(),
        alive: true,
        age: dice.roll(20, 27) as u32,
        relationship: 85,
        stats: NpcStats::generate(class, dice),
    };
    Family { father, mother }
}

/// Age one NPC by a year (`age` is the new age). Returns `true` if they die.
pub fn age_npc(stats: &mut NpcStats, age: u32, class: SocialClass, dice: &mut impl Dice) -> bool {
    let decay = if age > ages::OLD_AGE {
        dice.roll(5, 15)
    } else {
        dice.roll(0, 5)
    };
    stats.vitality = clamp_percent(stats.vitality, -decay);

    if age < ages::PRIME_BELOW {
        stats.strength = clamp_percent(stats.strength, dice.roll(0, 5));
    } else if age > ages::OLD_AGE {
        stats.strength = clamp_percent(stats.strength, -dice.roll(2, 8));
    }
    stats.faith = clamp_percent(stats.faith, dice.roll(-2, 2));
    stats.honor = clamp_percent(stats.honor, dice.roll(-2, 2));

    if age >= ages::ADULTHOOD {
        stats.money = stats.money.saturating_add(annual_income(class));
        if dice.chance(odds::NPC_EXPENSE) {
            stats.money = clamp_amount(stats.money, -i64::from(dice.roll(5, 20)));
        }
    }

    stats.vitality == 0 || age > ages::MAX_AGE
}

/// Age every living parent and sibling by one year.
///
/// Returns the death notices produced, in order.
pub fn age_family(character: &mut Character, dice: &mut impl Dice) -> Vec<String> {
    let class = character.social_class;
    let mut deaths = Vec::new();

    for (title, parent) in [
        ("father", &mut character.family.father),
        ("mother", &mut character.family.mother),
    ] {
        if !parent.alive {
            continue;
        }
        parent.age += 1;
        if age_npc(&mut parent.stats, parent.age, class, dice) {
            parent.alive = false;
            deaths.push(format!(
                "Your {title}, {}, has died at the age of {}.",
                parent.name, parent.age
            ));
        }
    }

    character.siblings.retain_mut(|sibling| {
        sibling.age += 1;
        let died = match sibling.stats.as_mut() {
            Some(stats) => age_npc(stats, sibling.age, class, dice),
            None => sibling.age > ages::MAX_AGE,
        };
        if died {
            deaths.push(format!(
                "Your sibling {} has died at the age of {}.",
                sibling.name, sibling.age
            ));
        }
        !died
    });

    deaths
}

/// Add a sibling of random gender. Returns the new sibling's name.
pub fn add_sibling(
    character: &mut Character,
    relationship: u8,
    with_stats: bool,
    dice: &mut impl Dice,
) -> String {
    let gender = Gender::random(dice);
    let name = names::sibling_name(gender, dice);
    let stats = with_stats.then(|| NpcStats::generate(character.social_class, dice));
    let id = character.mint_id("sibling");
    character.siblings.push(Sibling {
        id,
        name: name.clone(),
        gender,
        age: 0,
        relationship,
        stats,
    });
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::new_life;
    use crate::config::LifeConfig;
    use crate::dice::ScriptedDice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn newborn(seed: u64) -> Character {
        let mut rng = StdRng::seed_from_u64(seed);
        new_life(&LifeConfig::default(), &mut rng).character
    }

    fn bundle(vitality: u8) -> NpcStats {
        NpcStats {
            vitality,
            faith: 50,
            strength: 50,
            honor: 50,
            money: 10,
        }
    }

    #[test]
    fn test_generate_ranges_by_class() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let noble = NpcStats::generate(SocialClass::Nobility, &mut rng);
            assert!((70..=100).contains(&noble.honor));
            assert!((500..=1000).contains(&noble.money));
            let peasant = NpcStats::generate(SocialClass::Peasant, &mut rng);
            assert!((10..=40).contains(&peasant.honor));
            assert!(peasant.money <= 25);
            assert!((50..=100).contains(&peasant.vitality));
            assert!((20..=80).contains(&peasant.strength));
        }
    }

    #[test]
    fn test_young_npc_gains_strength_no_income() {
        let mut stats = bundle(80);
        let mut dice = ScriptedDice::never().rolling_high();
        let died = age_npc(&mut stats, 10, SocialClass::Gentry, &mut dice);
        assert!(!died);
        assert_eq!(stats.vitality, 75);
        assert_eq!(stats.strength, 55);
        assert_eq!(stats.money, 10);
    }

    #[test]
    fn test_adult_npc_earns_income() {
        let mut stats = bundle(80);
        let mut dice = ScriptedDice::never();
        age_npc(&mut stats, 40, SocialClass::Nobility, &mut dice);
        assert_eq!(stats.money, 110);
        assert_eq!(stats.strength, 50);
    }

    #[test]
    fn test_expense_never_negative() {
        let mut stats = bundle(80);
        stats.money = 0;
        let mut dice = ScriptedDice::always().rolling_high();
        age_npc(&mut stats, 40, SocialClass::Peasant, &mut dice);
        assert_eq!(stats.money, 0);
    }

    #[test]
    fn test_old_npc_declines() {
        let mut stats = bundle(80);
        let mut dice = ScriptedDice::never().rolling_high();
        age_npc(&mut stats, 60, SocialClass::Artisan, &mut dice);
        assert_eq!(stats.vitality, 65);
        assert_eq!(stats.strength, 42);
    }

    #[test]
    fn test_death_by_vitality_or_age() {
        let mut dice = ScriptedDice::never().rolling_high();
        assert!(age_npc(&mut bundle(10), 60, SocialClass::Peasant, &mut dice));
        let mut dice = ScriptedDice::never();
        assert!(age_npc(&mut bundle(100), 101, SocialClass::Peasant, &mut dice));
        assert!(!age_npc(&mut bundle(100), 100, SocialClass::Peasant, &mut dice));
    }

    #[test]
    fn test_dead_parent_frozen() {
        let mut c = newborn(3);
        c.family.father.alive = false;
        let frozen = c.family.father.clone();
        let mut dice = ScriptedDice::never();
        age_family(&mut c, &mut dice);
        assert_eq!(c.family.father, frozen);
    }

    #[test]
    fn test_family_not_alive_after_both_die() {
        let mut c = newborn(4);
        c.family.father.stats.vitality = 1;
        c.family.mother.stats.vitality = 1;
        c.family.father.age = 60;
        c.family.mother.age = 60;
        let mut dice = ScriptedDice::never();
        let deaths = age_family(&mut c, &mut dice);
        assert_eq!(deaths.len(), 2);
        assert!(!c.family.is_alive());

        // a second year produces no further notices
        let deaths = age_family(&mut c, &mut dice);
        assert!(deaths.is_empty());
    }

    #[test]
    fn test_sibling_removed_on_death() {
        let mut c = newborn(5);
        let mut dice = ScriptedDice::never();
        add_sibling(&mut c, 50, false, &mut dice);
        c.siblings[0].age = 100;
        let deaths = age_family(&mut c, &mut dice);
        assert_eq!(deaths.len(), 1);
        assert!(c.siblings.is_empty());
    }

    #[test]
    fn test_fertility_window() {
        let mut c = newborn(6);
        c.family.mother.age = 44;
        assert!(c.family.can_have_children());
        c.family.mother.age = 45;
        assert!(!c.family.can_have_children());
        c.family.mother.age = 30;
        c.family.mother.alive = false;
        assert!(!c.family.can_have_children());
    }

    #[test]
    fn test_adjust_member_clamps_and_skips_dead() {
        let mut c = newborn(7);
        adjust_member(&mut c, &FamilyMember::Mother, 50, -1_000_000);
        assert_eq!(c.family.mother.relationship, 100);
        assert_eq!(c.family.mother.stats.money, 0);

        c.family.father.alive = false;
        let before = c.family.father.relationship;
        adjust_member(&mut c, &FamilyMember::Father, -30, 0);
        assert_eq!(c.family.father.relationship, before);
        assert!(member(&c, &FamilyMember::Father).is_none());
    }

    #[test]
    fn test_add_sibling_fields() {
        let mut c = newborn(8);
        let mut dice = ScriptedDice::never();
        let name = add_sibling(&mut c, 50, true, &mut dice);
        let s = &c.siblings[0];
        assert_eq!(s.name, name);
        assert_eq!(s.age, 0);
        assert_eq!(s.relationship, 50);
        assert!(s.stats.is_some());
        let view = member(&c, &FamilyMember::Sibling(s.id.clone())).unwrap();
        assert_eq!(view.relationship, 50);
    }
}
