//! The player record and new-life generation.
//!
//! A [`Character`] is the single piece of mutable game state. It is owned
//! by the engine, replaced wholesale on death, and serialisable as a
//! snapshot for whatever renders it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::classmates::Classmate;
use crate::config::LifeConfig;
use crate::dice::Dice;
use crate::eras::{self, EraId};
use crate::family::{self, Family, Sibling};
use crate::interactions::family::FamilyAction;
use crate::jobs::Job;
use crate::names;
use crate::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn random(dice: &mut impl Dice) -> Self {
        if dice.chance(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SocialClass {
    Nobility,
    Gentry,
    Artisan,
    Peasant,
}

impl SocialClass {
    pub const ALL: [SocialClass; 4] = [
        SocialClass::Nobility,
        SocialClass::Gentry,
        SocialClass::Artisan,
        SocialClass::Peasant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SocialClass::Nobility => "nobility",
            SocialClass::Gentry => "gentry",
            SocialClass::Artisan => "artisan",
            SocialClass::Peasant => "peasant",
        }
    }

    /// Birth weight out of 100.
    pub fn birth_weight(self) -> i32 {
        match self {
            SocialClass::Nobility => 5,
            SocialClass::Gentry => 15,
            SocialClass::Artisan => 30,
            SocialClass::Peasant => 50,
        }
    }

    /// Draw a class by birth weight.
    pub fn random(dice: &mut impl Dice) -> Self {
        let mut roll = dice.roll(1, 100);
        for class in Self::ALL {
            roll -= class.birth_weight();
            if roll <= 0 {
                return class;
            }
        }
        SocialClass::Peasant
    }

    /// Artisans and peasants: the classes that work with their hands.
    pub fn is_common(self) -> bool {
        matches!(self, SocialClass::Artisan | SocialClass::Peasant)
    }
}

/// How a log line reads: good news, plain news, or bad news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Success,
    Neutral,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    pub tone: Tone,
}

/// Everything that happened in one year of the character's life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearLog {
    pub year: u32,
    pub entries: Vec<LogEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Toy,
    Food,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub value: u32,
}

/// An item about to enter the inventory; the id is minted on arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub kind: ItemKind,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeFlags {
    pub is_orphan: bool,
    pub living_with: String,
    pub has_apprentice: bool,
    pub last_major_event: Option<String>,
    /// Earned by a coworker's help; halves the next year's job vitality cost.
    pub job_relief: bool,
}

impl Default for NarrativeFlags {
    fn default() -> Self {
        Self {
            is_orphan: false,
            living_with: "parents".to_string(),
            has_apprentice: false,
            last_major_event: None,
            job_relief: false,
        }
    }
}

/// A partial flag update carried by event choices. `None` leaves a flag as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlagUpdate {
    pub is_orphan: Option<bool>,
    pub living_with: Option<&'static str>,
    pub has_apprentice: Option<bool>,
}

impl FlagUpdate {
    pub const NONE: FlagUpdate = FlagUpdate {
        is_orphan: None,
        living_with: None,
        has_apprentice: None,
    };

    pub fn merge_into(&self, flags: &mut NarrativeFlags) {
        if let Some(v) = self.is_orphan {
            flags.is_orphan = v;
        }
        if let Some(v) = self.living_with {
            flags.living_with = v.to_string();
        }
        if let Some(v) = self.has_apprentice {
            flags.has_apprentice = v;
        }
    }
}

/// One family interaction, kept for once-per-year gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub year: u32,
    pub npc_id: String,
    pub action: FamilyAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub surname: String,
    pub gender: Gender,
    pub age: u32,
    pub social_class: SocialClass,
    pub location: String,
    pub birth_year: u32,
    pub current_year: u32,
    pub era: Option<EraId>,
    pub stats: Stats,
    pub money: u32,
    pub food: u32,
    pub traits: Vec<String>,
    pub flags: NarrativeFlags,
    pub used_childhood_events: BTreeSet<String>,
    pub family: Family,
    pub siblings: Vec<Sibling>,
    pub classmates: Vec<Classmate>,
    pub event_log: Vec<YearLog>,
    pub npc_interactions: Vec<InteractionRecord>,
    /// Activity id → last year it was performed.
    pub activity_history: BTreeMap<String, u32>,
    pub crime_strikes: u32,
    pub inventory: Vec<Item>,
    pub job: Option<Job>,
    next_id: u64,
}

impl Character {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn is_child(&self) -> bool {
        self.age <= crate::constants::ages::CHILDHOOD_MAX
    }

    pub fn is_dead(&self) -> bool {
        crate::stats::is_dead(self.stats.health)
    }

    /// A fresh id, unique within this life.
    pub fn mint_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    /// Append a line to this year's log.
    pub fn record(&mut self, text: impl Into<String>, tone: Tone) {
        let entry = LogEntry {
            text: text.into(),
            tone,
        };
        let year = self.current_year;
        if let Some(log) = self.event_log.last_mut().filter(|l| l.year == year) {
            log.entries.push(entry);
            return;
        }
        self.event_log.push(YearLog {
            year,
            entries: vec![entry],
        });
    }

    pub fn has_interacted(&self, npc_id: &str, action: FamilyAction) -> bool {
        self.npc_interactions
            .iter()
            .any(|r| r.year == self.current_year && r.npc_id == npc_id && r.action == action)
    }

    pub fn note_interaction(&mut self, npc_id: &str, action: FamilyAction) {
        let year = self.current_year;
        self.npc_interactions.retain(|r| r.year == year);
        self.npc_interactions.push(InteractionRecord {
            year: self.current_year,
            npc_id: npc_id.to_string(),
            action,
        });
    }

    pub fn did_activity_this_year(&self, activity_id: &str) -> bool {
        self.activity_history.get(activity_id) == Some(&self.current_year)
    }

    pub fn mark_activity(&mut self, activity_id: &str) {
        self.activity_history
            .insert(activity_id.to_string(), self.current_year);
    }

    /// Put an item into the inventory, minting its id.
    pub fn receive_item(&mut self, item: NewItem) -> String {
        let id = self.mint_id("item");
        self.inventory.push(Item {
            id: id.clone(),
            name: item.name,
            kind: item.kind,
            value: item.value,
        });
        id
    }

    pub fn take_item(&mut self, item_id: &str) -> Option<Item> {
        let idx = self.inventory.iter().position(|i| i.id == item_id)?;
        Some(self.inventory.remove(idx))
    }
}

/// A newborn character and the lines announcing the birth.
#[derive(Debug, Clone)]
pub struct NewLife {
    pub character: Character,
    pub intro: Vec<String>,
}

/// Generate a newborn at the configured location and year.
pub fn new_life(config: &LifeConfig, dice: &mut impl Dice) -> NewLife {
    let gender = Gender::random(dice);
    let social_class = SocialClass::random(dice);
    let name = names::given_name(gender, dice).to_string();
    let surname = names::surname_for_class(social_class, dice).to_string();
    let year = config.start_year;

    let stats = Stats {
        health: dice.roll(70, 90) as u8,
        honor: dice.roll(0, 10) as u8,
        faith: 0,
        strength: dice.roll(0, 5) as u8,
        intelligence: 0,
        sanity: 100,
    };

    let family = family::new_family(social_class, &surname, dice);

    let mut character = Character {
        name,
        surname,
        gender,
        age: 0,
        social_class,
        location: config.location.clone(),
        birth_year: year,
        current_year: year,
        era: eras::era_for(&config.location, year).map(|e| e.id),
        stats,
        money: 0,
        food: 0,
        traits: Vec::new(),
        flags: NarrativeFlags::default(),
        used_childhood_events: BTreeSet::new(),
        family,
        siblings: Vec::new(),
        classmates: Vec::new(),
        event_log: Vec::new(),
        npc_interactions: Vec::new(),
        activity_history: BTreeMap::new(),
        crime_strikes: 0,
        inventory: Vec::new(),
        job: None,
        next_id: 0,
    };

    let pronoun = match gender {
        Gender::Male => "son",
        Gender::Female => "daughter",
    };
    let mut intro = vec![
        format!(
            "{} was born in {} in the year {}, a {} of the {}.",
            character.full_name(),
            character.location,
            year,
            pronoun,
            social_class.name()
        ),
        format!(
            "Father: {} ({}). Mother: {} ({}).",
            character.family.father.name,
            character.family.father.occupation,
            character.family.mother.name,
            character.family.mother.occupation
        ),
    ];
    if let Some(era) = eras::era_for(&character.location, year) {
        intro.push(format!("The age of {}.", era.name));
    }

    for line in &intro {
        character.record(line.clone(), Tone::Neutral);
    }

    NewLife { character, intro }
}
