//! Job catalog, hiring, coworkers and yearly job effects.
//!
//! Each class has its own trades. A job pays every year and wears the body
//! down; the coworkers met on hiring stay with the job until resignation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::{Character, SocialClass};
use crate::constants::{ages, relationship};
use crate::dice::Dice;
use crate::names;
use crate::stats::{clamp_amount, signed, StatKind};

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobListing {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub class: SocialClass,
    pub income: u32,
    pub vitality_impact: i32,
    pub strength_impact: i32,
    pub honor_impact: i32,
    pub faith_impact: i32,
    pub min_strength: u8,
    pub min_honor: u8,
}

const BLANK: JobListing = JobListing {
    id: "",
    title: "",
    description: "",
    class: SocialClass::Peasant,
    income: 0,
    vitality_impact: 0,
    strength_impact: 0,
    honor_impact: 0,
    faith_impact: 0,
    min_strength: 0,
    min_honor: 0,
};

pub static JOBS: &[JobListing] = &[
    JobListing {
        id: "field_plower",
        title: "Field Plower",
        description: "Drive the plough from dawn to dusk.",
        class: SocialClass::Peasant,
        income: 5,
        vitality_impact: -10,
        strength_impact: 2,
        min_strength: 30,
        ..BLANK
    },
    JobListing {
        id: "shepherd",
        title: "Shepherd",
        description: "Keep the flock on the hills through every season.",
        class: SocialClass::Peasant,
        income: 3,
        vitality_impact: -5,
        faith_impact: 1,
        min_strength: 10,
        ..BLANK
    },
    JobListing {
        id: "market_trader",
        title: "Market Trader",
        description: "Haggle over wares at the weekly market.",
        class: SocialClass::Artisan,
        income: 15,
        vitality_impact: -5,
        honor_impact: 2,
        min_honor: 40,
        ..BLANK
    },
    JobListing {
        id: "craft_officer",
        title: "Guild Warden",
        description: "Inspect the work of the guild and keep its standards.",
        class: SocialClass::Artisan,
        income: 12,
        vitality_impact: -8,
        honor_impact: 5,
        min_honor: 50,
        ..BLANK
    },
    JobListing {
        id: "estate_manager",
        title: "Estate Steward",
        description: "Collect rents and manage the tenants of a great estate.",
        class: SocialClass::Gentry,
        income: 30,
        vitality_impact: -5,
        honor_impact: 10,
        min_honor: 60,
        ..BLANK
    },
    JobListing {
        id: "clerk",
        title: "Clerk",
        description: "Copy letters and keep accounts by candlelight.",
        class: SocialClass::Gentry,
        income: 25,
        vitality_impact: -3,
        honor_impact: 5,
        min_honor: 50,
        ..BLANK
    },
    JobListing {
        id: "court_advisor",
        title: "Court Advisor",
        description: "Whisper counsel into powerful ears.",
        class: SocialClass::Nobility,
        income: 50,
        vitality_impact: -2,
        honor_impact: 15,
        min_honor: 70,
        ..BLANK
    },
    JobListing {
        id: "knight_squire",
        title: "Squire",
        description: "Serve a knight in the lists and on campaign.",
        class: SocialClass::Nobility,
        income: 40,
        vitality_impact: -10,
        honor_impact: 12,
        strength_impact: 5,
        min_honor: 60,
        ..BLANK
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coworker {
    pub id: String,
    pub name: String,
    pub role: String,
    pub relationship: u8,
}

/// A job held by the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub class: SocialClass,
    pub income: u32,
    pub vitality_impact: i32,
    pub strength_impact: i32,
    pub honor_impact: i32,
    pub faith_impact: i32,
    pub coworkers: Vec<Coworker>,
}

impl Job {
    pub fn coworker(&self, id: &str) -> Option<&Coworker> {
        self.coworkers.iter().find(|c| c.id == id)
    }

    pub fn coworker_mut(&mut self, id: &str) -> Option<&mut Coworker> {
        self.coworkers.iter_mut().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobRefusal {
    #[error("there is no position called {0:?}")]
    UnknownJob(String),
    #[error("you are too young to take a position")]
    TooYoung,
    #[error("that work is not open to someone of your station")]
    WrongClass,
    #[error("you already hold a position")]
    AlreadyEmployed,
    #[error("the work needs strength {required}")]
    TooWeak { required: u8 },
    #[error("the work needs honor {required}")]
    NotHonorable { required: u8 },
    #[error("you hold no position")]
    Unemployed,
}

/// Role names for coworkers, keyed by class.
pub fn coworker_roles(class: SocialClass) -> [&'static str; 3] {
    match class {
        SocialClass::Peasant => ["Head Ploughman", "Old Hand", "Farm Boy"],
        SocialClass::Artisan => ["Master Craftsman", "Supervisor", "Journeyman"],
        SocialClass::Gentry => ["Senior Counsellor", "Fellow Administrator", "Assistant"],
        SocialClass::Nobility => ["Veteran Noble", "Courtier", "Knight"],
    }
}

pub fn available_jobs(class: SocialClass) -> impl Iterator<Item = &'static JobListing> {
    JOBS.iter().filter(move |j| j.class == class)
}

pub fn find_listing(id: &str) -> Option<&'static JobListing> {
    JOBS.iter().find(|j| j.id == id)
}

pub fn check_eligibility(character: &Character, listing: &JobListing) -> Result<(), JobRefusal> {
    if character.age < ages::ADULTHOOD {
        return Err(JobRefusal::TooYoung);
    }
    if character.job.is_some() {
        return Err(JobRefusal::AlreadyEmployed);
    }
    if character.social_class != listing.class {
        return Err(JobRefusal::WrongClass);
    }
    if character.stats.strength < listing.min_strength {
        return Err(JobRefusal::TooWeak {
            required: listing.min_strength,
        });
    }
    if character.stats.honor < listing.min_honor {
        return Err(JobRefusal::NotHonorable {
            required: listing.min_honor,
        });
    }
    Ok(())
}

/// Take the job `job_id`, meeting two or three coworkers.
pub fn hire<'a>(
    character: &'a mut Character,
    job_id: &str,
    dice: &mut impl Dice,
) -> Result<&'a Job, JobRefusal> {
    let listing = find_listing(job_id).ok_or_else(|| JobRefusal::UnknownJob(job_id.to_string()))?;
    check_eligibility(character, listing)?;

    let roles = coworker_roles(listing.class);
    let count = dice.roll(2, 3) as usize;
    let coworkers = (0..count)
        .map(|i| Coworker {
            id: character.mint_id("coworker"),
            name: names::coworker_name(dice),
            role: roles[i % roles.len()].to_string(),
            relationship: relationship::NEUTRAL,
        })
        .collect();

    Ok(character.job.insert(Job {
        id: listing.id.to_string(),
        title: listing.title.to_string(),
        description: listing.description.to_string(),
        class: listing.class,
        income: listing.income,
        vitality_impact: listing.vitality_impact,
        strength_impact: listing.strength_impact,
        honor_impact: listing.honor_impact,
        faith_impact: listing.faith_impact,
        coworkers,
    }))
}

/// Leave the current job. Its coworkers leave with it.
pub fn resign(character: &mut Character) -> Result<Job, JobRefusal> {
    character.job.take().ok_or(JobRefusal::Unemployed)
}

/// What a year of work did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobYear {
    pub lines: Vec<String>,
    /// Health reached zero.
    pub exhausted: bool,
}

/// Apply one year of the held job. `None` when unemployed.
///
/// The `job_relief` flag halves the vitality cost once and is consumed.
pub fn apply_annual_effects(character: &mut Character) -> Option<JobYear> {
    let job = character.job.as_ref()?;
    let title = job.title.clone();
    let income = job.income;
    let mut vitality = job.vitality_impact;
    let others = [
        (StatKind::Strength, job.strength_impact),
        (StatKind::Honor, job.honor_impact),
        (StatKind::Faith, job.faith_impact),
    ];

    if character.flags.job_relief {
        vitality /= 2;
        character.flags.job_relief = false;
    }

    character.money = clamp_amount(character.money, i64::from(income));
    let mut parts = vec![format!("+{income} coins")];
    let applied = character.stats.adjust(StatKind::Health, vitality);
    if applied != 0 {
        parts.push(signed(applied, "Health"));
    }
    for (kind, delta) in others {
        if delta != 0 {
            let applied = character.stats.adjust(kind, delta);
            parts.push(signed(applied, kind.name()));
        }
    }

    let mut lines = vec![format!("A year as {title}: {}.", parts.join(", "))];
    let exhausted = character.is_dead();
    if exhausted {
        lines.push(format!("Worn out by years as {title}, your body gives out."));
    }
    Some(JobYear { lines, exhausted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::new_life;
    use crate::config::LifeConfig;
    use crate::dice::ScriptedDice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn adult(class: SocialClass) -> Character {
        let mut rng = StdRng::seed_from_u64(31);
        let mut c = new_life(&LifeConfig::default(), &mut rng).character;
        c.age = 16;
        c.social_class = class;
        c.stats.strength = 50;
        c.stats.honor = 80;
        c.stats.health = 80;
        c
    }

    #[test]
    fn test_two_jobs_per_class() {
        for class in SocialClass::ALL {
            assert_eq!(available_jobs(class).count(), 2, "{}", class.name());
        }
    }

    #[test]
    fn test_hire_generates_coworkers() {
        let mut c = adult(SocialClass::Artisan);
        let mut dice = ScriptedDice::never().rolling_high();
        let job = hire(&mut c, "market_trader", &mut dice).unwrap();
        assert_eq!(job.coworkers.len(), 3);
        assert_eq!(job.coworkers[0].role, "Master Craftsman");
        assert!(job.coworkers.iter().all(|w| w.relationship == 50));
    }

    #[test]
    fn test_refusals() {
        let mut dice = ScriptedDice::never();

        let mut young = adult(SocialClass::Peasant);
        young.age = 12;
        assert_eq!(hire(&mut young, "shepherd", &mut dice).unwrap_err(), JobRefusal::TooYoung);

        let mut c = adult(SocialClass::Peasant);
        assert_eq!(hire(&mut c, "clerk", &mut dice).unwrap_err(), JobRefusal::WrongClass);
        assert!(matches!(
            hire(&mut c, "nope", &mut dice).unwrap_err(),
            JobRefusal::UnknownJob(_)
        ));

        c.stats.strength = 20;
        assert_eq!(
            hire(&mut c, "field_plower", &mut dice).unwrap_err(),
            JobRefusal::TooWeak { required: 30 }
        );

        hire(&mut c, "shepherd", &mut dice).unwrap();
        assert_eq!(hire(&mut c, "shepherd", &mut dice).unwrap_err(), JobRefusal::AlreadyEmployed);

        let mut g = adult(SocialClass::Gentry);
        g.stats.honor = 10;
        assert_eq!(
            hire(&mut g, "clerk", &mut dice).unwrap_err(),
            JobRefusal::NotHonorable { required: 50 }
        );
    }

    #[test]
    fn test_resign() {
        let mut c = adult(SocialClass::Nobility);
        let mut dice = ScriptedDice::never();
        assert_eq!(resign(&mut c).unwrap_err(), JobRefusal::Unemployed);
        hire(&mut c, "court_advisor", &mut dice).unwrap();
        assert_eq!(resign(&mut c).unwrap().id, "court_advisor");
        assert!(c.job.is_none());
    }

    #[test]
    fn test_annual_effects() {
        let mut c = adult(SocialClass::Nobility);
        let mut dice = ScriptedDice::never();
        hire(&mut c, "knight_squire", &mut dice).unwrap();
        let year = apply_annual_effects(&mut c).unwrap();
        assert!(!year.exhausted);
        assert_eq!(c.money, 40);
        assert_eq!(c.stats.health, 70);
        assert_eq!(c.stats.honor, 92);
        assert_eq!(c.stats.strength, 55);
    }

    #[test]
    fn test_job_relief_halves_once() {
        let mut c = adult(SocialClass::Peasant);
        let mut dice = ScriptedDice::never();
        hire(&mut c, "field_plower", &mut dice).unwrap();
        c.flags.job_relief = true;
        apply_annual_effects(&mut c);
        assert_eq!(c.stats.health, 75);
        assert!(!c.flags.job_relief);
        apply_annual_effects(&mut c);
        assert_eq!(c.stats.health, 65);
    }

    #[test]
    fn test_exhaustion() {
        let mut c = adult(SocialClass::Peasant);
        let mut dice = ScriptedDice::never();
        hire(&mut c, "field_plower", &mut dice).unwrap();
        c.stats.health = 5;
        let year = apply_annual_effects(&mut c).unwrap();
        assert!(year.exhausted);
        assert_eq!(c.stats.health, 0);
    }

    #[test]
    fn test_unemployed_no_effects() {
        let mut c = adult(SocialClass::Peasant);
        assert!(apply_annual_effects(&mut c).is_none());
    }
}
