//! Seeded sweeps over the yearly rules without the engine.
//!
//! Each life is driven by hand: family aging, job effects, selection and
//! a random choice per year. The checks are the game's standing
//! invariants: stats stay in range, deaths are reported once, childhood
//! events never repeat.

use std::collections::HashSet;

use lifesim_logic::character::{new_life, Character};
use lifesim_logic::config::LifeConfig;
use lifesim_logic::dice::Dice;
use lifesim_logic::effects::apply_choice;
use lifesim_logic::events::EventKind;
use lifesim_logic::{family, jobs, selector};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ────────────────────────────────────────────────────────────

const SEEDS: u64 = 60;
const YEARS: u32 = 70;

fn assert_in_range(c: &Character) {
    let s = &c.stats;
    for v in [s.health, s.honor, s.faith, s.strength, s.intelligence, s.sanity] {
        assert!(v <= 100);
    }
    for sib in &c.siblings {
        assert!(sib.relationship <= 100);
    }
    assert!(c.family.father.relationship <= 100);
    assert!(c.family.mother.relationship <= 100);
}

/// Play one life year by year until death or `YEARS`.
fn play(seed: u64, mut on_year: impl FnMut(&Character, &[String], Option<&str>)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut c = new_life(&LifeConfig::default(), &mut rng).character;

    for _ in 0..YEARS {
        c.age += 1;
        c.current_year += 1;
        let deaths = family::age_family(&mut c, &mut rng);

        if c.age == 14 && c.job.is_none() {
            let ids: Vec<_> = jobs::available_jobs(c.social_class).map(|j| j.id).collect();
            for id in ids {
                if jobs::hire(&mut c, id, &mut rng).is_ok() {
                    break;
                }
            }
        }
        if let Some(year) = jobs::apply_annual_effects(&mut c) {
            if year.exhausted {
                on_year(&c, &deaths, None);
                return;
            }
        }

        let event = selector::select_or_fallback(&c, &mut rng);
        selector::mark_selected(&mut c, &event);
        let childhood = (event.kind == EventKind::Childhood).then(|| event.id.clone());
        let choice = &event.choices[rng.pick(event.choices.len())];
        let report = apply_choice(&mut c, choice, &mut rng);
        on_year(&c, &deaths, childhood.as_deref());
        if report.death.is_some() {
            return;
        }
    }
}

// ── Invariants ─────────────────────────────────────────────────────────

#[test]
fn stats_stay_in_range() {
    for seed in 0..SEEDS {
        play(seed, |c, _, _| assert_in_range(c));
    }
}

#[test]
fn childhood_events_never_repeat() {
    for seed in 0..SEEDS {
        let mut seen = HashSet::new();
        play(seed, |_, _, childhood| {
            if let Some(id) = childhood {
                assert!(seen.insert(id.to_string()), "seed {seed}: {id} repeated");
            }
        });
    }
}

#[test]
fn parent_deaths_reported_once() {
    for seed in 0..SEEDS {
        let mut father_notices = 0;
        let mut mother_notices = 0;
        play(seed, |c, deaths, _| {
            father_notices += deaths.iter().filter(|d| d.starts_with("Your father")).count();
            mother_notices += deaths.iter().filter(|d| d.starts_with("Your mother")).count();
            assert!(father_notices <= 1 && mother_notices <= 1);
            if father_notices == 1 && mother_notices == 1 {
                assert!(!c.family.is_alive());
            }
        });
    }
}

#[test]
fn dead_parents_stay_dead() {
    for seed in 0..SEEDS {
        let mut father_died_at: Option<u32> = None;
        play(seed, |c, _, _| {
            match father_died_at {
                Some(age) => {
                    assert!(!c.family.father.alive);
                    assert_eq!(c.family.father.age, age);
                }
                None if !c.family.father.alive => father_died_at = Some(c.family.father.age),
                None => {}
            }
        });
    }
}
