//! Lifesim Headless Harness
//!
//! Plays many seeded lives through the engine and checks that the rules
//! hold: stats stay in range, each year has a choice, childhood events are
//! seen once, deaths are final until acknowledged.
//!
//! Usage:
//!   cargo run -p lifesim-simtest
//!   cargo run -p lifesim-simtest -- --verbose
//!   cargo run -p lifesim-simtest -- --lives 200 --seed 7 --config my_life.json
//!
//! `RUST_LOG=lifesim_core=debug` shows the engine's turn trace.

use std::collections::{BTreeMap, HashSet};
use std::error::Error;

use lifesim_core::prelude::*;
use lifesim_logic::activities::{self, ActivityChoice, Crime};
use lifesim_logic::character::{ItemKind, SocialClass};
use lifesim_logic::config::{validate_config, ConfigError};
use lifesim_logic::dice::Dice;
use lifesim_logic::effects::DeathCause;
use lifesim_logic::eras::ERAS;
use lifesim_logic::events::random::RANDOM_EVENTS;
use lifesim_logic::events::EventKind;
use lifesim_logic::family::FamilyMember;
use lifesim_logic::interactions::classmate::ClassmateAction;
use lifesim_logic::interactions::coworker::CoworkerAction;
use lifesim_logic::interactions::family::FamilyAction;
use lifesim_logic::inventory::ItemUse;
use lifesim_logic::jobs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

// ── Harness settings ────────────────────────────────────────────────────
const DEFAULT_SETTINGS: &str = include_str!("../data/life.json");

#[derive(Debug, Clone, Deserialize)]
struct Settings {
    config: LifeConfig,
    lives: u32,
    seed: u64,
    turn_cap: u32,
    crime_odds: f64,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");

    let mut settings: Settings = serde_json::from_str(DEFAULT_SETTINGS)?;
    if let Some(path) = flag(&args, "--config") {
        settings.config = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    }
    if let Some(lives) = flag(&args, "--lives") {
        settings.lives = lives.parse()?;
    }
    if let Some(seed) = flag(&args, "--seed") {
        settings.seed = seed.parse()?;
    }

    println!("=== Lifesim Harness ===\n");

    let mut results = Vec::new();

    // 1. Configuration
    results.extend(validate_configuration(&settings, verbose));

    // 2. Static tables
    results.extend(validate_tables(verbose));

    // 3. Seeded lives
    results.extend(play_lives(&settings, verbose)?);

    // 4. Determinism and restart
    results.extend(validate_determinism(&settings)?);

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── 1. Configuration ────────────────────────────────────────────────────

fn validate_configuration(settings: &Settings, verbose: bool) -> Vec<TestResult> {
    println!("--- Configuration ---");
    let mut results = Vec::new();

    let errors = validate_config(&settings.config);
    results.push(TestResult {
        name: "config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!(
                "{} from {}",
                settings.config.location, settings.config.start_year
            )
        } else {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    let unknown = LifeConfig {
        location: "Atlantis".into(),
        ..settings.config.clone()
    };
    let errors = validate_config(&unknown);
    results.push(TestResult {
        name: "config_rejects_unknown_location".into(),
        passed: errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownLocation(_))),
        detail: format!("{} error(s) for Atlantis", errors.len()),
    });

    let ancient = LifeConfig {
        start_year: 1066,
        ..settings.config.clone()
    };
    let errors = validate_config(&ancient);
    results.push(TestResult {
        name: "config_rejects_year".into(),
        passed: errors
            .iter()
            .any(|e| matches!(e, ConfigError::YearOutOfRange(1066))),
        detail: format!("{} error(s) for 1066", errors.len()),
    });

    if verbose {
        println!(
            "  lives={} seed={} turn_cap={}",
            settings.lives, settings.seed, settings.turn_cap
        );
    }

    results
}

// ── 2. Static tables ────────────────────────────────────────────────────

fn validate_tables(verbose: bool) -> Vec<TestResult> {
    println!("--- Static Tables ---");
    let mut results = Vec::new();

    let empty_eras: Vec<_> = ERAS
        .iter()
        .filter(|era| !RANDOM_EVENTS.iter().any(|e| era.has_any_tag(e.tags)))
        .map(|era| era.name)
        .collect();
    results.push(TestResult {
        name: "tables_era_pools".into(),
        passed: empty_eras.is_empty(),
        detail: if empty_eras.is_empty() {
            format!("{} eras, every pool stocked", ERAS.len())
        } else {
            format!("empty pools: {}", empty_eras.join(", "))
        },
    });

    let jobless: Vec<_> = SocialClass::ALL
        .iter()
        .filter(|class| jobs::available_jobs(**class).count() == 0)
        .map(|class| class.name())
        .collect();
    results.push(TestResult {
        name: "tables_jobs_per_class".into(),
        passed: jobless.is_empty(),
        detail: if jobless.is_empty() {
            "every class has work".into()
        } else {
            format!("no work for: {}", jobless.join(", "))
        },
    });

    if verbose {
        for era in ERAS {
            let pool = RANDOM_EVENTS
                .iter()
                .filter(|e| era.has_any_tag(e.tags))
                .count();
            println!(
                "  {:<10} {}-{}  {} random events",
                era.name, era.start_year, era.end_year, pool
            );
        }
    }

    results
}

// ── 3. Seeded lives ─────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct LifeReport {
    years: u32,
    death: Option<DeathCause>,
    births: u32,
    choices: u32,
    stat_violations: Vec<String>,
    repeat_childhood: Vec<String>,
    coworker_overflow: Vec<String>,
    bad_age_steps: Vec<String>,
    empty_events: Vec<String>,
    death_not_final: Vec<String>,
}

fn play_lives(settings: &Settings, verbose: bool) -> Result<Vec<TestResult>, Box<dyn Error>> {
    println!("--- Seeded Lives ---");
    let mut results = Vec::new();
    let mut reports = Vec::new();

    for i in 0..settings.lives {
        let seed = settings.seed.wrapping_add(u64::from(i));
        let report = play_life(settings, seed)?;
        if verbose {
            let end = match &report.death {
                Some(cause) => cause.describe(),
                None => "still living".into(),
            };
            println!(
                "  seed {:>6}: {:>3} years, {:>3} choices, {} births, {}",
                seed, report.years, report.choices, report.births, end
            );
        }
        reports.push(report);
    }

    let lives = reports.len().max(1) as f64;
    let years: u32 = reports.iter().map(|r| r.years).sum();
    let mut causes: BTreeMap<&str, usize> = BTreeMap::new();
    for r in &reports {
        let key = match r.death {
            Some(DeathCause::Exhaustion { .. }) => "exhaustion",
            Some(DeathCause::Fate { .. }) => "fate",
            Some(DeathCause::Injuries { .. }) => "injuries",
            None => "survived",
        };
        *causes.entry(key).or_default() += 1;
    }
    results.push(TestResult {
        name: "lives_played".into(),
        passed: !reports.is_empty(),
        detail: format!(
            "{} lives, mean {:.1} years, {:?}",
            reports.len(),
            f64::from(years) / lives,
            causes
        ),
    });

    let checks: [(&str, fn(&LifeReport) -> &Vec<String>); 6] = [
        ("invariant_stats_in_range", |r| &r.stat_violations),
        ("invariant_childhood_once", |r| &r.repeat_childhood),
        ("invariant_one_coworker_event", |r| &r.coworker_overflow),
        ("invariant_age_steps", |r| &r.bad_age_steps),
        ("invariant_event_has_choice", |r| &r.empty_events),
        ("invariant_death_final", |r| &r.death_not_final),
    ];
    for (name, field) in checks {
        let found: Vec<&String> = reports.iter().flat_map(field).collect();
        results.push(TestResult {
            name: name.into(),
            passed: found.is_empty(),
            detail: match found.first() {
                None => format!("held across {} lives", reports.len()),
                Some(first) => format!("{} violation(s), first: {}", found.len(), first),
            },
        });
    }

    Ok(results)
}

fn play_life(settings: &Settings, seed: u64) -> Result<LifeReport, EngineError> {
    let config = LifeConfig {
        seed: Some(seed),
        ..settings.config.clone()
    };
    let mut engine = LifeEngine::new(config)?;
    let mut policy = StdRng::seed_from_u64(seed ^ 0x5eed);
    let mut seen_childhood = HashSet::new();
    let mut report = LifeReport::default();

    for _ in 0..settings.turn_cap {
        take_actions(&mut engine, &mut policy, settings.crime_odds)?;
        if let TurnState::AwaitingDeathAck { cause } = engine.state() {
            report.death = Some(cause.clone());
            break;
        }

        let age = engine.character().age;
        let mut outcome = engine.advance_year()?;
        if engine.character().age != age + 1 {
            report
                .bad_age_steps
                .push(format!("seed {seed}: {age} -> {}", engine.character().age));
        }

        let mut coworker_events = 0;
        loop {
            match outcome {
                TurnOutcome::Choose(event) => {
                    report.choices += 1;
                    if event.choices.is_empty() {
                        report.empty_events.push(format!("seed {seed}: {}", event.id));
                        break;
                    }
                    match engine.state().pending_event().map(|e| &e.kind) {
                        Some(EventKind::Childhood) => {
                            if !seen_childhood.insert(event.id.clone()) {
                                report
                                    .repeat_childhood
                                    .push(format!("seed {seed}: {}", event.id));
                            }
                        }
                        Some(EventKind::Coworker { .. }) => coworker_events += 1,
                        _ => {}
                    }
                    let pick = policy.pick(event.choices.len());
                    outcome = engine.resolve_choice(&event.choices[pick].id)?;
                }
                TurnOutcome::Birth { .. } => {
                    report.births += 1;
                    outcome = engine.acknowledge()?;
                }
                TurnOutcome::Died(cause) => {
                    report.death = Some(cause);
                    break;
                }
                TurnOutcome::YearComplete | TurnOutcome::Reborn => break,
            }
        }

        if coworker_events > 1 {
            report.coworker_overflow.push(format!(
                "seed {seed}: {coworker_events} at age {}",
                engine.character().age
            ));
        }
        check_stats(engine.character(), seed, &mut report.stat_violations);

        if report.death.is_some() {
            if engine.advance_year() != Err(EngineError::TurnInProgress)
                || engine.character().stats.health != 0
            {
                report
                    .death_not_final
                    .push(format!("seed {seed}: life went on after death"));
            }
            break;
        }
    }

    report.years = engine.character().age;
    Ok(report)
}

/// A few things a player might do between years.
fn take_actions(
    engine: &mut LifeEngine,
    policy: &mut StdRng,
    crime_odds: f64,
) -> Result<(), EngineError> {
    let c = engine.character();
    let age = c.age;

    if age >= 13 && c.job.is_none() {
        let openings: Vec<_> = jobs::available_jobs(c.social_class).map(|j| j.id).collect();
        if !openings.is_empty() {
            engine.take_job(openings[policy.pick(openings.len())])?;
        }
    }

    let c = engine.character();
    let food = c
        .inventory
        .iter()
        .find(|i| i.kind == ItemKind::Food)
        .map(|i| i.id.clone());
    let classmate = c.classmates.first().map(|m| m.id.clone());
    let coworker = c
        .job
        .as_ref()
        .and_then(|j| j.coworkers.first())
        .map(|w| w.id.clone());

    if let Some(item) = food {
        engine.use_item(&item, ItemUse::Eat)?;
    }

    match policy.roll(0, 5) {
        0 => {
            engine.work()?;
        }
        1 => {
            let action = FamilyAction::ALL[policy.pick(FamilyAction::ALL.len())];
            engine.interact_family(FamilyMember::Mother, action)?;
        }
        2 => {
            let activity = &activities::ACTIVITIES[policy.pick(activities::ACTIVITIES.len())];
            let choice = if policy.chance(0.5) {
                ActivityChoice::First
            } else {
                ActivityChoice::Second
            };
            engine.do_activity(activity.id, choice)?;
        }
        3 => {
            if let Some(id) = classmate {
                let action = ClassmateAction::ALL[policy.pick(ClassmateAction::ALL.len())];
                engine.interact_classmate(&id, action)?;
            }
        }
        4 => {
            if let Some(id) = coworker {
                let action = CoworkerAction::ALL[policy.pick(CoworkerAction::ALL.len())];
                engine.interact_coworker(&id, action)?;
            }
        }
        _ => {
            engine.interact_family(FamilyMember::Father, FamilyAction::Chat)?;
        }
    }

    if !engine.state().is_dead() && policy.chance(crime_odds) {
        let crimes = [Crime::PickpocketEasy, Crime::PickpocketHard, Crime::Poach];
        engine.commit_crime(crimes[policy.pick(crimes.len())])?;
    }
    Ok(())
}

fn check_stats(c: &Character, seed: u64, out: &mut Vec<String>) {
    let s = &c.stats;
    let named = [
        ("health", s.health),
        ("honor", s.honor),
        ("faith", s.faith),
        ("strength", s.strength),
        ("intelligence", s.intelligence),
        ("sanity", s.sanity),
    ];
    for (name, value) in named {
        if value > 100 {
            out.push(format!("seed {seed}: {name} = {value} at age {}", c.age));
        }
    }
    let relationships = c
        .siblings
        .iter()
        .map(|s| s.relationship)
        .chain(c.classmates.iter().map(|m| m.relationship))
        .chain(c.job.iter().flat_map(|j| j.coworkers.iter().map(|w| w.relationship)))
        .chain([c.family.father.relationship, c.family.mother.relationship]);
    for value in relationships {
        if value > 100 {
            out.push(format!("seed {seed}: relationship {value} at age {}", c.age));
        }
    }
}

// ── 4. Determinism & restart ────────────────────────────────────────────

fn validate_determinism(settings: &Settings) -> Result<Vec<TestResult>, Box<dyn Error>> {
    println!("--- Determinism ---");
    let mut results = Vec::new();

    let a = play_life(settings, settings.seed)?;
    let b = play_life(settings, settings.seed)?;
    results.push(TestResult {
        name: "determinism_same_seed".into(),
        passed: a.years == b.years && a.choices == b.choices && a.death == b.death,
        detail: format!("seed {}: {} years both times", settings.seed, a.years),
    });

    // Play until the first death, then acknowledge it.
    let config = LifeConfig {
        seed: Some(settings.seed),
        ..settings.config.clone()
    };
    let mut engine = LifeEngine::new(config)?;
    let mut died = false;
    for _ in 0..settings.turn_cap * 2 {
        let outcome = match engine.state() {
            TurnState::Idle => engine.advance_year()?,
            TurnState::AwaitingChoice(event) => {
                let id = event.choices[0].id.clone();
                engine.resolve_choice(&id)?
            }
            TurnState::AwaitingBirthAck { .. } => engine.acknowledge()?,
            TurnState::AwaitingDeathAck { .. } => break,
        };
        if matches!(outcome, TurnOutcome::Died(_)) {
            died = true;
            break;
        }
    }
    let reborn = died && engine.acknowledge()? == TurnOutcome::Reborn;
    results.push(TestResult {
        name: "restart_after_death".into(),
        passed: !died || (reborn && engine.character().age == 0 && engine.state().is_idle()),
        detail: if died {
            format!("new life: {}", engine.character().full_name())
        } else {
            "no death within the turn cap".into()
        },
    });

    Ok(results)
}
