//! Integration tests for the static tables.
//!
//! Exercises: eras → historical / childhood / random / simple catalogs
//! → jobs → activities, checking they agree with each other.

use std::collections::HashSet;

use lifesim_logic::activities::ACTIVITIES;
use lifesim_logic::character::SocialClass;
use lifesim_logic::eras::{self, ERAS};
use lifesim_logic::events::childhood::CHILDHOOD_EVENTS;
use lifesim_logic::events::historical::HISTORICAL_EVENTS;
use lifesim_logic::events::random::RANDOM_EVENTS;
use lifesim_logic::events::simple::SIMPLE_EVENTS;
use lifesim_logic::events::{EventKind, EventTemplate};
use lifesim_logic::jobs::{self, JOBS};

// ── Helpers ────────────────────────────────────────────────────────────

fn all_templates() -> Vec<&'static EventTemplate> {
    HISTORICAL_EVENTS
        .iter()
        .map(|e| &e.template)
        .chain(CHILDHOOD_EVENTS.iter().map(|e| &e.template))
        .chain(RANDOM_EVENTS.iter().map(|e| &e.template))
        .chain(SIMPLE_EVENTS.iter().map(|e| &e.template))
        .collect()
}

// ── Events ─────────────────────────────────────────────────────────────

#[test]
fn event_ids_unique_across_catalogs() {
    let templates = all_templates();
    let ids: HashSet<_> = templates.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), templates.len());
}

#[test]
fn every_event_has_choices_with_unique_ids() {
    for t in all_templates() {
        assert!(!t.choices.is_empty(), "{} has no choices", t.id);
        let ids: HashSet<_> = t.choices.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), t.choices.len(), "{} repeats a choice id", t.id);
    }
}

#[test]
fn every_event_reachable_at_some_age() {
    for t in all_templates() {
        let reachable =
            (0..=100).any(|age| t.instantiate_for_age(EventKind::Random, age).is_some());
        assert!(reachable, "{} is never offered", t.id);
    }
}

#[test]
fn childhood_events_within_childhood() {
    for e in CHILDHOOD_EVENTS {
        assert!(e.min_age <= e.max_age, "{}", e.template.id);
        assert!(e.max_age <= 12, "{}", e.template.id);
        assert!(!e.classes.is_empty(), "{}", e.template.id);
    }
}

#[test]
fn every_class_has_childhood_events() {
    for class in SocialClass::ALL {
        assert!(CHILDHOOD_EVENTS.iter().any(|e| e.classes.contains(&class)));
    }
}

#[test]
fn random_event_tags_match_some_era() {
    for e in RANDOM_EVENTS {
        assert!(
            ERAS.iter().any(|era| era.has_any_tag(e.tags)),
            "{} has no era",
            e.template.id
        );
    }
}

#[test]
fn every_era_has_random_events() {
    for era in ERAS {
        assert!(
            RANDOM_EVENTS.iter().any(|e| era.has_any_tag(e.tags)),
            "{} has an empty pool",
            era.name
        );
    }
}

#[test]
fn historical_events_fall_in_known_eras() {
    for h in HISTORICAL_EVENTS {
        assert!(eras::era_for(h.location, h.year).is_some(), "{}", h.template.id);
    }
}

#[test]
fn previews_render_for_every_choice() {
    for t in all_templates() {
        let event = t.instantiate(EventKind::Simple);
        for choice in event.descriptor().choices {
            assert!(!choice.preview.is_empty(), "{}/{}", t.id, choice.id);
        }
    }
}

// ── Jobs and activities ────────────────────────────────────────────────

#[test]
fn job_ids_unique_and_costly() {
    let ids: HashSet<_> = JOBS.iter().map(|j| j.id).collect();
    assert_eq!(ids.len(), JOBS.len());
    for job in JOBS {
        assert!(job.income > 0, "{}", job.id);
        assert!(job.vitality_impact < 0, "{}", job.id);
    }
}

#[test]
fn every_class_can_work() {
    for class in SocialClass::ALL {
        assert!(jobs::available_jobs(class).count() > 0);
        assert_eq!(jobs::coworker_roles(class).len(), 3);
    }
}

#[test]
fn activity_ids_unique() {
    let ids: HashSet<_> = ACTIVITIES.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), ACTIVITIES.len());
}
