//! Pure rules for the Tudor life simulation.
//!
//! This crate holds every rule of the game that is independent of the turn
//! engine: the character record, family aging, jobs, eras, the event
//! catalogs, event selection, effect application and the social
//! interactions. Functions take plain data plus a [`dice::Dice`] and return
//! results, so every rule is unit-testable with scripted randomness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`activities`] | Once-per-year activities and petty crimes |
//! | [`character`] | The player record, social class, new-life generation |
//! | [`classmates`] | Classmate cohorts entered at age six |
//! | [`config`] | Life configuration and validation |
//! | [`constants`] | Ages, odds and costs shared by several rules |
//! | [`dice`] | Centralised randomness and scripted dice for tests |
//! | [`effects`] | Applying an event choice to the character |
//! | [`eras`] | Historical eras per location |
//! | [`events`] | Event model and the historical/childhood/random/simple catalogs |
//! | [`family`] | Parents, siblings, NPC stats and yearly family aging |
//! | [`interactions`] | Family, coworker and classmate interactions |
//! | [`inventory`] | Eating and selling carried items |
//! | [`jobs`] | Job catalog, hiring, coworkers and yearly job effects |
//! | [`names`] | Name tables for characters and NPCs |
//! | [`occupation`] | Childhood work for the household |
//! | [`selector`] | Priority-ordered event selection |
//! | [`stats`] | Percentage stats and clamping |

pub mod activities;
pub mod character;
pub mod classmates;
pub mod config;
pub mod constants;
pub mod dice;
pub mod effects;
pub mod eras;
pub mod events;
pub mod family;
pub mod interactions;
pub mod inventory;
pub mod jobs;
pub mod names;
pub mod occupation;
pub mod selector;
pub mod stats;
