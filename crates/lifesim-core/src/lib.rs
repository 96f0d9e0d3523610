//! Lifesim Core - Tudor Life Simulation Engine
//!
//! Plays one life a year at a time. The engine owns the character, the
//! narrative log and the random source; the rules themselves live in
//! `lifesim-logic`.
//!
//! # Architecture
//!
//! - **Engine**: [`LifeEngine`](engine::LifeEngine) runs the yearly turn and
//!   every player action
//! - **State**: [`TurnState`](state::TurnState) records what the engine is
//!   waiting for (a choice, a birth, a death)
//! - **Errors**: [`EngineError`](error::EngineError) for calls made in the
//!   wrong state
//!
//! # Example
//!
//! ```rust,no_run
//! use lifesim_core::prelude::*;
//!
//! let mut engine = LifeEngine::new(LifeConfig::default()).unwrap();
//!
//! loop {
//!     match engine.advance_year().unwrap() {
//!         TurnOutcome::Choose(event) => {
//!             let first = event.choices[0].id.clone();
//!             engine.resolve_choice(&first).unwrap();
//!         }
//!         TurnOutcome::Birth { .. } => {
//!             engine.acknowledge().unwrap();
//!         }
//!         TurnOutcome::Died(_) => break,
//!         _ => {}
//!     }
//! }
//! ```

pub mod engine;
pub mod error;
pub mod state;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::LifeEngine;
    pub use crate::error::EngineError;
    pub use crate::state::{TurnOutcome, TurnState};
    pub use lifesim_logic::character::{Character, Tone};
    pub use lifesim_logic::config::LifeConfig;
    pub use lifesim_logic::events::EventDescriptor;
}
