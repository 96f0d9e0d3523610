//! The turn state machine.
//!
//! ```text
//!            advance_year
//!   Idle ─────────────────┬──────────────► AwaitingChoice ──resolve_choice──► Idle
//!     ▲                   ├──► AwaitingBirthAck ──acknowledge──► AwaitingChoice
//!     │                   └──► AwaitingDeathAck
//!     └──────────── acknowledge (new life) ◄──┘
//! ```
//!
//! A resolved coworker event leads to a second `AwaitingChoice` for the
//! year's ordinary event. Any step that kills the character leads to
//! `AwaitingDeathAck`.

use lifesim_logic::effects::DeathCause;
use lifesim_logic::events::{Event, EventDescriptor};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum TurnState {
    #[default]
    Idle,
    AwaitingChoice(Event),
    AwaitingBirthAck { sibling: String },
    AwaitingDeathAck { cause: DeathCause },
}

impl TurnState {
    pub fn name(&self) -> &'static str {
        match self {
            TurnState::Idle => "idle",
            TurnState::AwaitingChoice(_) => "awaiting_choice",
            TurnState::AwaitingBirthAck { .. } => "awaiting_birth_ack",
            TurnState::AwaitingDeathAck { .. } => "awaiting_death_ack",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TurnState::Idle)
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, TurnState::AwaitingDeathAck { .. })
    }

    /// The event waiting for a choice, if any.
    pub fn pending_event(&self) -> Option<&Event> {
        match self {
            TurnState::AwaitingChoice(event) => Some(event),
            _ => None,
        }
    }
}

/// What a turn call left the engine waiting for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// An event needs a choice.
    Choose(EventDescriptor),
    /// A sibling was born; acknowledge to continue the year.
    Birth { sibling: String },
    /// The character died; acknowledge to start a new life.
    Died(DeathCause),
    /// The year is over.
    YearComplete,
    /// A new life has begun.
    Reborn,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifesim_logic::events;

    #[test]
    fn test_default_is_idle() {
        assert!(TurnState::default().is_idle());
        assert!(TurnState::default().pending_event().is_none());
    }

    #[test]
    fn test_pending_event_only_when_awaiting_choice() {
        let state = TurnState::AwaitingChoice(events::filler(20));
        assert_eq!(state.pending_event().map(|e| e.choices.len()), Some(1));
        assert_eq!(state.name(), "awaiting_choice");

        let birth = TurnState::AwaitingBirthAck {
            sibling: "Agnes".into(),
        };
        assert!(birth.pending_event().is_none());
        assert!(!birth.is_dead());
    }

    #[test]
    fn test_death_state() {
        let state = TurnState::AwaitingDeathAck {
            cause: DeathCause::Exhaustion {
                job: "Shepherd".into(),
            },
        };
        assert!(state.is_dead());
        assert!(!state.is_idle());
    }
}
