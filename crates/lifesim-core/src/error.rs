//! Errors for engine calls made at the wrong time.
//!
//! Gameplay refusals (too young, too poor, already done this year) are not
//! errors; they come back as `Fail` outcomes. These variants mean the call
//! itself was out of place, and the engine state is left untouched.

use lifesim_logic::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("a turn is already in progress")]
    TurnInProgress,
    #[error("no event is waiting for a choice")]
    NothingPending,
    #[error("unknown choice `{0}`")]
    UnknownChoice(String),
    #[error("nothing is waiting to be acknowledged")]
    NotAwaitingAck,
    #[error("the character is dead")]
    CharacterDead,
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_lists_every_problem() {
        let err = EngineError::InvalidConfig(vec![
            ConfigError::EmptyLocation,
            ConfigError::YearOutOfRange(1200),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("invalid configuration: "));
        assert_eq!(text.matches(';').count(), 1);
    }

    #[test]
    fn test_unknown_choice_names_the_id() {
        assert_eq!(
            EngineError::UnknownChoice("flee".into()).to_string(),
            "unknown choice `flee`"
        );
    }
}
