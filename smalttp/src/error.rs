use smalttp_game::Item;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RandomizerError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("no completable placement found in {attempts} attempts")]
    Unsatisfiable { attempts: usize },
}

pub type Result<T> = std::result::Result<T, RandomizerError>;

/// Reasons a single fill attempt is abandoned. These never leave the randomizer:
/// the attempt is restarted, and only running out of attempts is reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttemptError {
    #[error("no reachable empty location for {item:?} (step {step})")]
    FillAttemptExhausted { item: Item, step: usize },
    #[error("goal not reachable with the placed items")]
    VerificationFailed,
}
