use thiserror::Error;

/// Failures of the rule engine. None of these are part of normal play:
/// a collision ends the game through `GameStatus::Over`, not through an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Game has already been started")]
    AlreadyStarted,

    #[error("Game has not been started")]
    NotStarted,

    #[error("Snake length {length} exceeds grid capacity {capacity}")]
    CapacityExceeded { length: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
