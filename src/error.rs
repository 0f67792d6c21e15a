use crate::team::SlotCoordinate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamForgeError {
    #[error("Roster must contain exactly 10 players (found {found})")]
    InvalidRosterSize { found: usize },

    #[error("No valid team combination found")]
    NoValidAssignment,

    #[error("Invalid slot: {0}")]
    InvalidSlot(SlotCoordinate),

    #[error("Search aborted by observer")]
    Aborted,

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type TfResult<T> = Result<T, TeamForgeError>;
