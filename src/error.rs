use thiserror::Error;

#[derive(Debug, Error)]
pub enum BarError {
    #[error("Budget of {0} exceeds the {1} ingredients available for selection")]
    InvalidBudget(usize, usize),

    #[error("No ingredients to choose from")]
    EmptyUniverse,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, BarError>;
