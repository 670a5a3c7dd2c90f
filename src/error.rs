use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("Unknown vibe: {0}")]
    UnknownVibe(String),

    #[error("Unknown vibe: {input} (did you mean '{suggestion}'?)")]
    UnknownVibeSuggestion { input: String, suggestion: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SupplyError>;
