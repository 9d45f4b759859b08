// crates/ronorm-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input did not contain a header row")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, PipelineError>;
