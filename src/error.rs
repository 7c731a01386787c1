use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Export Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Out of Range: {0}")]
    OutOfRange(String),

    #[error("Unknown Chord Quality: '{0}'")]
    UnknownQuality(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type CfResult<T> = Result<T, ChordForgeError>;
