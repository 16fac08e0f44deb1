use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuriError {
    #[error(
        "Failed to start {program}: {source}. \
         Please ensure your Linux system has 64-bit binary support."
    )]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("Encoding loss: {0}")]
    EncodingLoss(String),

    #[error("Segmentation cache inconsistency for line {line:?}")]
    CacheInconsistency { line: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Failed to set global subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type Result<T> = std::result::Result<T, FuriError>;
