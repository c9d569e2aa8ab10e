use thiserror::Error;

/// Everything that can go wrong in one invocation. Each kind carries enough
/// context (path, name, or the engine's message) to diagnose without
/// re-running, and each maps to a stable process exit code.
#[derive(Error, Debug)]
pub enum SqlJsonError {
    #[error("Error opening database: no path")]
    DatabaseMissing,
    #[error("Error opening database {path}: {message}")]
    DatabaseOpen { path: String, message: String },
    #[error("Error reading bindings {path}: {message}")]
    BindRead { path: String, message: String },
    #[error("Error deserializing bindings {origin}: {message}")]
    BindDeserialize { origin: String, message: String },
    #[error("Need --query or --query-path")]
    QueryMissing,
    #[error("Error reading --query-path {path}: {message}")]
    QueryRead { path: String, message: String },
    #[error("Error running query: {0}")]
    QueryExec(String),
    #[error("Error reading --input {path}: {message}")]
    InputRead { path: String, message: String },
    #[error("Error deserializing {path}: {message}")]
    InputDeserialize { path: String, message: String },
    #[error("Input format error: {0}")]
    InputFormat(String),
    #[error("--key required if --input specified")]
    KeyMissing,
    #[error("Error serializing output: {0}")]
    OutputSerialize(String),
    #[error("Error writing output {path}: {message}")]
    OutputWrite { path: String, message: String },
    #[error("Value error for '{name}': {message}")]
    Value { name: String, message: String },
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SqlJsonError>;

impl SqlJsonError {
    /// Stable per-kind exit code reported by the driver; 0 means success.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::DatabaseMissing => 1,
            Self::DatabaseOpen { .. } => 2,
            Self::BindRead { .. } => 3,
            Self::BindDeserialize { .. } => 4,
            Self::QueryMissing => 5,
            Self::QueryRead { .. } => 6,
            Self::QueryExec(_) => 7,
            Self::InputRead { .. } => 8,
            Self::InputDeserialize { .. } => 9,
            Self::InputFormat(_) => 10,
            Self::KeyMissing => 11,
            Self::OutputSerialize(_) => 12,
            Self::OutputWrite { .. } => 13,
            Self::Value { .. } => 14,
            Self::Config(_) => 15,
        }
    }
}

// Helper conversions
impl From<rusqlite::Error> for SqlJsonError {
    fn from(e: rusqlite::Error) -> Self { Self::QueryExec(e.to_string()) }
}
