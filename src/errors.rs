use thiserror::Error;

/// Errors raised while reading or writing character records.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Wrapper around IO errors (file create/open, directory creation).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON encoding and decoding errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform offered no home directory to place saves under.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// Character name failed validation.
    #[error("invalid character name: {0}")]
    InvalidName(String),

    /// No save file exists for the requested character.
    #[error("character not found: {0}")]
    NotFound(String),
}

/// Errors raised while loading the optional configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
