use thiserror::Error;

/// Errors raised while building `EngineSettings`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file or environment could not be read, or did not match the
    /// settings layout.
    #[error("Failed to load engine settings: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}
