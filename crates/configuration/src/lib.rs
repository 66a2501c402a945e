use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{CalendarSettings, EngineSettings, RollingSettings, StatisticsSettings};

/// Prefix of the environment variables that override file settings, e.g.
/// `VANTAGE__CALENDAR__WEEK_ANCHOR=Thu`.
pub const ENV_PREFIX: &str = "VANTAGE";

/// Loads the engine settings from an optional TOML file plus environment
/// overrides.
///
/// The file may be missing: every setting has a default. Values are
/// validated before they are returned.
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineSettings, ConfigError> {
    load_with_environment(path.as_ref(), environment())
}

/// The `VANTAGE__SECTION__KEY` environment source.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_with_environment(
    path: &Path,
    environment: config::Environment,
) -> Result<EngineSettings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(environment)
        .build()?;

    // Attempt to deserialize the entire configuration into our `EngineSettings` struct
    let settings = builder.try_deserialize::<EngineSettings>()?;
    settings.validate()?;

    tracing::info!(path = %path.display(), ?settings, "Engine settings loaded.");
    Ok(settings)
}

/// Parses settings from TOML text, without consulting the environment.
pub fn from_toml_str(toml: &str) -> Result<EngineSettings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<EngineSettings>()?;
    settings.validate()?;
    Ok(settings)
}
