use crate::error::ConfigError;
use chrono::Weekday;
use serde::Deserialize;

/// The root configuration structure for a performance engine.
///
/// Every section is optional in the source file; missing sections fall back
/// to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub calendar: CalendarSettings,
    #[serde(default)]
    pub statistics: StatisticsSettings,
    #[serde(default)]
    pub rolling: RollingSettings,
}

/// Calendar alignment of period boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarSettings {
    /// The weekday that closes a week for week-to-date and weekly windows
    /// (e.g. "Fri" or "Friday").
    #[serde(default = "default_week_anchor")]
    pub week_anchor: Weekday,
}

/// Annualization inputs for the statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatisticsSettings {
    /// Periods per year for volatility and tracking error. When absent the
    /// engine infers it from the spacing of the observation dates.
    #[serde(default)]
    pub periods_per_year: Option<u32>,
    /// Length of the year, in calendar days, used to annualize returns.
    #[serde(default = "default_days_per_year")]
    pub days_per_year: u32,
}

/// Behaviour of the rolling custom-periodicity history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RollingSettings {
    /// Keep the oldest window even when it starts before the first
    /// observation. Set to `false` to apply the standard summary's
    /// full-coverage rule to rolling windows as well.
    #[serde(default = "default_include_partial_windows")]
    pub include_partial_windows: bool,
}

fn default_week_anchor() -> Weekday {
    Weekday::Fri
}

fn default_days_per_year() -> u32 {
    365
}

fn default_include_partial_windows() -> bool {
    true
}

// --- Default Implementations ---
// These mirror the serde defaults so `EngineSettings::default()` and an empty
// file produce the same settings.

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            week_anchor: default_week_anchor(),
        }
    }
}

impl Default for StatisticsSettings {
    fn default() -> Self {
        Self {
            periods_per_year: None,
            days_per_year: default_days_per_year(),
        }
    }
}

impl Default for RollingSettings {
    fn default() -> Self {
        Self {
            include_partial_windows: default_include_partial_windows(),
        }
    }
}

impl EngineSettings {
    /// Checks that the settings are logical.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.statistics.periods_per_year == Some(0) {
            return Err(ConfigError::InvalidSetting {
                key: "statistics.periods_per_year",
                reason: "must be greater than 0".to_string(),
            });
        }
        if !(360..=366).contains(&self.statistics.days_per_year) {
            return Err(ConfigError::InvalidSetting {
                key: "statistics.days_per_year",
                reason: format!(
                    "must be between 360 and 366, got {}",
                    self.statistics.days_per_year
                ),
            });
        }
        Ok(())
    }
}
