//! Page behavior settings.
//!
//! # Responsibility
//! - Hold the timings and prompt text used by the notice helpers.
//! - Load overrides from JSON; missing keys keep their defaults.
//!
//! # Invariants
//! - `alert_dismiss_ms` is greater than zero.
//! - `delete_confirm_message` is never blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Delay before an alert banner starts fading out.
pub const DEFAULT_ALERT_DISMISS_MS: u64 = 5_000;
/// Fade duration before the banner is removed.
pub const DEFAULT_ALERT_FADE_MS: u64 = 150;
/// Prompt shown before a delete action proceeds.
pub const DEFAULT_DELETE_CONFIRM_MESSAGE: &str =
    "Êtes-vous sûr de vouloir supprimer cet élément ?";

/// Settings for alert and confirmation behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub alert_dismiss_ms: u64,
    pub alert_fade_ms: u64,
    pub delete_confirm_message: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            alert_fade_ms: DEFAULT_ALERT_FADE_MS,
            delete_confirm_message: DEFAULT_DELETE_CONFIRM_MESSAGE.to_string(),
        }
    }
}

/// Errors raised while loading `UiSettings`.
#[derive(Debug)]
pub enum ConfigError {
    /// Input is not valid JSON for `UiSettings`.
    Parse(serde_json::Error),
    /// Input parsed but violates a settings invariant.
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "failed to parse settings: {err}"),
            Self::Invalid(details) => write!(f, "invalid settings: {details}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl UiSettings {
    /// Parses settings from JSON and validates them.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks settings invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alert_dismiss_ms == 0 {
            return Err(ConfigError::Invalid("alert_dismiss_ms must be > 0"));
        }
        if self.delete_confirm_message.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "delete_confirm_message cannot be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, UiSettings, DEFAULT_ALERT_DISMISS_MS, DEFAULT_ALERT_FADE_MS};

    #[test]
    fn empty_object_yields_defaults() {
        let settings = UiSettings::from_json_str("{}").expect("defaults should load");
        assert_eq!(settings, UiSettings::default());
        assert_eq!(settings.alert_dismiss_ms, DEFAULT_ALERT_DISMISS_MS);
        assert_eq!(settings.alert_fade_ms, DEFAULT_ALERT_FADE_MS);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let settings =
            UiSettings::from_json_str(r#"{"alert_dismiss_ms": 1200}"#).expect("should load");
        assert_eq!(settings.alert_dismiss_ms, 1200);
        assert_eq!(settings.alert_fade_ms, DEFAULT_ALERT_FADE_MS);
    }

    #[test]
    fn rejects_zero_dismiss_delay() {
        let err = UiSettings::from_json_str(r#"{"alert_dismiss_ms": 0}"#)
            .expect_err("zero delay must be rejected");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_blank_prompt() {
        let err = UiSettings::from_json_str(r#"{"delete_confirm_message": "  "}"#)
            .expect_err("blank prompt must be rejected");
        assert!(err.to_string().contains("delete_confirm_message"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = UiSettings::from_json_str("{").expect_err("malformed json must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
