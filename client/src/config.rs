use courier_std::errors::ConfigError;
use serde::Deserialize;
use serde_json::Value;

/// Construction-time settings for a [Notifier](crate::Notifier).
///
/// Recognised keys are `subject` and `recipient`. The misspelling `recepient` is accepted as an
/// alias, since configuration written for older deployments uses it. Unknown keys are ignored,
/// so a notifier can be configured from a larger mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotifierConfig {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, alias = "recepient")]
    pub recipient: Option<String>,
}

impl NotifierConfig {
    /// Reads the configuration from an already parsed JSON mapping.
    ///
    /// # Errors
    ///
    /// Returns [ConfigError::ParseFailure] if `value` is not a mapping, or a recognised key
    /// does not hold a string.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(ConfigError::ParseFailure)
    }

    /// Reads the configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [ConfigError::ParseFailure] if `json` is malformed, or a recognised key does not
    /// hold a string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::ParseFailure)
    }
}
