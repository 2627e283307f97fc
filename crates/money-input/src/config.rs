use std::collections::BTreeMap;

use money_format::AmountValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::host::ERROR_ATTRIBUTE;

pub const DEFAULT_LOCALE: &str = "en-US";

/// `tel` brings up a numeric keyboard on phones while still allowing separators.
pub const DEFAULT_INPUT_TYPE: &str = "tel";

/// Attributes the field manages itself.
const RESERVED_ATTRIBUTES: [&str; 3] = ["value", "type", ERROR_ATTRIBUTE];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid amount field config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("locale must not be empty")]
    EmptyLocale,
    #[error("input type must not be empty")]
    EmptyInputType,
    #[error("attribute {0:?} is managed by the field and cannot be passed through")]
    ReservedAttribute(String),
}

/// Host-supplied configuration for an [`crate::AmountField`].
///
/// `attributes` are forwarded verbatim to the host field (placeholder, disabled, aria labels,
/// ...); the field never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountFieldConfig {
    /// Initial amount in cents, or preformatted text.
    pub value: Option<AmountValue>,
    pub locale: String,
    pub input_type: String,
    pub attributes: BTreeMap<String, String>,
}

impl Default for AmountFieldConfig {
    fn default() -> Self {
        Self {
            value: None,
            locale: DEFAULT_LOCALE.to_string(),
            input_type: DEFAULT_INPUT_TYPE.to_string(),
            attributes: BTreeMap::new(),
        }
    }
}

impl AmountFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<AmountValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.trim().is_empty() {
            return Err(ConfigError::EmptyLocale);
        }
        if self.input_type.trim().is_empty() {
            return Err(ConfigError::EmptyInputType);
        }
        if let Some(name) = self.attributes.keys().find(|name| is_reserved(name)) {
            return Err(ConfigError::ReservedAttribute(name.clone()));
        }
        Ok(())
    }
}

pub(crate) fn is_reserved(name: &str) -> bool {
    RESERVED_ATTRIBUTES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_uses_defaults() {
        let config = AmountFieldConfig::from_json("{}").unwrap();
        assert_eq!(config, AmountFieldConfig::default());
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.input_type, "tel");
        assert_eq!(config.value, None);
    }

    #[test]
    fn parses_values_and_passthrough_attributes() {
        let json = r#"{
            "value": 123450,
            "locale": "de-DE",
            "attributes": {"placeholder": "amount, please"}
        }"#;
        let config = AmountFieldConfig::from_json(json).unwrap();
        assert_eq!(config.value, Some(AmountValue::Cents(123450.0)));
        assert_eq!(config.locale, "de-DE");
        assert_eq!(
            config.attributes.get("placeholder").map(String::as_str),
            Some("amount, please")
        );

        let config = AmountFieldConfig::from_json(r#"{"value": "420"}"#).unwrap();
        assert_eq!(config.value, Some(AmountValue::from("420")));
    }

    #[test]
    fn rejects_bad_configs() {
        assert!(matches!(
            AmountFieldConfig::from_json("{\"locale\": 3}"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            AmountFieldConfig::from_json(r#"{"locale": " "}"#),
            Err(ConfigError::EmptyLocale)
        ));
        assert!(matches!(
            AmountFieldConfig::from_json(r#"{"input_type": ""}"#),
            Err(ConfigError::EmptyInputType)
        ));
        let err =
            AmountFieldConfig::from_json(r#"{"attributes": {"Data-Error": "x"}}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "attribute \"Data-Error\" is managed by the field and cannot be passed through"
        );
    }

    #[test]
    fn builder_methods() {
        let config = AmountFieldConfig::new()
            .with_value(420_i64)
            .with_locale("de-DE")
            .with_input_type("text")
            .with_attribute("disabled", "");
        assert_eq!(config.value, Some(AmountValue::Cents(420.0)));
        assert_eq!(config.input_type, "text");
        assert!(config.validate().is_ok());
    }
}
