//! Gate configuration: element ids, form text, log level, provider settings.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! produces the stock gate: root `#body`, inputs `#email` and `#password`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::GateError;

pub const DEFAULT_ROOT_ID: &str = "body";
pub const DEFAULT_FORM_ID: &str = "signin-form";
pub const DEFAULT_EMAIL_INPUT_ID: &str = "email";
pub const DEFAULT_PASSWORD_INPUT_ID: &str = "password";
pub const DEFAULT_SUBMIT_LABEL: &str = "sign in";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Id of the inline `<script type="application/json">` element the browser
/// entry point reads the config from.
pub const INLINE_CONFIG_ID: &str = "signin-gate-config";

/// Firebase web app settings passed to `firebase.initializeApp`.
///
/// Optional: pages that already initialise Firebase themselves leave it out.
/// Accepts the keys of the snippet the Firebase console generates; anything
/// else is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

/// Misspelled keys fail to parse instead of silently falling back to defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    pub root_id: String,
    pub form_id: String,
    pub email_input_id: String,
    pub password_input_id: String,
    pub email_placeholder: String,
    pub password_placeholder: String,
    pub submit_label: String,
    pub log_level: String,
    pub firebase: Option<FirebaseConfig>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_owned(),
            form_id: DEFAULT_FORM_ID.to_owned(),
            email_input_id: DEFAULT_EMAIL_INPUT_ID.to_owned(),
            password_input_id: DEFAULT_PASSWORD_INPUT_ID.to_owned(),
            email_placeholder: DEFAULT_EMAIL_INPUT_ID.to_owned(),
            password_placeholder: DEFAULT_PASSWORD_INPUT_ID.to_owned(),
            submit_label: DEFAULT_SUBMIT_LABEL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            firebase: None,
        }
    }
}

impl GateConfig {
    /// Parse and validate a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Config`] on malformed JSON and
    /// [`GateError::InvalidConfig`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, GateError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ids are usable as HTML attribute values and distinct, and that
    /// the log level is known.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<(), GateError> {
        let ids = [
            ("root_id", self.root_id.as_str()),
            ("form_id", self.form_id.as_str()),
            ("email_input_id", self.email_input_id.as_str()),
            ("password_input_id", self.password_input_id.as_str()),
        ];
        for (field, id) in ids {
            validate_id(field, id)?;
        }
        for (i, (field, id)) in ids.iter().enumerate() {
            if let Some((other, _)) = ids[i + 1..].iter().find(|(_, other_id)| other_id == id) {
                return Err(GateError::InvalidConfig(format!("{field} and {other} share id `{id}`")));
            }
        }
        parse_log_level(&self.log_level)?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidConfig`] for an unknown level name.
    pub fn level(&self) -> Result<log::Level, GateError> {
        parse_log_level(&self.log_level)
    }
}

fn validate_id(field: &str, id: &str) -> Result<(), GateError> {
    if id.is_empty() {
        return Err(GateError::InvalidConfig(format!("{field} must not be empty")));
    }
    if id
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
    {
        return Err(GateError::InvalidConfig(format!("{field} `{id}` is not a valid element id")));
    }
    Ok(())
}

/// Map a level name (`error`, `warn`, `info`, `debug`, `trace`) to a
/// [`log::Level`], ignoring case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`GateError::InvalidConfig`] for any other value.
pub fn parse_log_level(raw: &str) -> Result<log::Level, GateError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" | "warning" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        other => Err(GateError::InvalidConfig(format!("unknown log level `{other}`"))),
    }
}
