//! Error types shared by the gate components.
//!
//! ERROR HANDLING
//! ==============
//! `SignInFailure` is the only error a user ever sees: it is shown in an alert
//! and the form stays up for another attempt. Everything else is a
//! `GateError`, returned from startup (fail fast) or logged when it happens
//! inside a provider or DOM callback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Code used when the provider rejects without a `code` field.
pub const UNKNOWN_FAILURE_CODE: &str = "auth/unknown";

/// A rejected sign-in attempt, as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SignInFailure {
    /// Provider-defined code, e.g. `auth/wrong-password`.
    pub code: String,
    /// Human-readable message shown to the user verbatim.
    pub message: String,
}

impl SignInFailure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }

    /// Build a failure from optional provider fields.
    ///
    /// A missing code becomes [`UNKNOWN_FAILURE_CODE`]; a missing message
    /// falls back to `raw`, the provider's error rendered as text.
    #[must_use]
    pub fn from_parts(code: Option<String>, message: Option<String>, raw: &str) -> Self {
        Self {
            code: code
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN_FAILURE_CODE.to_owned()),
            message: message.filter(|m| !m.is_empty()).unwrap_or_else(|| raw.to_owned()),
        }
    }
}

/// Everything that can go wrong outside a sign-in attempt.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The config JSON could not be parsed.
    #[error("invalid gate config: {0}")]
    Config(#[from] serde_json::Error),
    /// The config parsed but failed validation.
    #[error("invalid gate config: {0}")]
    InvalidConfig(String),
    /// No element with the given id exists in the document.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// The element exists but is not the expected kind.
    #[error("element #{id} is not a {expected}")]
    UnexpectedElement { id: String, expected: &'static str },
    /// The provider refused the auth-state subscription.
    #[error("auth state subscription failed: {0}")]
    Subscription(String),
    /// The watcher was asked to subscribe a second time.
    #[error("auth state watcher already subscribed")]
    AlreadySubscribed,
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}
