//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Delivered by the identity provider through the auth-state subscription and
//! consumed by the watcher to decide whether the sign-in form is shown.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Whether the provider currently reports an active session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    Present(User),
    Absent,
}

impl AuthState {
    /// Map the provider's "user or nothing" callback value.
    #[must_use]
    pub fn from_user(user: Option<User>) -> Self {
        user.map_or(Self::Absent, Self::Present)
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Present(user) => Some(user),
            Self::Absent => None,
        }
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(_) => f.write_str("user is signed in"),
            Self::Absent => f.write_str("Not signed in"),
        }
    }
}

/// Email/password pair read from the form at submit time. Never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
