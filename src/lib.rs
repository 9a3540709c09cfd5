//! # signin-gate
//!
//! WASM sign-in gate for a static page. On page load the gate subscribes to
//! the identity provider's auth-state notifications; when no session exists
//! the page root is replaced with an email/password form, and a submission
//! either reloads the page (signed in) or shows the provider's error message.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`gate`] | [`gate::AuthGate`] wiring plus watcher, renderer and submitter |
//! | [`state`] | Auth state, user and credential types |
//! | [`net`] | The [`net::provider::IdentityProvider`] seam (Firebase under `browser`) |
//! | [`util`] | The [`util::dom::PageDom`] seam (`web-sys` under `browser`) |
//! | [`config`] | Element ids, form text, log level, provider config |
//! | [`error`] | [`error::GateError`] and [`error::SignInFailure`] |
//!
//! Everything outside the `browser` feature is plain Rust and testable
//! natively against fakes of the two seams.

pub mod config;
pub mod error;
pub mod gate;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
mod entry;

#[cfg(feature = "browser")]
pub use entry::{LoadStart, start_gate, start_gate_on_load};
