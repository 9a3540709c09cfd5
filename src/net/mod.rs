//! Identity provider boundary.
//!
//! `provider` defines the seam the gate is written against; `firebase` binds
//! it to the Firebase JS SDK in the browser build.

#[cfg(feature = "browser")]
pub mod firebase;
pub mod provider;
