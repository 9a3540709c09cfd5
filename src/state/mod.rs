//! Client-side state observed or carried by the gate.
//!
//! DESIGN
//! ======
//! Auth state is owned by the identity provider; the types here only describe
//! what the gate sees of it and what it sends back.

pub mod auth;
