//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! All DOM access goes through [`dom::PageDom`] so gate logic never touches
//! `web_sys` directly and can be tested against an in-memory page.

pub mod dom;
#[cfg(feature = "browser")]
pub mod web_dom;
