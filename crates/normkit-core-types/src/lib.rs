//! Core types shared across normkit facilities
//!
//! This crate holds the pieces that both the error facility and the logging
//! facility need without pulling in the rest of the library:
//!
//! - **Schema constants**: canonical field keys and event names
//! - **Redaction**: `Redacted<T>` marker for generated secrets

pub mod redacted;
pub mod schema;

pub use redacted::Redacted;
