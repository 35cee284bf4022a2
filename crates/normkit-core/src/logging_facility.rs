//! Structured logging facility for normkit
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured operation macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The text and container helpers are pure and emit nothing on their happy
//! path; events come from the boundary pieces (token fallback, the leveled
//! logger, schema registration).
//!
//! # Usage
//!
//! ```rust
//! use normkit_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
