//! normkit core - deterministic string and structured-value normalization
//!
//! This crate provides:
//! - `text`: case conversion, slugging, glob matching, substring predicates,
//!   bounded truncation and random token generation
//! - `container`: order-preserving key filtering, depth inspection,
//!   flattening, stacked-field transposition and literal key/value replacement
//! - `log` and `schema_mapper`: the logger and schema-registration boundaries
//!   host applications call the helpers from
//!
//! `text` and `container` are pure and independent of each other and of the
//! boundary modules.

pub mod container;
pub mod errors;
pub mod log;
pub mod logging_facility;
pub mod schema_mapper;
pub mod text;

pub use normkit_core_types as core_types;

// Re-export commonly used types
pub use container::Mapping;
pub use errors::{ExError, ExErrorKind, NormError, Result};
pub use log::{LogLevel, LogWriter, Logger, LoggerSettings, TracingWriter};
pub use schema_mapper::{register_all, MemoryRegistry, SchemaRegistry};
pub use text::{Needles, Token, TokenSource};
