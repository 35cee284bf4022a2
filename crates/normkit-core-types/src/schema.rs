//! Canonical field keys and event names for structured logging
//!
//! Every tracing event emitted by normkit uses these keys so captured output
//! can be filtered the same way in tests and in production.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Logger boundary
pub const FIELD_CHANNEL: &str = "channel";
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_CONTEXT: &str = "context";

// Operation payload
pub const FIELD_COUNT: &str = "count";
pub const FIELD_SOURCE: &str = "source";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_FALLBACK: &str = "fallback";
pub const EVENT_LOG: &str = "log";
