//! Redaction wrapper for generated secrets
//!
//! Random tokens produced by normkit are frequently used as passwords,
//! reset codes or API keys. `Redacted<T>` keeps them out of `Debug` and
//! `Display` output so a stray `tracing::debug!(?token)` cannot leak them.

use std::fmt;

const MASK: &str = "[redacted]";

/// Value that prints as `[redacted]`
///
/// # Example
///
/// ```
/// use normkit_core_types::Redacted;
///
/// let token = Redacted::new(String::from("s3cr3t"));
/// assert_eq!(format!("{token:?}"), "[redacted]");
/// assert_eq!(token.reveal(), "s3cr3t");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Redacted<T>(T);

impl<T> Redacted<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the wrapped value.
    pub fn reveal(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Redacted<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}
