//! Schema registration boundary
//!
//! Configuration can declare named schema definitions; `register_all` hands
//! each `(name, definition)` pair to whatever registry the host provides,
//! always forcing overwrite.

use serde_json::Value;

use crate::container::Mapping;
use crate::errors::{NormError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Registry accepting named schema definitions
pub trait SchemaRegistry {
    /// Register `definition` under `name`.
    ///
    /// # Errors
    ///
    /// Implementations return `SchemaAlreadyRegistered` when `name` exists and
    /// `force` is false.
    fn register(&mut self, name: &str, definition: &Value, force: bool) -> Result<()>;
}

/// In-memory registry keeping definitions in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRegistry {
    entries: Mapping,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SchemaRegistry for MemoryRegistry {
    fn register(&mut self, name: &str, definition: &Value, force: bool) -> Result<()> {
        if !force && self.entries.contains_key(name) {
            return Err(NormError::SchemaAlreadyRegistered {
                name: name.to_string(),
            });
        }
        self.entries.insert(name.to_string(), definition.clone());
        Ok(())
    }
}

/// Register every entry of `options` with `force = true`, in order.
///
/// Returns how many definitions were registered.
///
/// # Errors
///
/// Stops at and returns the first error the registry reports.
pub fn register_all<R: SchemaRegistry + ?Sized>(
    registry: &mut R,
    options: &Mapping,
) -> Result<usize> {
    log_op_start!("register_all", count = options.len());

    for (name, definition) in options {
        if let Err(err) = registry.register(name, definition, true) {
            log_op_error!("register_all", err.clone(), schema = name.as_str());
            return Err(err);
        }
    }

    log_op_end!("register_all", count = options.len());
    Ok(options.len())
}
