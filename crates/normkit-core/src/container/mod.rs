//! Associative container transforms
//!
//! Mappings are `serde_json::Map` built with `preserve_order`, so iteration
//! order is insertion order and every transform here keeps it. Nested
//! structure is plain `Value`: objects and arrays are nodes, everything else
//! is a leaf.

pub mod filter;
pub mod nested;
pub mod replace;
pub mod stacked;

use serde_json::{Map, Value};

pub use filter::{except, only};
pub use nested::{depth, flatten, is_blank, is_empty};
pub use replace::{replace_key, replace_value};
pub use stacked::normalize_stacked;

/// Ordered string-keyed mapping
pub type Mapping = Map<String, Value>;
