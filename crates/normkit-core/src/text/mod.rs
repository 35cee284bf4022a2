//! String normalization helpers
//!
//! Flat namespace of pure functions over `&str`. Lengths and truncation count
//! Unicode scalar values, never bytes. Nothing in here depends on the
//! container helpers.

pub mod case;
pub mod predicate;
pub mod random;
pub mod truncate;

pub use case::{camel, lower, slug, snake, studly, title, upper};
pub use predicate::{contains, ends_with, is, parse_callback, starts_with, Needles};
pub use random::{
    quick_random, random, random_or_fallback, random_or_fallback_with, random_with, EntropySource,
    Token, TokenSource,
};
pub use truncate::{length, limit, words};

/// Default output length of the token generators
pub const DEFAULT_RANDOM_LENGTH: usize = 16;

/// Default bound for `limit` (characters) and `words` (words)
pub const DEFAULT_LIMIT: usize = 100;

/// Default suffix appended by `limit` and `words`
pub const DEFAULT_END: &str = "...";

/// Default separator for `slug`
pub const DEFAULT_SLUG_SEPARATOR: char = '-';

/// Default delimiter for `snake`
pub const DEFAULT_SNAKE_DELIMITER: &str = "_";
