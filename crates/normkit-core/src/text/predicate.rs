//! Substring predicates and glob matching

use regex::RegexBuilder;

use crate::errors::{NormError, Result};

// Cap on the compiled size of a glob; far above any hand-written pattern.
const GLOB_SIZE_LIMIT: usize = 4 << 20;

/// One candidate or a list of candidates for the substring predicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Needles<'a> {
    Single(&'a str),
    Many(Vec<&'a str>),
}

impl<'a> Needles<'a> {
    /// Candidates that can match at all; empty strings never do.
    fn candidates(&self) -> impl Iterator<Item = &'a str> + '_ {
        let all: &[&'a str] = match self {
            Needles::Single(needle) => std::slice::from_ref(needle),
            Needles::Many(needles) => needles,
        };
        all.iter().copied().filter(|needle| !needle.is_empty())
    }
}

impl<'a> From<&'a str> for Needles<'a> {
    fn from(needle: &'a str) -> Self {
        Needles::Single(needle)
    }
}

impl<'a> From<&'a String> for Needles<'a> {
    fn from(needle: &'a String) -> Self {
        Needles::Single(needle.as_str())
    }
}

impl<'a> From<Vec<&'a str>> for Needles<'a> {
    fn from(needles: Vec<&'a str>) -> Self {
        Needles::Many(needles)
    }
}

impl<'a> From<&'a [&'a str]> for Needles<'a> {
    fn from(needles: &'a [&'a str]) -> Self {
        Needles::Many(needles.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Needles<'a> {
    fn from(needles: [&'a str; N]) -> Self {
        Needles::Many(needles.to_vec())
    }
}

impl<'a> From<&'a [String]> for Needles<'a> {
    fn from(needles: &'a [String]) -> Self {
        Needles::Many(needles.iter().map(String::as_str).collect())
    }
}

/// True if `haystack` contains any non-empty needle.
///
/// ```
/// use normkit_core::text::contains;
///
/// assert!(!contains("my_method", "x"));
/// assert!(contains("my_method", ["x", "d"]));
/// ```
pub fn contains<'a>(haystack: &str, needles: impl Into<Needles<'a>>) -> bool {
    needles
        .into()
        .candidates()
        .any(|needle| haystack.contains(needle))
}

/// True if `haystack` starts with any non-empty needle.
pub fn starts_with<'a>(haystack: &str, needles: impl Into<Needles<'a>>) -> bool {
    needles
        .into()
        .candidates()
        .any(|needle| haystack.starts_with(needle))
}

/// True if `haystack` ends with any non-empty needle.
pub fn ends_with<'a>(haystack: &str, needles: impl Into<Needles<'a>>) -> bool {
    needles
        .into()
        .candidates()
        .any(|needle| haystack.ends_with(needle))
}

/// Glob match where `*` stands for any run of characters, newlines included.
///
/// Every other character is literal and the pattern must cover the whole
/// value. Identical strings match without compiling anything.
///
/// # Errors
///
/// Returns `InvalidPattern` if the translated expression cannot be compiled,
/// which in practice means it exceeds the compiled size limit.
///
/// ```
/// use normkit_core::text::is;
///
/// assert!(is("*.php", "myFile.php").unwrap());
/// assert!(!is("php", "myFile.php").unwrap());
/// ```
pub fn is(pattern: &str, value: &str) -> Result<bool> {
    if pattern == value {
        return Ok(true);
    }

    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    let compiled = RegexBuilder::new(&format!(r"\A{}\z", body))
        .dot_matches_new_line(true)
        .size_limit(GLOB_SIZE_LIMIT)
        .build()
        .map_err(|e| NormError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

    Ok(compiled.is_match(value))
}

/// Split a `Name@method` callback into its parts.
///
/// Without an `@` the whole string is the name and `default_method` is used.
/// Only the first `@` splits; the method keeps any later ones.
pub fn parse_callback<'a>(callback: &'a str, default_method: &'a str) -> (&'a str, &'a str) {
    callback
        .split_once('@')
        .unwrap_or((callback, default_method))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_single_and_many() {
        assert!(contains("my_method", "d"));
        assert!(!contains("my_method", "x"));
        assert!(contains("my_method", vec!["x", "d"]));
    }

    #[test]
    fn test_empty_needle_never_matches() {
        assert!(!contains("anything", ""));
        assert!(!starts_with("anything", ""));
        assert!(!ends_with("anything", ""));
        assert!(!ends_with("", ""));
        assert!(!contains("anything", Needles::Many(vec![])));
    }

    #[test]
    fn test_starts_and_ends_with() {
        assert!(starts_with("theCamelCaseVariable", ["t", "z"]));
        assert!(!starts_with("theCamelCaseVariable", "z"));
        assert!(ends_with("my_method", ["x", "d"]));
        assert!(!ends_with("my_method", "x"));
    }

    #[test]
    fn test_owned_needles() {
        let needles = vec!["zz".to_string(), "Case".to_string()];
        assert!(contains("theCamelCase", needles.as_slice()));
        let one = "Camel".to_string();
        assert!(contains("theCamelCase", &one));
    }

    #[test]
    fn test_is_glob() {
        assert!(is("*.php", "myFile.php").unwrap());
        assert!(!is("php", "myFile.php").unwrap());
        assert!(is("library/*", "library/foo/bar").unwrap());
        assert!(is("*", "").unwrap());
        assert!(is("a*c", "a\nb\nc").unwrap());
    }

    #[test]
    fn test_is_treats_metacharacters_literally() {
        assert!(is("a.c", "a.c").unwrap());
        assert!(!is("a.c", "abc").unwrap());
        assert!(is("(x)+*", "(x)+tail").unwrap());
        assert!(!is("[ab]", "a").unwrap());
    }

    #[test]
    fn test_is_is_anchored() {
        assert!(!is("foo*", "xfoo").unwrap());
        assert!(!is("*foo", "foox").unwrap());
    }

    #[test]
    fn test_parse_callback() {
        assert_eq!(
            parse_callback("Class@methodName", "defaultMethod"),
            ("Class", "methodName")
        );
        assert_eq!(
            parse_callback("ClassName", "defaultMethod"),
            ("ClassName", "defaultMethod")
        );
        assert_eq!(parse_callback("A@b@c", "d"), ("A", "b@c"));
    }
}
