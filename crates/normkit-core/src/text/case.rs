//! Case transforms and slugging

use std::sync::LazyLock;

use regex::Regex;

// Letters with their combining marks, and numbers
static SLUG_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[\p{L}\p{M}\p{N}]\z").expect("slug character class"));

fn is_slug_char(ch: char) -> bool {
    let mut buf = [0u8; 4];
    SLUG_CHAR.is_match(ch.encode_utf8(&mut buf))
}

fn is_word_break(ch: char) -> bool {
    ch == '-' || ch == '_' || ch.is_whitespace()
}

/// Convert a value to studly caps ("PascalCase").
///
/// `-`, `_` and whitespace split words; the first letter of each word is
/// upper-cased and the separators are dropped. The rest of each word is left
/// as is, so `"the_camelCase"` becomes `"TheCamelCase"`.
pub fn studly(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;

    for ch in value.chars() {
        if is_word_break(ch) {
            at_word_start = true;
            continue;
        }
        if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Convert a value to camel case: `"my_method"` becomes `"myMethod"`.
pub fn camel(value: &str) -> String {
    let studly = studly(value);
    let mut chars = studly.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a value to snake case: `"theCamelCase"` becomes `"the_camel_case"`.
///
/// A non-empty, fully lower-case value is returned untouched. Otherwise the
/// delimiter goes between any character and an upper-case letter right after
/// it, scanning left to right and consuming each pair, so a run like
/// `"ABC"` yields `"a_bc"`. The result is then lower-cased.
pub fn snake(value: &str, delimiter: &str) -> String {
    if !value.is_empty() && value.chars().all(char::is_lowercase) {
        return value.to_string();
    }

    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + delimiter.len() * 4);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match chars.get(i + 1) {
            Some(next) if ch != '\n' && next.is_uppercase() => {
                out.push(ch);
                out.push_str(delimiter);
                out.push(*next);
                i += 2;
            }
            _ => {
                out.push(ch);
                i += 1;
            }
        }
    }

    out.to_lowercase()
}

/// Title-case every word: `"this is a title"` becomes `"This Is A Title"`.
///
/// A word starts at any letter or digit not preceded by another letter,
/// digit or apostrophe. Letters inside a word are lower-cased.
pub fn title(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = in_word && ch == '\'';
        }
    }

    out
}

/// Generate a URL friendly slug: `"Mr. Ganesha, this is a title"` becomes
/// `"mr-ganesha-this-is-a-title"`.
///
/// Runs of the opposite separator (`_` for `-`, `-` for anything else) turn
/// into `separator`, everything but letters (with their combining marks),
/// numbers, whitespace and the separator is dropped, and runs of
/// whitespace/separator collapse into one separator before the ends are
/// trimmed.
pub fn slug(title: &str, separator: char) -> String {
    let flip = if separator == '-' { '_' } else { '-' };

    let mut flipped = String::with_capacity(title.len());
    let mut in_flip_run = false;
    for ch in title.chars() {
        if ch == flip {
            if !in_flip_run {
                flipped.push(separator);
            }
            in_flip_run = true;
        } else {
            flipped.push(ch);
            in_flip_run = false;
        }
    }

    let mut out = String::with_capacity(flipped.len());
    let mut pending_separator = false;

    for ch in flipped.to_lowercase().chars() {
        if ch == separator || ch.is_whitespace() {
            pending_separator = true;
        } else if is_slug_char(ch) {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.push(ch);
        }
    }

    out
}

/// Lower-case the whole value.
pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

/// Upper-case the whole value.
pub fn upper(value: &str) -> String {
    value.to_uppercase()
}
