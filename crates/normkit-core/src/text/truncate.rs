//! Character and word bounded truncation

/// Number of characters (Unicode scalar values) in the value.
pub fn length(value: &str) -> usize {
    value.chars().count()
}

/// Limit the number of characters in a string.
///
/// Values of at most `limit` characters come back unchanged. Longer ones are
/// cut after `limit` characters, right-trimmed, and suffixed with `end`.
///
/// ```
/// use normkit_core::text::limit;
///
/// assert_eq!(limit("abcdef", 3, "..."), "abc...");
/// assert_eq!(limit("abc", 3, "..."), "abc");
/// ```
pub fn limit(value: &str, limit: usize, end: &str) -> String {
    match value.char_indices().nth(limit) {
        None => value.to_string(),
        Some((cut, _)) => format!("{}{}", value[..cut].trim_end(), end),
    }
}

/// Limit the number of words in a string.
///
/// Leading whitespace is kept, then up to `words` words, each with the
/// whitespace that follows it. If that covers the whole value, or the value
/// has no word at all, it is returned unchanged; otherwise the kept part is
/// right-trimmed and suffixed with `end`. A `words` of zero keeps the value.
pub fn words(value: &str, words: usize, end: &str) -> String {
    if words == 0 {
        return value.to_string();
    }

    let mut chars = value.char_indices().peekable();
    let mut consumed = 0;
    let mut seen = 0;

    // leading whitespace
    while let Some((i, ch)) = chars.peek().copied() {
        if !ch.is_whitespace() {
            break;
        }
        consumed = i + ch.len_utf8();
        chars.next();
    }

    while seen < words {
        let mut took_word = false;
        while let Some((i, ch)) = chars.peek().copied() {
            if ch.is_whitespace() {
                break;
            }
            consumed = i + ch.len_utf8();
            took_word = true;
            chars.next();
        }
        if !took_word {
            break;
        }
        seen += 1;

        while let Some((i, ch)) = chars.peek().copied() {
            if !ch.is_whitespace() {
                break;
            }
            consumed = i + ch.len_utf8();
            chars.next();
        }
    }

    if seen == 0 || consumed == value.len() {
        return value.to_string();
    }

    format!("{}{}", value[..consumed].trim_end(), end)
}
