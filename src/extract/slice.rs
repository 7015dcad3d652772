//! Locating a JSON object inside free-form model output.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// First `{` through last `}`, across newlines.
    static ref GREEDY_OBJECT: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// Return the first balanced top-level `{ ... }` block in `text`.
///
/// Braces inside JSON string literals (including escaped quotes) are not
/// counted. Returns `None` when no `{` exists or the first object never closes.
pub fn balanced_object_slice(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = text.find('{')?;
    let mut depth: usize = 0;
    let mut in_str = false;
    let mut escape = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_str {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == b'"' {
                in_str = false;
            }
            continue;
        }
        match b {
            b'"' => in_str = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset;
                    return text.get(start..=end);
                }
            }
            _ => {}
        }
    }
    None
}

/// Return the span from the first `{` to the last `}` in `text`.
///
/// Does no balancing: prose braces around the payload or several JSON
/// objects in one reply end up inside the span.
pub fn greedy_object_slice(text: &str) -> Option<&str> {
    GREEDY_OBJECT.find(text).map(|m| m.as_str())
}
