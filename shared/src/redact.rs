//! Secret redaction helpers

/// Number of characters kept at each end of a previewed secret
const VISIBLE_CHARS: usize = 4;

/// Rendering used when a secret is too short to preview safely
pub const MASK: &str = "***";

/// Placeholder used wherever a sensitive value would otherwise be logged
pub const REDACTED: &str = "[REDACTED]";

/// Render a secret as `abcd...wxyz`.
///
/// Secrets of `2 * VISIBLE_CHARS` characters or fewer are fully masked, since the
/// preview would otherwise reveal every character. Counting is done on chars so
/// multi-byte input never splits a code point.
pub fn preview(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= VISIBLE_CHARS * 2 {
        return MASK.to_string();
    }

    let head: String = chars[..VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_CHARS..].iter().collect();
    format!("{head}...{tail}")
}

/// Whether a configuration key name looks like it holds a secret
pub fn is_sensitive_key(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    ["KEY", "SECRET", "TOKEN"].iter().any(|marker| upper.contains(marker))
}

/// Value to show in logs for a configuration entry
pub fn display_value<'a>(name: &str, value: &'a str) -> &'a str {
    if is_sensitive_key(name) { REDACTED } else { value }
}
