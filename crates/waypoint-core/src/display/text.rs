//! Rich-text to plain-text conversion for terminal output.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Tags that end a line of text
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*br\s*/?>|<\s*/\s*(?:p|li|div)\s*>").expect("line break pattern is valid")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#(\d+)|#[xX]([0-9a-fA-F]+)|([a-zA-Z]+));").expect("entity pattern is valid")
});

/// Converts an HTML fragment to plain text.
///
/// Line-ending tags (`<br>`, `</p>`, `</li>`, `</div>`) become newlines,
/// every other tag is dropped, and character references are decoded.
/// Trailing whitespace is trimmed.
///
/// ```rust
/// use waypoint_core::display::html_to_plain_text;
///
/// let text = html_to_plain_text("<p>Pick-up at 08:00</p><p>Rice terraces &amp; lunch</p>");
/// assert_eq!(text, "Pick-up at 08:00\nRice terraces & lunch");
/// ```
pub fn html_to_plain_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let text = LINE_BREAK_RE.replace_all(html, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = ENTITY_RE.replace_all(&text, decode_entity);
    text.trim_end().to_string()
}

fn decode_entity(caps: &Captures<'_>) -> String {
    let decoded = if let Some(decimal) = caps.get(1) {
        decimal.as_str().parse::<u32>().ok().and_then(char::from_u32)
    } else if let Some(hex) = caps.get(2) {
        u32::from_str_radix(hex.as_str(), 16)
            .ok()
            .and_then(char::from_u32)
    } else {
        caps.get(3).and_then(|name| match name.as_str() {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => None,
        })
    };

    match decoded {
        Some(c) => c.to_string(),
        None => caps[0].to_string(),
    }
}
