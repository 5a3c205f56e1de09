//! iCalendar TEXT unescaping.

/// Escape sequences, replaced in this order.
const REPLACEMENTS: [(&str, &str); 6] = [
    ("\\;", ";"),
    ("\\,", ","),
    ("\\n", "\n"),
    ("\\\\", "\\"),
    ("\n", " "),
    ("&nbsp", " "),
];

/// Turn a raw property value into single-line display text.
///
/// Escaped `;`, `,` and `\` are unescaped and every newline, escaped or literal,
/// becomes a single space.
///
/// ```rust
/// assert_eq!(calread::unescape_text("A\\;B\\,C"), "A;B,C");
/// assert_eq!(calread::unescape_text("Line1\\nLine2"), "Line1 Line2");
/// ```
#[must_use]
pub fn unescape_text(input: &str) -> String {
    if !input.contains(['\\', '\n', '&']) {
        return input.to_owned();
    }
    REPLACEMENTS
        .iter()
        .fold(input.to_owned(), |text, &(from, to)| text.replace(from, to))
}
