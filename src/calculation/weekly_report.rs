//! Weekly report text normalization.
//!
//! Reports are submitted on a fixed-width form: printable ASCII is converted
//! to its full-width form and the text is hard-wrapped at 36 display columns,
//! where a full-width glyph takes two columns.

/// Column limit of the weekly report form.
pub const WEEKLY_REPORT_COLUMNS: usize = 36;

const FULL_WIDTH_OFFSET: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Converts printable ASCII to full-width characters.
///
/// `!` through `~` shift into the Fullwidth Forms block and the ASCII space
/// becomes U+3000. Everything else, including newlines and text that is
/// already full-width, passes through unchanged.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::to_full_width;
///
/// assert_eq!(to_full_width("AB 12"), "ＡＢ　１２");
/// assert_eq!(to_full_width("済\n"), "済\n");
/// ```
pub fn to_full_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' ' => IDEOGRAPHIC_SPACE,
            // U+FF01..=U+FF5E are all valid scalar values, so the shift
            // always succeeds
            '!'..='~' => char::from_u32(c as u32 + FULL_WIDTH_OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Display width of a character on the report form.
///
/// Code points up to U+00FF take one column; everything else takes two.
pub fn char_display_width(c: char) -> usize {
    if (c as u32) <= 0xFF { 1 } else { 2 }
}

/// Greedily wraps text so no line exceeds `max_columns` display columns.
///
/// A newline in the input always ends the current line. Otherwise a
/// character that would overflow the line starts a new one. There is no
/// lookahead and no hyphenation. A trailing partial line is kept only when it
/// is non-empty.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::wrap_text;
///
/// assert_eq!(wrap_text("abcdef", 4), "abcd\nef");
/// assert_eq!(wrap_text("ab\ncd", 4), "ab\ncd");
/// ```
pub fn wrap_text(text: &str, max_columns: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for c in text.chars() {
        if c == '\n' {
            lines.push(std::mem::take(&mut current));
            width = 0;
            continue;
        }

        let char_width = char_display_width(c);
        if width + char_width > max_columns && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push(c);
        width += char_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Wraps text at the weekly report's 36 columns.
pub fn wrap_text_at_36_columns(text: &str) -> String {
    wrap_text(text, WEEKLY_REPORT_COLUMNS)
}

/// Converts text to full width and wraps it for the weekly report form.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::format_weekly_report;
///
/// let formatted = format_weekly_report("Reviewed PR #42 and fixed CI");
/// for line in formatted.lines() {
///     assert!(line.chars().count() <= 18);
/// }
/// ```
pub fn format_weekly_report(text: &str) -> String {
    wrap_text_at_36_columns(&to_full_width(text))
}

/// Display width of a whole line.
pub fn display_width(line: &str) -> usize {
    line.chars().map(char_display_width).sum()
}
