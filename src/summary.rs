//! Article previews cut from rendered HTML.

/// Start of the tag that separates an article's intro from its preview.
pub const BREAK_MARKER: &str = "<hr";

/// Default preview budget in characters.
pub const SUMMARY_LENGTH: usize = 515;

pub const ELLIPSIS: &str = "...";

/// Preview of `html` using the default budget.
pub fn trim_summary(html: &str) -> String {
    trim_summary_with(html, SUMMARY_LENGTH)
}

/// Preview of `html` holding at most `budget` characters before the
/// ellipsis.
///
/// Text within the budget is returned whole. When the text has to be cut,
/// the cut moves back to the last space so a word is never split. A text
/// with no space before the limit keeps the hard cut.
pub fn trim_summary_with(html: &str, budget: usize) -> String {
    let text = after_break(html);

    let preview = match text.char_indices().nth(budget) {
        Some((limit, _)) => {
            let limited = &text[..limit];
            match limited.rfind(' ') {
                Some(space) => &limited[..space],
                None => limited,
            }
        }
        None => text,
    };

    format!("{}{}", preview, ELLIPSIS)
}

/// Everything after the break marker tag, or the whole input if there is
/// none.
fn after_break(html: &str) -> &str {
    let Some(start) = html.find(BREAK_MARKER) else {
        return html;
    };
    let marker = &html[start..];
    match marker.find('>') {
        Some(end) => marker[end + 1..].trim_start(),
        // unterminated tag swallows the rest
        None => "",
    }
}
