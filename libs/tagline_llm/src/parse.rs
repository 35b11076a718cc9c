//! Turns free-form model output into discrete tagline strings.
//!
//! Models return taglines as loosely formatted lists: bullet or dash
//! decoration, blank separator lines, sometimes a "Taglines:" header echoed
//! back from the prompt. This keeps that cleanup out of the HTTP layer.

fn is_decoration(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '•'
}

fn is_header(line: &str) -> bool {
    line.to_lowercase().starts_with("taglines")
}

/// Splits generated text into at most `count` tagline strings: one per line,
/// decoration trimmed from both ends, blank lines and header restatements
/// dropped.
pub fn split_taglines(text: &str, count: usize) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_matches(is_decoration))
        .filter(|line| !line.is_empty() && !is_header(line))
        .map(str::to_string)
        .take(count)
        .collect()
}
