//! Command recognition for mention bodies
//!
//! The checks here are deliberately independent: one body can be both a
//! `submit` and a question when it ends in a question mark.

/// Characters that end a line of command text
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Leading space-delimited token
fn first_token(body: &str) -> &str {
    body.split(' ').next().unwrap_or_default()
}

/// Body starts a round (`start` / `st`)
pub fn is_start(body: &str) -> bool {
    matches!(first_token(body), "start" | "st")
}

/// Body submits a guess (`submit` / `su`)
pub fn is_submit(body: &str) -> bool {
    matches!(first_token(body), "submit" | "su")
}

/// Argument of a keyword command: everything after the first space up to
/// the end of that line. Only the separating space is dropped.
///
/// Returns `None` when the argument is missing or empty.
pub fn argument(body: &str) -> Option<&str> {
    let (_, rest) = body.split_once(' ')?;
    let line = rest.split(is_line_terminator).next().unwrap_or_default();
    (!line.is_empty()).then_some(line)
}

/// Body ends in an ASCII or full-width question mark with at least one
/// character before it on the same line
pub fn is_question(body: &str) -> bool {
    let mut rev = body.chars().rev();
    matches!(rev.next(), Some('?' | '？')) && rev.next().is_some_and(|c| !is_line_terminator(c))
}
