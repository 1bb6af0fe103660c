//! Unwrapping of mention posts into command text

use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("static regex"))
}

/// Remove HTML tags, keeping text content as-is
pub fn strip_tags(html: &str) -> String {
    tag_pattern().replace_all(html, "").into_owned()
}

/// Extract the command from a mention's HTML content.
///
/// The visible text must begin with `@{bot_acct} ` (one space); anything
/// else is ignored. Returns the text after that prefix.
pub fn extract_command(html: &str, bot_acct: &str) -> Option<String> {
    let content = strip_tags(html);
    let content = content.trim();
    let prefix = format!("@{bot_acct} ");

    match content.strip_prefix(prefix.as_str()) {
        Some(command) => Some(command.to_string()),
        None => {
            tracing::info!(content = %content, "Ignoring mention without leading bot handle");
            None
        }
    }
}
