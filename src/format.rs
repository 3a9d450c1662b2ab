//! Contextual decoration for rendered link targets.
//!
//! Link and inline-card nodes carry bare URLs or issue keys; these helpers
//! prefix them with a small contextual emoji so they stand out in terminal
//! output.

use regex::Regex;
use std::sync::LazyLock;

/// Ticket keys look like `PROJECT-123`. Compiled once using LazyLock.
static TICKET_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]+-\d+").unwrap());

/// Content kinds with a decoration emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// A web URL
    Url,
    /// An issue-tracker ticket key
    Ticket,
}

impl ContentKind {
    fn emoji(self) -> &'static str {
        match self {
            ContentKind::Url => "🔗",
            ContentKind::Ticket => "🎫",
        }
    }
}

/// Prefixes `text` with the emoji for `kind`.
pub fn decorate(text: &str, kind: ContentKind) -> String {
    format!("{} {}", kind.emoji(), text)
}

/// Detects the content kind of `text` and decorates it, or returns it
/// unchanged when nothing matches.
pub fn auto_decorate(text: &str) -> String {
    if text.starts_with("http://") || text.starts_with("https://") {
        return decorate(text, ContentKind::Url);
    }
    if TICKET_KEY.is_match(text) {
        return decorate(text, ContentKind::Ticket);
    }
    text.to_string()
}
