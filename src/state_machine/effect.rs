//! Effects produced by state transitions

use super::state::MessageId;

/// Effects to be executed after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post a round announcement; its id becomes the round's anchor
    Announce { round: u64, text: String },

    /// Post a reply, optionally threaded under another post
    PostReply {
        text: String,
        in_reply_to: Option<MessageId>,
    },
}

impl Effect {
    pub fn reply(text: impl Into<String>, in_reply_to: Option<MessageId>) -> Self {
        Effect::PostReply {
            text: text.into(),
            in_reply_to,
        }
    }

    /// Text that will be posted
    #[allow(dead_code)] // API completeness
    pub fn text(&self) -> &str {
        match self {
            Effect::Announce { text, .. } | Effect::PostReply { text, .. } => text,
        }
    }
}
