//! Events that drive the quiz round

use super::state::MessageId;

/// A mention addressed to the bot, already unwrapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Account handle of the sender, without the leading `@`
    pub sender: String,
    /// Command text with markup and the bot's mention prefix removed
    pub body: String,
    /// Post that carried the mention
    pub message_id: MessageId,
}

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// A participant addressed the bot
    Mention(Mention),
    /// The announcement for round `round` has been posted
    AnnouncementPosted { round: u64, message_id: MessageId },
}
