//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the runtime with mock implementations.

use crate::state_machine::MessageId;
use async_trait::async_trait;
use std::sync::Arc;

/// A post that was accepted by the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedReply {
    pub id: MessageId,
    pub url: Option<String>,
}

/// Publishes replies on the feed
#[async_trait]
pub trait ReplyPoster: Send + Sync {
    /// Post `text`, threaded under `in_reply_to` when given
    async fn post(&self, text: &str, in_reply_to: Option<&MessageId>) -> Result<PostedReply, String>;
}

#[async_trait]
impl<T: ReplyPoster + ?Sized> ReplyPoster for Arc<T> {
    async fn post(&self, text: &str, in_reply_to: Option<&MessageId>) -> Result<PostedReply, String> {
        (**self).post(text, in_reply_to).await
    }
}
