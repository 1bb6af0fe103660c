//! Mock implementations for testing
//!
//! These mocks enable runtime and routing tests without real I/O.

use super::traits::{PostedReply, ReplyPoster};
use crate::state_machine::MessageId;
use crate::verdict::RandomSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

// ============================================================================
// Scripted random source
// ============================================================================

/// Random source that replays a fixed sequence of draws
pub struct ScriptedSource {
    draws: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self) -> u32 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}

// ============================================================================
// Mock reply poster
// ============================================================================

/// A post recorded by `MockPoster`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    pub id: MessageId,
    pub text: String,
    pub in_reply_to: Option<MessageId>,
}

/// Poster that records successful posts and hands out `post-N` ids
#[derive(Default)]
pub struct MockPoster {
    posts: Mutex<Vec<RecordedPost>>,
    fail_next: AtomicBool,
}

impl MockPoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next post fail
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Posts recorded so far
    pub fn posts(&self) -> Vec<RecordedPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplyPoster for MockPoster {
    async fn post(&self, text: &str, in_reply_to: Option<&MessageId>) -> Result<PostedReply, String> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err("mock post failure".to_string());
        }

        let mut posts = self.posts.lock().unwrap();
        let id = MessageId::new(format!("post-{}", posts.len() + 1));
        posts.push(RecordedPost {
            id: id.clone(),
            text: text.to_string(),
            in_reply_to: in_reply_to.cloned(),
        });
        Ok(PostedReply {
            url: Some(format!("https://example.test/@bot/{id}")),
            id,
        })
    }
}
