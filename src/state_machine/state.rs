//! Quiz round state

use chrono::{DateTime, Utc};

/// Opaque identifier of a post on the feed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single process-wide quiz round.
///
/// Fields are private: every mutation goes through `reset`, `start`,
/// `set_anchor` and the two counters. When idle, title, host and start time
/// are unset and both counters are zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Round {
    active: bool,
    title: Option<String>,
    host_handle: Option<String>,
    question_count: u32,
    submit_count: u32,
    started_at: Option<DateTime<Utc>>,
    anchor_message_id: Option<MessageId>,
    /// Bumped on every `start`; ties a posted announcement to its round
    sequence: u64,
}

impl Round {
    /// A round in idle shape
    pub fn idle() -> Self {
        Self::default()
    }

    /// Force idle shape. The round sequence survives so late announcements
    /// for the finished round are still recognised as stale.
    pub fn reset(&mut self) {
        *self = Self {
            sequence: self.sequence,
            ..Self::default()
        };
    }

    /// Begin a new round, discarding whatever round was in progress.
    ///
    /// Returns the sequence number of the new round.
    pub fn start(&mut self, title: impl Into<String>, host_handle: impl Into<String>, now: DateTime<Utc>) -> u64 {
        let title = title.into();
        debug_assert!(!title.is_empty(), "round title must be non-empty");
        *self = Self {
            active: true,
            title: Some(title),
            host_handle: Some(host_handle.into()),
            question_count: 0,
            submit_count: 0,
            started_at: Some(now),
            anchor_message_id: None,
            sequence: self.sequence + 1,
        };
        self.sequence
    }

    /// Record the announcement post that replies are threaded under
    pub fn set_anchor(&mut self, id: MessageId) {
        self.anchor_message_id = Some(id);
    }

    /// Caller must check `is_active` first
    pub fn increment_question_count(&mut self) {
        debug_assert!(self.active);
        self.question_count += 1;
    }

    /// Caller must check `is_active` first
    pub fn increment_submit_count(&mut self) {
        debug_assert!(self.active);
        self.submit_count += 1;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    #[allow(dead_code)] // API completeness
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[allow(dead_code)] // API completeness
    pub fn host_handle(&self) -> Option<&str> {
        self.host_handle.as_deref()
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn anchor_message_id(&self) -> Option<&MessageId> {
        self.anchor_message_id.as_ref()
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// True when the round is in the exact idle shape
    pub fn is_idle_shape(&self) -> bool {
        !self.active
            && self.title.is_none()
            && self.host_handle.is_none()
            && self.started_at.is_none()
            && self.anchor_message_id.is_none()
            && self.question_count == 0
            && self.submit_count == 0
    }
}
