//! Runtime for the quiz round
//!
//! A single task owns the round; mentions reach it over a channel, so the
//! round sees one writer at a time.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::QuizRuntime;
pub use traits::*;

use crate::state_machine::{Event, Mention, Round};
use crate::verdict::RandomSource;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Handle to the running quiz runtime
pub struct QuizHandle {
    event_tx: mpsc::Sender<Event>,
    task: JoinHandle<Round>,
}

impl QuizHandle {
    /// Queue a mention for routing
    pub async fn send_mention(&self, mention: Mention) -> Result<(), String> {
        self.event_tx
            .send(Event::Mention(mention))
            .await
            .map_err(|e| format!("Failed to send event: {e}"))
    }

    /// Stop accepting mentions and wait for the runtime to finish
    pub async fn shutdown(self) -> Result<Round, String> {
        drop(self.event_tx);
        self.task.await.map_err(|e| format!("Quiz runtime task failed: {e}"))
    }
}

/// Start a runtime in the background
pub fn spawn_runtime<P, R>(poster: P, source: R) -> QuizHandle
where
    P: ReplyPoster + 'static,
    R: RandomSource + 'static,
{
    let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let runtime = QuizRuntime::new(poster, source, event_rx, event_tx.downgrade());
    let task = tokio::spawn(runtime.run());
    QuizHandle { event_tx, task }
}
