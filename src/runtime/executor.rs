//! Quiz runtime executor

use super::traits::ReplyPoster;
use crate::state_machine::{transition, Effect, Event, Round};
use crate::verdict::{RandomSource, VerdictGenerator};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Owns the round and applies events to it one at a time.
///
/// Posting is fire-and-forget: the posts produced by one event are issued in
/// order by a spawned task, but tasks for different events may complete in
/// any order.
pub struct QuizRuntime<P, R>
where
    P: ReplyPoster + 'static,
    R: RandomSource,
{
    round: Round,
    verdicts: VerdictGenerator<R>,
    poster: Arc<P>,
    event_rx: mpsc::Receiver<Event>,
    /// Weak so the loop ends once every external sender is gone
    feedback_tx: mpsc::WeakSender<Event>,
}

impl<P, R> QuizRuntime<P, R>
where
    P: ReplyPoster + 'static,
    R: RandomSource,
{
    pub fn new(
        poster: P,
        source: R,
        event_rx: mpsc::Receiver<Event>,
        feedback_tx: mpsc::WeakSender<Event>,
    ) -> Self {
        Self {
            round: Round::idle(),
            verdicts: VerdictGenerator::new(source),
            poster: Arc::new(poster),
            event_rx,
            feedback_tx,
        }
    }

    #[allow(dead_code)] // Inspection from tests and callers holding the runtime
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Process events until all senders are dropped; returns the final round
    pub async fn run(mut self) -> Round {
        tracing::info!("Starting quiz runtime");

        while let Some(event) = self.event_rx.recv().await {
            self.handle_event(event);
        }

        tracing::info!("Quiz runtime stopped");
        self.round
    }

    /// Apply one event and spawn its posts. Returns the posting task, if any.
    pub fn handle_event(&mut self, event: Event) -> Option<JoinHandle<()>> {
        let result = transition(&mut self.round, event, &mut self.verdicts, Utc::now());

        tracing::debug!(
            active = self.round.is_active(),
            questions = self.round.question_count(),
            submits = self.round.submit_count(),
            effects = result.effects.len(),
            "Event processed"
        );

        if result.effects.is_empty() {
            return None;
        }

        let poster = Arc::clone(&self.poster);
        let feedback_tx = self.feedback_tx.clone();
        Some(tokio::spawn(async move {
            for effect in result.effects {
                execute_effect(&*poster, &feedback_tx, effect).await;
            }
        }))
    }

    /// Handle events already queued without waiting for new ones
    #[cfg(test)]
    pub fn drain_pending(&mut self) -> Vec<JoinHandle<()>> {
        let mut tasks = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            tasks.extend(self.handle_event(event));
        }
        tasks
    }
}

async fn execute_effect<P: ReplyPoster>(poster: &P, feedback_tx: &mpsc::WeakSender<Event>, effect: Effect) {
    match effect {
        Effect::Announce { round, text } => match poster.post(&text, None).await {
            Ok(posted) => {
                tracing::info!(text = %text, url = ?posted.url, "sent");
                let event = Event::AnnouncementPosted {
                    round,
                    message_id: posted.id,
                };
                let Some(tx) = feedback_tx.upgrade() else {
                    tracing::debug!(round, "Runtime gone, dropping announcement id");
                    return;
                };
                if tx.send(event).await.is_err() {
                    tracing::debug!(round, "Runtime gone, dropping announcement id");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, round, "Failed to post round announcement");
            }
        },

        Effect::PostReply { text, in_reply_to } => {
            match poster.post(&text, in_reply_to.as_ref()).await {
                Ok(posted) => tracing::info!(text = %text, url = ?posted.url, "sent"),
                Err(e) => tracing::warn!(error = %e, "Failed to post reply"),
            }
        }
    }
}
