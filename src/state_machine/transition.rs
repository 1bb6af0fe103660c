//! Command routing: the quiz transition function
//!
//! Given the current round, an event, a verdict source and the current time,
//! mutate the round through its narrow operation set and return the posts to
//! make. No I/O happens here.

use super::command;
use super::event::Mention;
use super::state::{MessageId, Round};
use super::{Effect, Event};
use crate::elapsed;
use crate::verdict::{RandomSource, VerdictGenerator};
use chrono::{DateTime, Utc};
use std::ops::ControlFlow;

/// Questions required before a guess is accepted
const MIN_QUESTIONS_BEFORE_SUBMIT: u32 = 2;

/// Result of a transition
#[derive(Debug, Default)]
pub struct TransitionResult {
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}

/// Apply one event to the round
pub fn transition<R: RandomSource>(
    round: &mut Round,
    event: Event,
    verdicts: &mut VerdictGenerator<R>,
    now: DateTime<Utc>,
) -> TransitionResult {
    match event {
        Event::Mention(mention) => route_mention(round, &mention, verdicts, now),

        Event::AnnouncementPosted { round: seq, message_id }
            if round.is_active() && round.sequence() == seq =>
        {
            round.set_anchor(message_id);
            TransitionResult::new()
        }

        Event::AnnouncementPosted { round: seq, message_id } => {
            tracing::debug!(
                round = seq,
                current = round.sequence(),
                message_id = %message_id,
                "Discarding announcement for a round that is no longer current"
            );
            TransitionResult::new()
        }
    }
}

/// Run each command check in order. A check that breaks stops the rest.
fn route_mention<R: RandomSource>(
    round: &mut Round,
    mention: &Mention,
    verdicts: &mut VerdictGenerator<R>,
    now: DateTime<Utc>,
) -> TransitionResult {
    let mut result = TransitionResult::new();
    let body = mention.body.as_str();

    if command::is_start(body) && handle_start(round, mention, now, &mut result).is_break() {
        return result;
    }

    if command::is_submit(body)
        && handle_submit(round, mention, verdicts, now, &mut result).is_break()
    {
        return result;
    }

    if command::is_question(body) {
        handle_question(round, mention, verdicts, &mut result);
    }

    result
}

fn handle_start(
    round: &mut Round,
    mention: &Mention,
    now: DateTime<Utc>,
    result: &mut TransitionResult,
) -> ControlFlow<()> {
    let Some(title) = command::argument(&mention.body) else {
        tracing::error!(body = %mention.body, "start command without a title");
        return ControlFlow::Break(());
    };

    let seq = round.start(title, mention.sender.as_str(), now);
    tracing::info!(round = seq, host = %mention.sender, "Round started");
    result.push(Effect::Announce {
        round: seq,
        text: format!("問題: {title}\n出題者: @{}", mention.sender),
    });
    ControlFlow::Continue(())
}

fn handle_submit<R: RandomSource>(
    round: &mut Round,
    mention: &Mention,
    verdicts: &mut VerdictGenerator<R>,
    now: DateTime<Utc>,
    result: &mut TransitionResult,
) -> ControlFlow<()> {
    let sender = &mention.sender;
    let Some(guess) = command::argument(&mention.body) else {
        tracing::error!(body = %mention.body, "submit command without a guess");
        return ControlFlow::Break(());
    };

    if !round.is_active() {
        result.push(reject(
            format!("@{sender} startしてから回答してくださいね"),
            &mention.message_id,
        ));
        return ControlFlow::Break(());
    }

    if round.question_count() < MIN_QUESTIONS_BEFORE_SUBMIT {
        result.push(reject(
            format!("@{sender} 何回か質問してから回答してくださいね"),
            &mention.message_id,
        ));
        return ControlFlow::Break(());
    }

    round.increment_submit_count();
    let n = round.submit_count();
    let anchor = round.anchor_message_id().cloned();

    let text = if verdicts.binary_verdict() {
        let time = round
            .started_at()
            .map(|started| elapsed::humanize(started, now))
            .unwrap_or_default();
        let text = format!(
            "A.{n}: {guess} @{sender}\n⭕ 正解！\n❓ 質問回数: {}回 ❗ 回答回数: {n}回 ⏱️ 時間:{time}",
            round.question_count()
        );
        tracing::info!(round = round.sequence(), submits = n, "Round solved");
        round.reset();
        text
    } else {
        format!("A.{n}: {guess} @{sender}\n❌ 不正解！")
    };

    result.push(Effect::reply(text, anchor));
    ControlFlow::Continue(())
}

fn handle_question<R: RandomSource>(
    round: &mut Round,
    mention: &Mention,
    verdicts: &mut VerdictGenerator<R>,
    result: &mut TransitionResult,
) {
    let sender = &mention.sender;
    if !round.is_active() {
        result.push(reject(
            format!("@{sender} startしてから質問してくださいね"),
            &mention.message_id,
        ));
        return;
    }

    round.increment_question_count();
    let answer = verdicts.ternary_verdict();
    result.push(Effect::reply(
        format!(
            "Q.{}: {} @{sender}\n{}",
            round.question_count(),
            mention.body,
            answer.reply_text()
        ),
        round.anchor_message_id().cloned(),
    ));
}

/// Rejections thread under the message that triggered them
fn reject(text: String, trigger: &MessageId) -> Effect {
    Effect::reply(text, Some(trigger.clone()))
}
