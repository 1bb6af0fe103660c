//! Property-based tests for the quiz state machine
//!
//! These tests verify key invariants hold across arbitrary command streams.

use super::*;
use crate::verdict::{binary_from_draw, ternary_from_draw, Answer, RngSource, VerdictGenerator};
use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn mention(sender: String, body: String, id: usize) -> Event {
    Event::Mention(Mention {
        sender,
        body,
        message_id: MessageId::new(format!("m{id}")),
    })
}

/// Round invariants that must hold after every transition
fn assert_shape(round: &Round) {
    if round.is_active() {
        assert!(round.title().is_some_and(|t| !t.is_empty()));
        assert!(round.host_handle().is_some());
        assert!(round.started_at().is_some());
    } else {
        assert!(round.is_idle_shape(), "idle round not in idle shape: {round:?}");
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_sender() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Zぁ-ん ]{0,12}"
}

/// Bodies that never start a round
fn arb_non_start_body() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_text().prop_map(|t| format!("submit {t}")),
        arb_text().prop_map(|t| format!("su {t}")),
        arb_text().prop_map(|t| format!("x{t}？")),
        arb_text().prop_map(|t| format!("x{t}?")),
        arb_text().prop_map(|t| format!("su {t}？")),
        arb_text().prop_map(|t| format!("x{t}")),
    ]
}

fn arb_body() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => arb_text().prop_map(|t| format!("start {t}")),
        1 => arb_text().prop_map(|t| format!("st {t}")),
        6 => arb_non_start_body(),
    ]
}

fn arb_event_stream() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((arb_sender(), arb_body()), 1..40)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn idle_round_rejects_without_mutation(
        sender in arb_sender(),
        body in arb_non_start_body(),
        seed in any::<u64>(),
    ) {
        let mut round = Round::idle();
        let mut verdicts = VerdictGenerator::new(RngSource::seeded(seed));

        let result = transition(&mut round, mention(sender.clone(), body, 1), &mut verdicts, t0());

        prop_assert!(round.is_idle_shape());
        prop_assert!(result.effects.len() <= 1);
        for effect in &result.effects {
            let text = effect.text();
            prop_assert!(
                text == format!("@{sender} startしてから回答してくださいね")
                    || text == format!("@{sender} startしてから質問してくださいね"),
                "unexpected reply: {}", text
            );
            prop_assert_eq!(
                effect,
                &Effect::reply(text.to_string(), Some(MessageId::new("m1")))
            );
        }
    }

    #[test]
    fn round_shape_holds_across_streams(
        stream in arb_event_stream(),
        seed in any::<u64>(),
    ) {
        let mut round = Round::idle();
        let mut verdicts = VerdictGenerator::new(RngSource::seeded(seed));

        for (i, (sender, body)) in stream.into_iter().enumerate() {
            let before = round.clone();
            let started = super::command::is_start(&body) && super::command::argument(&body).is_some();
            let now = t0() + Duration::seconds(i64::try_from(i).unwrap());

            let result = transition(&mut round, mention(sender, body, i), &mut verdicts, now);
            assert_shape(&round);

            let announced = result
                .effects
                .iter()
                .filter(|e| matches!(e, Effect::Announce { .. }))
                .count();
            prop_assert_eq!(announced, usize::from(started));

            if !started && round.is_active() {
                // Same round: counters only grow, each by at most one
                prop_assert_eq!(round.sequence(), before.sequence());
                prop_assert!(round.question_count() >= before.question_count());
                prop_assert!(round.submit_count() >= before.submit_count());
                prop_assert!(round.question_count() <= before.question_count() + 1);
                prop_assert!(round.submit_count() <= before.submit_count() + 1);
            }

            if before.is_active() && !round.is_active() {
                // Only a correct submission ends a round
                prop_assert!(result.effects.iter().any(|e| e.text().contains("⭕ 正解！")));
            }
        }
    }

    #[test]
    fn submissions_need_two_questions(
        questions in 0u32..2,
        guess in "[a-z]{1,6}",
        seed in any::<u64>(),
    ) {
        let mut round = Round::idle();
        round.start("topic", "host", t0());
        for _ in 0..questions {
            round.increment_question_count();
        }
        let mut verdicts = VerdictGenerator::new(RngSource::seeded(seed));

        let result = transition(
            &mut round,
            mention("p".to_string(), format!("submit {guess}"), 1),
            &mut verdicts,
            t0(),
        );

        prop_assert_eq!(round.submit_count(), 0);
        prop_assert_eq!(result.effects.len(), 1);
        prop_assert_eq!(result.effects[0].text(), "@p 何回か質問してから回答してくださいね");
    }

    #[test]
    fn ternary_partition(draw in 1u32..=10_000) {
        let expected = if draw < 1_250 {
            Answer::Unrelated
        } else if draw < 5_625 {
            Answer::No
        } else {
            Answer::Yes
        };
        prop_assert_eq!(ternary_from_draw(draw), expected);
    }

    #[test]
    fn binary_partition(draw in 1u32..=10_000) {
        prop_assert_eq!(binary_from_draw(draw), draw >= 5_000);
    }
}
