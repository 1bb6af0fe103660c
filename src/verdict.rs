//! Weighted verdict generation
//!
//! Verdicts are drawn from a uniform integer in `1..=10000` and mapped onto
//! fixed cutpoints. Questions land on "unrelated" rarely; yes/no are roughly
//! balanced otherwise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest value a draw can produce
pub const DRAW_MIN: u32 = 1;
/// Largest value a draw can produce
pub const DRAW_MAX: u32 = 10_000;

/// Draws below this are an incorrect submission
const BINARY_TRUE_FROM: u32 = 5_000;
/// Draws below this are "unrelated"
const TERNARY_NO_FROM: u32 = 1_250;
/// Draws below this (and at least `TERNARY_NO_FROM`) are "no"
const TERNARY_YES_FROM: u32 = 5_625;

/// Source of uniform draws in `DRAW_MIN..=DRAW_MAX`
pub trait RandomSource: Send {
    fn draw(&mut self) -> u32;
}

/// Production random source backed by a seedable PRNG
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[allow(dead_code)] // Reproducible runs when debugging verdict streams
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RngSource {
    fn draw(&mut self) -> u32 {
        self.rng.gen_range(DRAW_MIN..=DRAW_MAX)
    }
}

/// Three-way answer to a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Unrelated,
}

impl Answer {
    /// Reply line for a question verdict
    pub fn reply_text(self) -> &'static str {
        match self {
            Answer::Yes => "⭕ はい！",
            Answer::No => "❌ いいえ！",
            Answer::Unrelated => "😐 無関係です",
        }
    }
}

/// Map a draw onto a submission verdict
pub fn binary_from_draw(draw: u32) -> bool {
    draw >= BINARY_TRUE_FROM
}

/// Map a draw onto a question verdict
pub fn ternary_from_draw(draw: u32) -> Answer {
    if draw < TERNARY_NO_FROM {
        Answer::Unrelated
    } else if draw < TERNARY_YES_FROM {
        Answer::No
    } else {
        Answer::Yes
    }
}

/// Produces weighted verdicts from an injected random source
pub struct VerdictGenerator<R: RandomSource> {
    source: R,
}

impl<R: RandomSource> VerdictGenerator<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Correct/incorrect verdict for a submission
    pub fn binary_verdict(&mut self) -> bool {
        binary_from_draw(self.source.draw())
    }

    /// Yes/no/unrelated verdict for a question
    pub fn ternary_verdict(&mut self) -> Answer {
        ternary_from_draw(self.source.draw())
    }
}
