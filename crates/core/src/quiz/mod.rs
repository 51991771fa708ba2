//! The two quiz stages and their bookkeeping.
//!
//! Both stages are pure state machines: they never sleep, never touch the
//! DOM, and take their randomness as an injected `Rng`. Side effects
//! (audio cues, the stage-1 auto-advance timer) belong to the services
//! layer, which reacts to the outcomes reported here.

mod stage_one;
mod stage_two;
mod summary;
mod tally;

use thiserror::Error;

pub use stage_one::{StageOne, WordChoice};
pub use stage_two::{ChoiceMark, ImageChoice, StageTwo};
pub use summary::{GameSummary, SummaryRow};
pub use tally::ErrorTally;

/// How long a correct stage-1 answer stays on screen before the engine
/// expects the caller to advance. The delay is data, not behavior: the
/// stage itself never waits.
pub const STAGE_ONE_ADVANCE_DELAY_MS: u64 = 1200;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StageError {
    #[error("stage is already complete")]
    Completed,

    #[error("input is frozen until the pending advance")]
    AwaitingAdvance,

    #[error("advance requested before a correct answer")]
    NotAwaitingAdvance,
}

/// Result of evaluating one selection against the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer: input freezes and an advance is expected next.
    Correct,
    /// Wrong answer: the tally bumped, the chosen option went inert,
    /// remaining options stay live.
    Incorrect,
}
