use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use casefile_core::model::{GameDefinition, VocabularyEntry};
use casefile_core::quiz::{
    AnswerOutcome, GameSummary, StageOne, StageTwo, STAGE_ONE_ADVANCE_DELAY_MS,
};

use crate::audio::{FeedbackAudio, FeedbackCue};
use crate::error::QuizError;

/// How long the UI should wait before advancing a correct stage-1 answer.
pub const STAGE_ONE_ADVANCE_DELAY: std::time::Duration =
    std::time::Duration::from_millis(STAGE_ONE_ADVANCE_DELAY_MS);

/// Which screen of the run the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    StageOne,
    Intermission,
    StageTwo,
    Summary,
}

enum Phase {
    StageOne(StageOne),
    Intermission {
        stage_one_tally: casefile_core::quiz::ErrorTally,
    },
    StageTwo {
        stage: StageTwo,
        stage_one_tally: casefile_core::quiz::ErrorTally,
    },
    Summary(GameSummary),
}

/// Drives one full run of a case file: stage 1, the intermission, stage 2,
/// and the debriefing, playing the feedback cue after every answer.
///
/// The flow owns its rng so the stage machines stay deterministic under a
/// seeded one in tests and properly random in the app.
pub struct QuizFlow {
    game: GameDefinition,
    pool: Vec<VocabularyEntry>,
    rng: StdRng,
    audio: Arc<dyn FeedbackAudio>,
    phase: Phase,
}

impl QuizFlow {
    #[must_use]
    pub fn new(
        game: GameDefinition,
        pool: Vec<VocabularyEntry>,
        audio: Arc<dyn FeedbackAudio>,
    ) -> Self {
        Self::with_rng(game, pool, audio, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_rng(
        game: GameDefinition,
        pool: Vec<VocabularyEntry>,
        audio: Arc<dyn FeedbackAudio>,
        mut rng: StdRng,
    ) -> Self {
        let stage = StageOne::new(&game, &pool, &mut rng);
        Self {
            game,
            pool,
            rng,
            audio,
            phase: Phase::StageOne(stage),
        }
    }

    #[must_use]
    pub fn game(&self) -> &GameDefinition {
        &self.game
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match &self.phase {
            Phase::StageOne(_) => QuizPhase::StageOne,
            Phase::Intermission { .. } => QuizPhase::Intermission,
            Phase::StageTwo { .. } => QuizPhase::StageTwo,
            Phase::Summary(_) => QuizPhase::Summary,
        }
    }

    #[must_use]
    pub fn stage_one(&self) -> Option<&StageOne> {
        match &self.phase {
            Phase::StageOne(stage) => Some(stage),
            _ => None,
        }
    }

    #[must_use]
    pub fn stage_two(&self) -> Option<&StageTwo> {
        match &self.phase {
            Phase::StageTwo { stage, .. } => Some(stage),
            _ => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        match &self.phase {
            Phase::Summary(summary) => Some(summary),
            _ => None,
        }
    }

    /// Evaluates a stage-1 word pick and plays the matching cue.
    ///
    /// On `Correct` the caller should schedule [`advance_stage_one`] after
    /// [`STAGE_ONE_ADVANCE_DELAY`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` outside stage 1 and
    /// `QuizError::Stage` for out-of-order input.
    ///
    /// [`advance_stage_one`]: QuizFlow::advance_stage_one
    pub fn answer_stage_one(&mut self, word: &str) -> Result<AnswerOutcome, QuizError> {
        let Phase::StageOne(stage) = &mut self.phase else {
            return Err(QuizError::WrongPhase);
        };
        let outcome = stage.answer(word)?;
        self.audio.play(cue_for(outcome));
        Ok(outcome)
    }

    /// Moves stage 1 past a correct answer, entering the intermission
    /// after the last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` outside stage 1 and
    /// `QuizError::Stage` when no advance is pending.
    pub fn advance_stage_one(&mut self) -> Result<(), QuizError> {
        let Phase::StageOne(stage) = &mut self.phase else {
            return Err(QuizError::WrongPhase);
        };
        stage.advance(&mut self.rng)?;
        if stage.is_complete() {
            let done = std::mem::replace(
                &mut self.phase,
                Phase::Intermission {
                    stage_one_tally: casefile_core::quiz::ErrorTally::for_game(&self.game),
                },
            );
            if let Phase::StageOne(stage) = done {
                self.phase = Phase::Intermission {
                    stage_one_tally: stage.into_tally(),
                };
            }
        }
        Ok(())
    }

    /// Leaves the intermission and deals the first stage-2 question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` outside the intermission.
    pub fn begin_stage_two(&mut self) -> Result<(), QuizError> {
        if !matches!(self.phase, Phase::Intermission { .. }) {
            return Err(QuizError::WrongPhase);
        }
        let held = std::mem::replace(
            &mut self.phase,
            Phase::Intermission {
                stage_one_tally: casefile_core::quiz::ErrorTally::for_game(&self.game),
            },
        );
        if let Phase::Intermission { stage_one_tally } = held {
            let stage = StageTwo::new(&self.game, &mut self.rng);
            self.phase = Phase::StageTwo {
                stage,
                stage_one_tally,
            };
        }
        Ok(())
    }

    /// Evaluates a stage-2 image pick and plays the matching cue.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` outside stage 2 and
    /// `QuizError::Stage` for out-of-order input.
    pub fn answer_stage_two(&mut self, word: &str) -> Result<AnswerOutcome, QuizError> {
        let Phase::StageTwo { stage, .. } = &mut self.phase else {
            return Err(QuizError::WrongPhase);
        };
        let outcome = stage.answer(word)?;
        self.audio.play(cue_for(outcome));
        Ok(outcome)
    }

    /// Moves stage 2 past a found image, building the debriefing after
    /// the last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` outside stage 2 and
    /// `QuizError::Stage` when the image has not been found yet.
    pub fn advance_stage_two(&mut self) -> Result<(), QuizError> {
        let Phase::StageTwo { stage, .. } = &mut self.phase else {
            return Err(QuizError::WrongPhase);
        };
        stage.advance(&mut self.rng)?;
        if stage.is_complete() {
            let done = std::mem::replace(
                &mut self.phase,
                Phase::Intermission {
                    stage_one_tally: casefile_core::quiz::ErrorTally::for_game(&self.game),
                },
            );
            if let Phase::StageTwo {
                stage,
                stage_one_tally,
            } = done
            {
                let summary =
                    GameSummary::new(self.game.clone(), &stage_one_tally, &stage.into_tally());
                self.phase = Phase::Summary(summary);
            }
        }
        Ok(())
    }

    /// Restarts the flow over the missed clues only.
    ///
    /// The review game exists only in memory; it is never persisted.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` outside the debriefing or when the
    /// run was clean and there is nothing to review.
    pub fn start_review(&mut self) -> Result<(), QuizError> {
        let Phase::Summary(summary) = &self.phase else {
            return Err(QuizError::WrongPhase);
        };
        let review = summary.review_game().ok_or(QuizError::WrongPhase)?;
        self.game = review;
        let stage = StageOne::new(&self.game, &self.pool, &mut self.rng);
        self.phase = Phase::StageOne(stage);
        Ok(())
    }
}

fn cue_for(outcome: AnswerOutcome) -> FeedbackCue {
    match outcome {
        AnswerOutcome::Correct => FeedbackCue::Correct,
        AnswerOutcome::Incorrect => FeedbackCue::Incorrect,
    }
}
