use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{GameDefinition, VocabularyEntry};
use crate::quiz::tally::ErrorTally;
use crate::quiz::{AnswerOutcome, StageError};

/// One selectable word button for the current stage-1 question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordChoice {
    entry: VocabularyEntry,
    disabled: bool,
}

impl WordChoice {
    #[must_use]
    pub fn entry(&self) -> &VocabularyEntry {
        &self.entry
    }

    #[must_use]
    pub fn word(&self) -> &str {
        self.entry.word()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Stage 1: an evidence image is shown and the player picks its word.
///
/// Questions are one shuffled pass over the game's clues. The choice-set
/// size is drawn once per round from `[n + 1, min(n + 4, pool)]`, and the
/// distractors for every question come from the whole vocabulary pool,
/// not just the game. A correct pick freezes input until [`advance`] is
/// called (the UI schedules that after the feedback delay); a wrong pick
/// disables only the chosen word so the player can keep trying.
///
/// [`advance`]: StageOne::advance
#[derive(Debug, Clone)]
pub struct StageOne {
    questions: Vec<VocabularyEntry>,
    pool: Vec<VocabularyEntry>,
    current: usize,
    choice_count: usize,
    choices: Vec<WordChoice>,
    tally: ErrorTally,
    awaiting_advance: bool,
    last_outcome: Option<AnswerOutcome>,
}

impl StageOne {
    #[must_use]
    pub fn new(game: &GameDefinition, pool: &[VocabularyEntry], rng: &mut impl Rng) -> Self {
        let mut questions = game.words().to_vec();
        questions.shuffle(rng);

        let n = game.word_count();
        let lo = n + 1;
        // When the pool barely covers the game the upper bound is clamped
        // so the range never inverts; drawing then just yields fewer
        // distractors than asked for.
        let hi = (n + 4).min(pool.len()).max(lo);
        let choice_count = rng.random_range(lo..=hi);

        let mut stage = Self {
            questions,
            pool: pool.to_vec(),
            current: 0,
            choice_count,
            choices: Vec::new(),
            tally: ErrorTally::for_game(game),
            awaiting_advance: false,
            last_outcome: None,
        };
        stage.deal_choices(rng);
        stage
    }

    /// Builds the choice set for the current question: the correct entry
    /// plus distinct distractors drawn without replacement from the pool,
    /// shuffled together.
    fn deal_choices(&mut self, rng: &mut impl Rng) {
        let Some(question) = self.questions.get(self.current) else {
            self.choices.clear();
            return;
        };

        let mut entries: Vec<VocabularyEntry> = self
            .pool
            .iter()
            .filter(|entry| entry.word() != question.word())
            .cloned()
            .collect();
        entries.shuffle(rng);
        entries.truncate(self.choice_count - 1);
        entries.push(question.clone());
        entries.shuffle(rng);

        self.choices = entries
            .into_iter()
            .map(|entry| WordChoice {
                entry,
                disabled: false,
            })
            .collect();
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&VocabularyEntry> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn choices(&self) -> &[WordChoice] {
        &self.choices
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choice_count
    }

    /// 1-based index of the current question, for the progress line.
    #[must_use]
    pub fn question_number(&self) -> usize {
        (self.current + 1).min(self.questions.len())
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn is_awaiting_advance(&self) -> bool {
        self.awaiting_advance
    }

    /// Outcome of the most recent pick on the current question, for the
    /// feedback line. Cleared when the stage advances.
    #[must_use]
    pub fn last_outcome(&self) -> Option<AnswerOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn tally(&self) -> &ErrorTally {
        &self.tally
    }

    #[must_use]
    pub fn into_tally(self) -> ErrorTally {
        self.tally
    }

    /// Evaluates a selected word against the current question.
    ///
    /// # Errors
    ///
    /// Returns `StageError::Completed` after the last question and
    /// `StageError::AwaitingAdvance` while input is frozen.
    pub fn answer(&mut self, word: &str) -> Result<AnswerOutcome, StageError> {
        if self.is_complete() {
            return Err(StageError::Completed);
        }
        if self.awaiting_advance {
            return Err(StageError::AwaitingAdvance);
        }

        let correct = self.questions[self.current].word().to_owned();
        let outcome = if word == correct {
            for choice in &mut self.choices {
                choice.disabled = true;
            }
            self.awaiting_advance = true;
            AnswerOutcome::Correct
        } else {
            self.tally.record_miss(&correct);
            if let Some(choice) = self
                .choices
                .iter_mut()
                .find(|choice| choice.entry.word() == word)
            {
                choice.disabled = true;
            }
            AnswerOutcome::Incorrect
        };
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    /// Moves to the next question (or completion) after a correct answer.
    ///
    /// # Errors
    ///
    /// Returns `StageError::Completed` after the last question and
    /// `StageError::NotAwaitingAdvance` when no correct answer is pending.
    pub fn advance(&mut self, rng: &mut impl Rng) -> Result<(), StageError> {
        if self.is_complete() {
            return Err(StageError::Completed);
        }
        if !self.awaiting_advance {
            return Err(StageError::NotAwaitingAdvance);
        }

        self.current += 1;
        self.awaiting_advance = false;
        self.last_outcome = None;
        self.deal_choices(rng);
        Ok(())
    }
}
