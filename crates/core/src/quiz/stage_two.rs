use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{GameDefinition, VocabularyEntry};
use crate::quiz::tally::ErrorTally;
use crate::quiz::{AnswerOutcome, StageError};

/// Visual state of one image choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    None,
    Correct,
    Wrong,
}

/// One clickable image for the current stage-2 question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageChoice {
    entry: VocabularyEntry,
    mark: ChoiceMark,
    disabled: bool,
}

impl ImageChoice {
    #[must_use]
    pub fn entry(&self) -> &VocabularyEntry {
        &self.entry
    }

    #[must_use]
    pub fn word(&self) -> &str {
        self.entry.word()
    }

    #[must_use]
    pub fn mark(&self) -> ChoiceMark {
        self.mark
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Stage 2: a report description is shown and the player picks its image.
///
/// Unlike stage 1, the choices are only the game's own words (re-shuffled
/// per question), and a correct pick requires an explicit advance from
/// the player instead of a timed one. The asymmetry with stage 1 is
/// intentional: stage 1 needs the wider pool to size its choice set.
#[derive(Debug, Clone)]
pub struct StageTwo {
    questions: Vec<VocabularyEntry>,
    words: Vec<VocabularyEntry>,
    current: usize,
    choices: Vec<ImageChoice>,
    tally: ErrorTally,
    awaiting_advance: bool,
    last_outcome: Option<AnswerOutcome>,
}

impl StageTwo {
    #[must_use]
    pub fn new(game: &GameDefinition, rng: &mut impl Rng) -> Self {
        let mut questions = game.words().to_vec();
        questions.shuffle(rng);

        let mut stage = Self {
            questions,
            words: game.words().to_vec(),
            current: 0,
            choices: Vec::new(),
            tally: ErrorTally::for_game(game),
            awaiting_advance: false,
            last_outcome: None,
        };
        stage.deal_choices(rng);
        stage
    }

    fn deal_choices(&mut self, rng: &mut impl Rng) {
        if self.current >= self.questions.len() {
            self.choices.clear();
            return;
        }

        let mut entries = self.words.clone();
        entries.shuffle(rng);
        self.choices = entries
            .into_iter()
            .map(|entry| ImageChoice {
                entry,
                mark: ChoiceMark::None,
                disabled: false,
            })
            .collect();
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&VocabularyEntry> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn choices(&self) -> &[ImageChoice] {
        &self.choices
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

    /// Evaluates a clicked image against the current question.
    ///
    /// # Errors
    ///
    /// Returns `StageError::Completed` after the last question and
    /// `StageError::AwaitingAdvance` once the correct image was found.
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
                if choice.entry.word() == correct {
                    choice.mark = ChoiceMark::Correct;
                }
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
                choice.mark = ChoiceMark::Wrong;
                choice.disabled = true;
            }
            AnswerOutcome::Incorrect
        };
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    /// Moves to the next question after the player's explicit "next".
    ///
    /// # Errors
    ///
    /// Returns `StageError::Completed` after the last question and
    /// `StageError::NotAwaitingAdvance` when the correct image has not
    /// been found yet.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryId, GameId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(id: u64, word: &str) -> VocabularyEntry {
        VocabularyEntry::new(
            EntryId::new(id),
            word,
            format!("{word}.png"),
            format!("about {word}"),
        )
    }

    fn game(words: &[&str]) -> GameDefinition {
        let entries = words
            .iter()
            .enumerate()
            .map(|(id, word)| entry(id as u64, word))
            .collect();
        GameDefinition::new(GameId::new(1), "Case", entries).unwrap()
    }

    #[test]
    fn choices_are_exactly_the_game_words() {
        let game = game(&["fox", "owl", "bat"]);
        let mut rng = StdRng::seed_from_u64(1);
        let stage = StageTwo::new(&game, &mut rng);

        let mut words: Vec<_> = stage.choices().iter().map(ImageChoice::word).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["bat", "fox", "owl"]);
    }

    #[test]
    fn wrong_image_goes_inert_but_others_stay_live() {
        let game = game(&["fox", "owl", "bat"]);
        let mut rng = StdRng::seed_from_u64(2);
        let mut stage = StageTwo::new(&game, &mut rng);
        let correct = stage.current_question().unwrap().word().to_owned();
        let wrong = stage
            .choices()
            .iter()
            .find(|choice| choice.word() != correct)
            .unwrap()
            .word()
            .to_owned();

        assert_eq!(stage.answer(&wrong).unwrap(), AnswerOutcome::Incorrect);
        assert_eq!(stage.last_outcome(), Some(AnswerOutcome::Incorrect));
        assert_eq!(stage.tally().misses(&correct), 1);
        for choice in stage.choices() {
            if choice.word() == wrong {
                assert!(choice.is_disabled());
                assert_eq!(choice.mark(), ChoiceMark::Wrong);
            } else {
                assert!(!choice.is_disabled());
                assert_eq!(choice.mark(), ChoiceMark::None);
            }
        }
    }

    #[test]
    fn correct_image_marks_and_requires_explicit_next() {
        let game = game(&["fox", "owl"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut stage = StageTwo::new(&game, &mut rng);
        let correct = stage.current_question().unwrap().word().to_owned();

        assert_eq!(stage.answer(&correct).unwrap(), AnswerOutcome::Correct);
        assert!(stage.is_awaiting_advance());
        assert!(stage.choices().iter().all(ImageChoice::is_disabled));
        let marked: Vec<_> = stage
            .choices()
            .iter()
            .filter(|choice| choice.mark() == ChoiceMark::Correct)
            .map(ImageChoice::word)
            .collect();
        assert_eq!(marked, vec![correct.as_str()]);

        assert_eq!(stage.answer(&correct).unwrap_err(), StageError::AwaitingAdvance);
        stage.advance(&mut rng).unwrap();
        assert_eq!(stage.question_number(), 2);
        assert_eq!(stage.last_outcome(), None);
    }

    #[test]
    fn runs_one_pass_over_all_words() {
        let game = game(&["fox", "owl", "bat"]);
        let mut rng = StdRng::seed_from_u64(4);
        let mut stage = StageTwo::new(&game, &mut rng);

        let mut seen = Vec::new();
        while let Some(question) = stage.current_question().cloned() {
            seen.push(question.word().to_owned());
            stage.answer(question.word()).unwrap();
            stage.advance(&mut rng).unwrap();
        }
        seen.sort();
        assert_eq!(seen, vec!["bat", "fox", "owl"]);
        assert!(stage.is_complete());
        assert_eq!(stage.advance(&mut rng).unwrap_err(), StageError::Completed);
    }
}
