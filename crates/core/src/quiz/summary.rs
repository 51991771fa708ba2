use crate::model::{GameDefinition, VocabularyEntry};
use crate::quiz::tally::ErrorTally;

/// One line of the debriefing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub word: String,
    pub stage_one_misses: u32,
    pub stage_two_misses: u32,
}

impl SummaryRow {
    #[must_use]
    pub fn was_missed(&self) -> bool {
        self.stage_one_misses > 0 || self.stage_two_misses > 0
    }
}

/// Final per-word report of a finished game, in curation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    game: GameDefinition,
    rows: Vec<SummaryRow>,
}

impl GameSummary {
    #[must_use]
    pub fn new(game: GameDefinition, stage_one: &ErrorTally, stage_two: &ErrorTally) -> Self {
        let rows = game
            .words()
            .iter()
            .map(|entry| SummaryRow {
                word: entry.word().to_owned(),
                stage_one_misses: stage_one.misses(entry.word()),
                stage_two_misses: stage_two.misses(entry.word()),
            })
            .collect();
        Self { game, rows }
    }

    #[must_use]
    pub fn game(&self) -> &GameDefinition {
        &self.game
    }

    #[must_use]
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Entries missed at least once in either stage.
    #[must_use]
    pub fn missed_entries(&self) -> Vec<&VocabularyEntry> {
        self.game
            .words()
            .iter()
            .zip(&self.rows)
            .filter(|(_, row)| row.was_missed())
            .map(|(entry, _)| entry)
            .collect()
    }

    #[must_use]
    pub fn missed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.was_missed()).count()
    }

    #[must_use]
    pub fn all_clear(&self) -> bool {
        self.missed_count() == 0
    }

    /// Builds the throwaway review game from the missed clues, or `None`
    /// when everything was answered clean.
    #[must_use]
    pub fn review_game(&self) -> Option<GameDefinition> {
        let missed: Vec<VocabularyEntry> =
            self.missed_entries().into_iter().cloned().collect();
        if missed.is_empty() {
            return None;
        }
        Some(GameDefinition::review_of(&self.game, missed))
    }
}
