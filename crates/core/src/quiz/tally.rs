use crate::model::GameDefinition;

/// Per-word mistake counts for one stage.
///
/// Holds exactly one slot per distinct word in the active game, in the
/// game's curation order. Counts only ever increase; a fresh tally is
/// built when the next stage or a new game starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTally {
    counts: Vec<(String, u32)>,
}

impl ErrorTally {
    #[must_use]
    pub fn for_game(game: &GameDefinition) -> Self {
        Self {
            counts: game
                .words()
                .iter()
                .map(|entry| (entry.word().to_owned(), 0))
                .collect(),
        }
    }

    /// Bumps the count for `word`. Unknown words are ignored; the stages
    /// only ever pass the current question's word.
    pub fn record_miss(&mut self, word: &str) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(w, _)| w == word) {
            *count += 1;
        }
    }

    #[must_use]
    pub fn misses(&self, word: &str) -> u32 {
        self.counts
            .iter()
            .find(|(w, _)| w == word)
            .map_or(0, |(_, count)| *count)
    }

    #[must_use]
    pub fn has_misses(&self) -> bool {
        self.counts.iter().any(|(_, count)| *count > 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
