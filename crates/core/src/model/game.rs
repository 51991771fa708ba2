use thiserror::Error;

use crate::model::entry::VocabularyEntry;
use crate::model::ids::GameId;

/// A playable game needs at least two clues to make either stage meaningful.
pub const MIN_GAME_WORDS: usize = 2;

/// Suffix appended to a game name when replaying only the missed clues.
pub const REVIEW_NAME_SUFFIX: &str = " - Review";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("case file name cannot be empty")]
    EmptyName,

    #[error("a case file needs at least {MIN_GAME_WORDS} clues, got {got}")]
    NotEnoughWords { got: usize },
}

/// A named, user-curated subset of the vocabulary pool ("case file").
///
/// The word order is the curation order and is preserved through
/// persistence and in the final summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDefinition {
    id: GameId,
    name: String,
    words: Vec<VocabularyEntry>,
}

impl GameDefinition {
    /// Creates a new game definition.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyName` if the name is empty or whitespace-only.
    /// Returns `GameError::NotEnoughWords` for fewer than [`MIN_GAME_WORDS`]
    /// clues.
    pub fn new(
        id: GameId,
        name: impl Into<String>,
        words: Vec<VocabularyEntry>,
    ) -> Result<Self, GameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::EmptyName);
        }
        if words.len() < MIN_GAME_WORDS {
            return Err(GameError::NotEnoughWords { got: words.len() });
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            words,
        })
    }

    /// Derives the throwaway review game holding only the given missed
    /// clues. Review games are never persisted and, unlike user-created
    /// games, may hold a single word.
    pub(crate) fn review_of(parent: &GameDefinition, words: Vec<VocabularyEntry>) -> Self {
        Self {
            id: parent.id,
            name: format!("{}{REVIEW_NAME_SUFFIX}", parent.name),
            words,
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn words(&self) -> &[VocabularyEntry] {
        &self.words
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
