mod entry;
mod game;
mod ids;
mod source;

pub use entry::VocabularyEntry;
pub use game::{GameDefinition, GameError, MIN_GAME_WORDS, REVIEW_NAME_SUFFIX};
pub use ids::{EntryId, GameId, ParseIdError};
pub use source::{SourceUrl, SourceUrlError};
