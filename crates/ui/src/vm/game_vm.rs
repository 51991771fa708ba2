use casefile_core::model::{GameDefinition, GameId, VocabularyEntry};

/// How many clue words the archive card previews before trailing off.
const PREVIEW_WORDS: usize = 5;

/// UI-ready representation of one saved case file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameCardVm {
    pub id: GameId,
    pub name: String,
    pub clue_preview: String,
    pub word_count: usize,
}

/// Convert saved games (already newest-first) into archive cards.
#[must_use]
pub fn map_game_cards(games: &[GameDefinition]) -> Vec<GameCardVm> {
    games
        .iter()
        .map(|game| GameCardVm {
            id: game.id(),
            name: game.name().to_owned(),
            clue_preview: format_clue_preview(game.words()),
            word_count: game.word_count(),
        })
        .collect()
}

fn format_clue_preview(words: &[VocabularyEntry]) -> String {
    let mut preview = words
        .iter()
        .take(PREVIEW_WORDS)
        .map(VocabularyEntry::word)
        .collect::<Vec<_>>()
        .join(", ");
    if words.len() > PREVIEW_WORDS {
        preview.push_str(", ...");
    }
    preview
}
