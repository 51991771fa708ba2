use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use casefile_core::model::{EntryId, GameDefinition, GameError, GameId, VocabularyEntry};

/// Fixed key under which the whole saved-game list lives as one JSON blob.
pub const GAMES_KEY: &str = "case_files";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key-value blob store contract backing the game repository.
///
/// Mirrors the browser storage shape the game was designed around:
/// string keys, string values, synchronous durability per call.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKvStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Persisted shape for one vocabulary entry inside a saved game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: EntryId,
    pub word: String,
    pub image_url: String,
    pub description: String,
}

impl EntryRecord {
    #[must_use]
    pub fn from_entry(entry: &VocabularyEntry) -> Self {
        Self {
            id: entry.id(),
            word: entry.word().to_owned(),
            image_url: entry.image_url().to_owned(),
            description: entry.description().to_owned(),
        }
    }

    #[must_use]
    pub fn into_entry(self) -> VocabularyEntry {
        VocabularyEntry::new(self.id, self.word, self.image_url, self.description)
    }
}

/// Persisted shape for a saved game.
///
/// This mirrors the domain `GameDefinition` so the repository can
/// serialize without leaking storage concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    pub words: Vec<EntryRecord>,
}

impl GameRecord {
    #[must_use]
    pub fn from_game(game: &GameDefinition) -> Self {
        Self {
            id: game.id(),
            name: game.name().to_owned(),
            words: game.words().iter().map(EntryRecord::from_entry).collect(),
        }
    }

    /// Convert the record back into a domain `GameDefinition`.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the persisted name or word list no longer
    /// satisfies the domain rules.
    pub fn into_game(self) -> Result<GameDefinition, GameError> {
        let words = self.words.into_iter().map(EntryRecord::into_entry).collect();
        GameDefinition::new(self.id, self.name, words)
    }
}

/// The saved-game repository: a JSON list under one fixed kv key.
///
/// Every operation reads the whole list, rewrites it, and persists it in
/// one `set`; there is no batching and no partial update.
#[derive(Clone)]
pub struct GameStore {
    kv: Arc<dyn KvStore>,
}

impl GameStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Returns the persisted list in insertion (creation) order.
    ///
    /// An absent blob and a corrupt blob both read as an empty list:
    /// a half-written saved-games blob must never brick the list screen.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for store access failures.
    pub async fn list_all(&self) -> Result<Vec<GameRecord>, StorageError> {
        let Some(raw) = self.kv.get(GAMES_KEY).await? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    /// Appends one saved game and persists the full list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be read, re-encoded, or
    /// written back.
    pub async fn append(&self, record: GameRecord) -> Result<(), StorageError> {
        let mut games = self.list_all().await?;
        games.push(record);
        self.persist(&games).await
    }

    /// Removes the game with the given id, if present. Deleting an
    /// unknown id is a no-op, so the operation is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be read or written back.
    pub async fn delete(&self, game_id: GameId) -> Result<(), StorageError> {
        let mut games = self.list_all().await?;
        games.retain(|record| record.id != game_id);
        self.persist(&games).await
    }

    async fn persist(&self, games: &[GameRecord]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(games)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.kv.set(GAMES_KEY, &raw).await
    }
}

/// Aggregates storage behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub games: GameStore,
    pub kv: Arc<dyn KvStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let kv: Arc<dyn KvStore> = Arc::new(InMemoryKvStore::new());
        Self {
            games: GameStore::new(Arc::clone(&kv)),
            kv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casefile_core::model::{EntryId, GameId};

    fn entry(id: u64, word: &str) -> VocabularyEntry {
        VocabularyEntry::new(
            EntryId::new(id),
            word,
            format!("{word}.png"),
            format!("about {word}"),
        )
    }

    fn record(id: i64, name: &str, words: &[&str]) -> GameRecord {
        let game = GameDefinition::new(
            GameId::new(id),
            name,
            words
                .iter()
                .enumerate()
                .map(|(i, word)| entry(i as u64, word))
                .collect(),
        )
        .unwrap();
        GameRecord::from_game(&game)
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let storage = Storage::in_memory();
        assert!(storage.games.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_then_list_round_trips_name_and_order() {
        let storage = Storage::in_memory();
        storage
            .games
            .append(record(1, "Animals", &["fox", "owl", "bat"]))
            .await
            .unwrap();

        let games = storage.games.list_all().await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "Animals");
        let words: Vec<_> = games[0].words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["fox", "owl", "bat"]);

        let game = games[0].clone().into_game().unwrap();
        assert_eq!(game.id(), GameId::new(1));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let storage = Storage::in_memory();
        storage
            .games
            .append(record(1, "Animals", &["fox", "owl"]))
            .await
            .unwrap();
        storage
            .games
            .append(record(2, "Tools", &["saw", "axe"]))
            .await
            .unwrap();

        storage.games.delete(GameId::new(1)).await.unwrap();
        storage.games.delete(GameId::new(1)).await.unwrap();

        let games = storage.games.list_all().await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, GameId::new(2));
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_a_no_op() {
        let storage = Storage::in_memory();
        storage
            .games
            .append(record(1, "Animals", &["fox", "owl"]))
            .await
            .unwrap();
        storage.games.delete(GameId::new(999)).await.unwrap();
        assert_eq!(storage.games.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_blob_reads_as_empty() {
        let storage = Storage::in_memory();
        storage.kv.set(GAMES_KEY, "{not json").await.unwrap();
        assert!(storage.games.list_all().await.unwrap().is_empty());

        // The next append heals the blob.
        storage
            .games
            .append(record(1, "Animals", &["fox", "owl"]))
            .await
            .unwrap();
        assert_eq!(storage.games.list_all().await.unwrap().len(), 1);
    }
}
