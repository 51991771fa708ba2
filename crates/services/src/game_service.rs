use casefile_core::model::{GameDefinition, GameId, VocabularyEntry};
use storage::repository::{GameRecord, GameStore};

use crate::Clock;
use crate::error::GameServiceError;

/// Orchestrates case-file creation, listing, and deletion.
#[derive(Clone)]
pub struct GameService {
    clock: Clock,
    games: GameStore,
}

impl GameService {
    #[must_use]
    pub fn new(clock: Clock, games: GameStore) -> Self {
        Self { clock, games }
    }

    /// Validate and persist a new case file.
    ///
    /// The id is the creation timestamp in milliseconds, which also gives
    /// the list a natural recency order.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Game` for validation failures and
    /// `GameServiceError::Storage` if persistence fails.
    pub async fn create_game(
        &self,
        name: String,
        words: Vec<VocabularyEntry>,
    ) -> Result<GameDefinition, GameServiceError> {
        let id = GameId::new(self.clock.now().timestamp_millis());
        let game = GameDefinition::new(id, name, words)?;
        self.games.append(GameRecord::from_game(&game)).await?;
        Ok(game)
    }

    /// List saved case files, newest first.
    ///
    /// Records that no longer satisfy the domain rules are skipped rather
    /// than failing the whole list.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Storage` if the store cannot be read.
    pub async fn list_games(&self) -> Result<Vec<GameDefinition>, GameServiceError> {
        let mut games: Vec<GameDefinition> = self
            .games
            .list_all()
            .await?
            .into_iter()
            .filter_map(|record| record.into_game().ok())
            .collect();
        games.sort_by_key(|game| std::cmp::Reverse(game.id().value()));
        Ok(games)
    }

    /// Fetch one case file by id. Returns `Ok(None)` when it is gone.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Storage` if the store cannot be read.
    pub async fn get_game(
        &self,
        game_id: GameId,
    ) -> Result<Option<GameDefinition>, GameServiceError> {
        let games = self.list_games().await?;
        Ok(games.into_iter().find(|game| game.id() == game_id))
    }

    /// Delete a case file. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Storage` if the store cannot be written.
    pub async fn delete_game(&self, game_id: GameId) -> Result<(), GameServiceError> {
        self.games.delete(game_id).await?;
        Ok(())
    }
}
