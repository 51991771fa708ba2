use std::sync::Arc;

use casefile_core::model::SourceUrl;
use storage::repository::Storage;

use crate::Clock;
use crate::audio::{FeedbackAudio, SilentAudio};
use crate::error::AppServicesError;
use crate::game_service::GameService;
use crate::identity::IdentityProvider;
use crate::vocabulary_service::VocabularyService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    identity: Arc<dyn IdentityProvider>,
    games: Arc<GameService>,
    vocabulary: Arc<VocabularyService>,
    audio: Arc<dyn FeedbackAudio>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        sheet_url: Option<SourceUrl>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::over_storage(storage, clock, sheet_url, identity))
    }

    /// Build services over an already-initialized storage backend.
    #[must_use]
    pub fn over_storage(
        storage: Storage,
        clock: Clock,
        sheet_url: Option<SourceUrl>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let games = Arc::new(GameService::new(clock, storage.games));
        let vocabulary = Arc::new(VocabularyService::new(sheet_url));
        Self {
            identity,
            games,
            vocabulary,
            audio: Arc::new(SilentAudio),
        }
    }

    /// Replace the audio sink, e.g. with the desktop webview player.
    #[must_use]
    pub fn with_audio(mut self, audio: Arc<dyn FeedbackAudio>) -> Self {
        self.audio = audio;
        self
    }

    #[must_use]
    pub fn identity(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.identity)
    }

    #[must_use]
    pub fn games(&self) -> Arc<GameService> {
        Arc::clone(&self.games)
    }

    #[must_use]
    pub fn vocabulary(&self) -> Arc<VocabularyService> {
        Arc::clone(&self.vocabulary)
    }

    #[must_use]
    pub fn audio(&self) -> Arc<dyn FeedbackAudio> {
        Arc::clone(&self.audio)
    }
}
