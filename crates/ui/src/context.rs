use std::sync::Arc;

use services::{FeedbackAudio, GameService, IdentityProvider, VocabularyService};

/// The services a composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn identity(&self) -> Arc<dyn IdentityProvider>;
    fn games(&self) -> Arc<GameService>;
    fn vocabulary(&self) -> Arc<VocabularyService>;
    fn audio(&self) -> Arc<dyn FeedbackAudio>;
}

#[derive(Clone)]
pub struct AppContext {
    identity: Arc<dyn IdentityProvider>,
    games: Arc<GameService>,
    vocabulary: Arc<VocabularyService>,
    audio: Arc<dyn FeedbackAudio>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            identity: app.identity(),
            games: app.games(),
            vocabulary: app.vocabulary(),
            audio: app.audio(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
