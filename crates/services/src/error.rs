//! Shared error types for the services crate.

use thiserror::Error;

use casefile_core::model::{GameError, SourceUrlError};
use casefile_core::quiz::StageError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `VocabularyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("no vocabulary source is configured")]
    MissingSource,
    #[error(transparent)]
    Source(#[from] SourceUrlError),
    #[error("vocabulary request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `GameService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while driving a quiz run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Stage(#[from] StageError),
    #[error("no stage is active in the current phase")]
    WrongPhase,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
