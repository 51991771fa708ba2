use thiserror::Error;

use crate::model::{GameError, SourceUrlError};
use crate::quiz::StageError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    SourceUrl(#[from] SourceUrlError),
    #[error(transparent)]
    Stage(#[from] StageError),
}
