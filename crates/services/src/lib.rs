#![forbid(unsafe_code)]

pub mod app_services;
pub mod audio;
pub mod error;
pub mod game_service;
pub mod identity;
pub mod quiz_flow;
pub mod vocabulary_service;

pub use casefile_core::Clock;

pub use app_services::AppServices;
pub use audio::{FeedbackAudio, FeedbackCue, RecordingAudio, SilentAudio};
pub use error::{AppServicesError, GameServiceError, QuizError, VocabularyError};
pub use game_service::GameService;
pub use identity::{IdentityProvider, LocalIdentity, SessionListener, SessionState, UserProfile};
pub use quiz_flow::{QuizFlow, QuizPhase, STAGE_ONE_ADVANCE_DELAY};
pub use vocabulary_service::VocabularyService;
