mod alert;
mod create_game;
mod login;
mod menu;
mod quiz;
mod saved_games;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use alert::AlertModal;
pub use create_game::CreateGameView;
pub use login::LoginView;
pub use menu::MenuView;
pub use quiz::QuizView;
pub use saved_games::SavedGamesView;
pub use state::{ViewError, ViewState, view_state_from_resource};
