mod game_vm;
mod quiz_vm;

pub use game_vm::{GameCardVm, map_game_cards};
pub use quiz_vm::{
    FeedbackVm, ImageChoiceVm, QuizScreenVm, StageOneVm, StageTwoVm, SummaryRowVm, SummaryVm,
    WordChoiceVm, map_quiz_screen,
};
