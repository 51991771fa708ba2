use casefile_core::quiz::{AnswerOutcome, ChoiceMark};
use services::QuizFlow;

/// Feedback line shown under the choices after a pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: &'static str,
    pub class: &'static str,
}

/// One word button in the stage-1 lineup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordChoiceVm {
    pub word: String,
    pub disabled: bool,
}

/// One image card in the stage-2 lineup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageChoiceVm {
    pub word: String,
    pub image_url: String,
    pub mark_class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageOneVm {
    pub image_url: String,
    pub progress: String,
    pub choices: Vec<WordChoiceVm>,
    pub awaiting_advance: bool,
    pub feedback: Option<FeedbackVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageTwoVm {
    pub description: String,
    pub progress: String,
    pub choices: Vec<ImageChoiceVm>,
    pub awaiting_advance: bool,
    pub feedback: Option<FeedbackVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRowVm {
    pub word: String,
    pub stage_one_misses: u32,
    pub stage_two_misses: u32,
    pub missed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub game_name: String,
    pub rows: Vec<SummaryRowVm>,
    pub missed_count: usize,
    pub all_clear: bool,
}

/// The screen the quiz route should render right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    StageOne(StageOneVm),
    Intermission,
    StageTwo(StageTwoVm),
    Summary(SummaryVm),
}

/// Snapshot the flow into plain render data so the view never holds a
/// borrow of the flow while building its tree.
#[must_use]
pub fn map_quiz_screen(flow: &QuizFlow) -> QuizScreenVm {
    if let Some(stage) = flow.stage_one() {
        let image_url = stage
            .current_question()
            .map(|entry| entry.image_url().to_owned())
            .unwrap_or_default();
        return QuizScreenVm::StageOne(StageOneVm {
            image_url,
            progress: evidence_progress(stage.question_number(), stage.total_questions()),
            choices: stage
                .choices()
                .iter()
                .map(|choice| WordChoiceVm {
                    word: choice.word().to_owned(),
                    disabled: choice.is_disabled(),
                })
                .collect(),
            awaiting_advance: stage.is_awaiting_advance(),
            feedback: stage.last_outcome().map(feedback_line),
        });
    }
    if let Some(stage) = flow.stage_two() {
        let description = stage
            .current_question()
            .map(|entry| entry.description().to_owned())
            .unwrap_or_default();
        return QuizScreenVm::StageTwo(StageTwoVm {
            description,
            progress: report_progress(stage.question_number(), stage.total_questions()),
            choices: stage
                .choices()
                .iter()
                .map(|choice| ImageChoiceVm {
                    word: choice.word().to_owned(),
                    image_url: choice.entry().image_url().to_owned(),
                    mark_class: mark_class(choice.mark()),
                    disabled: choice.is_disabled(),
                })
                .collect(),
            awaiting_advance: stage.is_awaiting_advance(),
            feedback: stage.last_outcome().map(feedback_line),
        });
    }
    if let Some(summary) = flow.summary() {
        return QuizScreenVm::Summary(SummaryVm {
            game_name: summary.game().name().to_owned(),
            rows: summary
                .rows()
                .iter()
                .map(|row| SummaryRowVm {
                    word: row.word.clone(),
                    stage_one_misses: row.stage_one_misses,
                    stage_two_misses: row.stage_two_misses,
                    missed: row.was_missed(),
                })
                .collect(),
            missed_count: summary.missed_count(),
            all_clear: summary.all_clear(),
        });
    }
    QuizScreenVm::Intermission
}

fn evidence_progress(number: usize, total: usize) -> String {
    format!("Evidence {number} of {total}")
}

fn report_progress(number: usize, total: usize) -> String {
    format!("Report {number} of {total}")
}

fn mark_class(mark: ChoiceMark) -> &'static str {
    match mark {
        ChoiceMark::None => "",
        ChoiceMark::Correct => "choice--correct",
        ChoiceMark::Wrong => "choice--wrong",
    }
}

fn feedback_line(outcome: AnswerOutcome) -> FeedbackVm {
    match outcome {
        AnswerOutcome::Correct => FeedbackVm {
            text: "Correct!",
            class: "quiz-feedback quiz-feedback--correct",
        },
        AnswerOutcome::Incorrect => FeedbackVm {
            text: "Wrong pick. Look again.",
            class: "quiz-feedback quiz-feedback--wrong",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casefile_core::model::{EntryId, GameDefinition, GameId, VocabularyEntry};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use services::{QuizPhase, SilentAudio};
    use std::sync::Arc;

    fn pool(words: &[&str]) -> Vec<VocabularyEntry> {
        words
            .iter()
            .enumerate()
            .map(|(id, word)| {
                VocabularyEntry::new(
                    EntryId::new(id as u64),
                    *word,
                    format!("{word}.png"),
                    format!("about {word}"),
                )
            })
            .collect()
    }

    fn flow() -> QuizFlow {
        let game = GameDefinition::new(GameId::new(1), "Animals", pool(&["fox", "owl"])).unwrap();
        QuizFlow::with_rng(
            game,
            pool(&["fox", "owl", "bat", "cat", "dog"]),
            Arc::new(SilentAudio),
            StdRng::seed_from_u64(5),
        )
    }

    #[test]
    fn stage_one_snapshot_carries_progress_and_choices() {
        let flow = flow();
        let QuizScreenVm::StageOne(vm) = map_quiz_screen(&flow) else {
            panic!("expected stage one");
        };
        assert_eq!(vm.progress, "Evidence 1 of 2");
        assert!(vm.image_url.ends_with(".png"));
        assert!(vm.choices.len() >= 3);
        assert!(!vm.awaiting_advance);
        assert_eq!(vm.feedback, None);
    }

    #[test]
    fn every_pick_surfaces_a_feedback_line() {
        let mut flow = flow();
        let correct = flow
            .stage_one()
            .unwrap()
            .current_question()
            .unwrap()
            .word()
            .to_owned();
        let wrong = flow
            .stage_one()
            .unwrap()
            .choices()
            .iter()
            .find(|choice| choice.word() != correct)
            .unwrap()
            .word()
            .to_owned();

        flow.answer_stage_one(&wrong).unwrap();
        let QuizScreenVm::StageOne(vm) = map_quiz_screen(&flow) else {
            panic!("expected stage one");
        };
        let feedback = vm.feedback.expect("feedback after a wrong pick");
        assert_eq!(feedback.text, "Wrong pick. Look again.");
        assert!(feedback.class.contains("quiz-feedback--wrong"));

        flow.answer_stage_one(&correct).unwrap();
        let QuizScreenVm::StageOne(vm) = map_quiz_screen(&flow) else {
            panic!("expected stage one");
        };
        let feedback = vm.feedback.expect("feedback after the correct pick");
        assert_eq!(feedback.text, "Correct!");
        assert!(feedback.class.contains("quiz-feedback--correct"));

        // The next question opens with the line cleared.
        flow.advance_stage_one().unwrap();
        let QuizScreenVm::StageOne(vm) = map_quiz_screen(&flow) else {
            panic!("expected stage one");
        };
        assert_eq!(vm.feedback, None);
    }

    #[test]
    fn summary_snapshot_counts_misses() {
        let mut flow = flow();
        while flow.phase() == QuizPhase::StageOne {
            let word = flow
                .stage_one()
                .unwrap()
                .current_question()
                .unwrap()
                .word()
                .to_owned();
            flow.answer_stage_one(&word).unwrap();
            flow.advance_stage_one().unwrap();
        }
        flow.begin_stage_two().unwrap();
        while flow.phase() == QuizPhase::StageTwo {
            let word = flow
                .stage_two()
                .unwrap()
                .current_question()
                .unwrap()
                .word()
                .to_owned();
            flow.answer_stage_two(&word).unwrap();
            flow.advance_stage_two().unwrap();
        }

        let QuizScreenVm::Summary(vm) = map_quiz_screen(&flow) else {
            panic!("expected summary");
        };
        assert_eq!(vm.game_name, "Animals");
        assert_eq!(vm.rows.len(), 2);
        assert!(vm.all_clear);
        assert_eq!(vm.missed_count, 0);
    }
}
