use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use casefile_core::model::{EntryId, GameDefinition, GameId, VocabularyEntry};
use services::audio::{FeedbackAudio, FeedbackCue, RecordingAudio};
use services::quiz_flow::{QuizFlow, QuizPhase};

fn entry(id: u64, word: &str) -> VocabularyEntry {
    VocabularyEntry::new(
        EntryId::new(id),
        word,
        format!("https://img.example/{word}.png"),
        format!("a picture of a {word}"),
    )
}

fn pool(words: &[&str]) -> Vec<VocabularyEntry> {
    words
        .iter()
        .enumerate()
        .map(|(id, word)| entry(id as u64, word))
        .collect()
}

fn answer_stage_one(flow: &mut QuizFlow, pick: impl Fn(&str) -> String) {
    while flow.phase() == QuizPhase::StageOne {
        let correct = flow
            .stage_one()
            .unwrap()
            .current_question()
            .unwrap()
            .word()
            .to_owned();
        let choice = pick(&correct);
        flow.answer_stage_one(&choice).unwrap();
        if choice == correct {
            flow.advance_stage_one().unwrap();
        }
    }
}

fn clear_stage_two(flow: &mut QuizFlow) {
    while flow.phase() == QuizPhase::StageTwo {
        let correct = flow
            .stage_two()
            .unwrap()
            .current_question()
            .unwrap()
            .word()
            .to_owned();
        flow.answer_stage_two(&correct).unwrap();
        flow.advance_stage_two().unwrap();
    }
}

#[test]
fn misses_flow_into_the_summary_and_the_review_run() {
    let game = GameDefinition::new(GameId::new(1), "Animals", pool(&["fox", "owl"])).unwrap();
    let audio = Arc::new(RecordingAudio::new());
    let mut flow = QuizFlow::with_rng(
        game,
        pool(&["fox", "owl", "bat", "cat", "dog", "elk"]),
        Arc::clone(&audio) as Arc<dyn FeedbackAudio>,
        StdRng::seed_from_u64(42),
    );

    // Miss "fox" once (by picking some other live choice first), answer
    // everything else clean.
    let mut missed_fox = false;
    while flow.phase() == QuizPhase::StageOne {
        let correct = flow
            .stage_one()
            .unwrap()
            .current_question()
            .unwrap()
            .word()
            .to_owned();
        if correct == "fox" && !missed_fox {
            let wrong = flow
                .stage_one()
                .unwrap()
                .choices()
                .iter()
                .find(|choice| choice.word() != "fox" && !choice.is_disabled())
                .unwrap()
                .word()
                .to_owned();
            flow.answer_stage_one(&wrong).unwrap();
            missed_fox = true;
            continue;
        }
        flow.answer_stage_one(&correct).unwrap();
        flow.advance_stage_one().unwrap();
    }
    assert!(missed_fox);
    assert_eq!(flow.phase(), QuizPhase::Intermission);

    flow.begin_stage_two().unwrap();
    clear_stage_two(&mut flow);
    assert_eq!(flow.phase(), QuizPhase::Summary);

    let summary = flow.summary().unwrap();
    let rows: Vec<_> = summary
        .rows()
        .iter()
        .map(|row| (row.word.as_str(), row.stage_one_misses, row.stage_two_misses))
        .collect();
    assert_eq!(rows, vec![("fox", 1, 0), ("owl", 0, 0)]);
    assert_eq!(summary.missed_count(), 1);

    // Every answer played a cue, exactly one of them the incorrect one.
    let cues = audio.played();
    assert_eq!(
        cues.iter()
            .filter(|cue| **cue == FeedbackCue::Incorrect)
            .count(),
        1
    );
    assert!(cues.iter().filter(|cue| **cue == FeedbackCue::Correct).count() >= 4);

    // The review run holds only the missed clue.
    flow.start_review().unwrap();
    assert_eq!(flow.phase(), QuizPhase::StageOne);
    assert_eq!(flow.game().name(), "Animals - Review");
    assert_eq!(flow.game().word_count(), 1);

    answer_stage_one(&mut flow, str::to_owned);
    flow.begin_stage_two().unwrap();
    clear_stage_two(&mut flow);
    assert!(flow.summary().unwrap().all_clear());
}

#[test]
fn distractors_outside_the_game_never_reach_stage_two() {
    let game = GameDefinition::new(GameId::new(1), "Animals", pool(&["fox", "owl"])).unwrap();
    let audio = Arc::new(RecordingAudio::new());
    let mut flow = QuizFlow::with_rng(
        game,
        pool(&["fox", "owl", "bat", "cat", "dog", "elk", "hen"]),
        audio as Arc<dyn FeedbackAudio>,
        StdRng::seed_from_u64(7),
    );

    // Stage 1 draws from the whole pool, so more choices than game words.
    assert!(flow.stage_one().unwrap().choice_count() > 2);

    answer_stage_one(&mut flow, str::to_owned);
    flow.begin_stage_two().unwrap();

    // Stage 2 offers exactly the game's own words.
    let mut words: Vec<_> = flow
        .stage_two()
        .unwrap()
        .choices()
        .iter()
        .map(|choice| choice.word().to_owned())
        .collect();
    words.sort();
    assert_eq!(words, vec!["fox", "owl"]);
}
