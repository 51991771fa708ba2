use std::sync::Arc;

use casefile_core::model::{EntryId, VocabularyEntry};
use casefile_core::time::fixed_now;
use services::{Clock, GameService};

use super::test_harness::{ViewKind, setup_view_harness};

fn entries(words: &[&str]) -> Vec<VocabularyEntry> {
    words
        .iter()
        .enumerate()
        .map(|(id, word)| {
            VocabularyEntry::new(
                EntryId::new(id as u64),
                *word,
                format!("https://img.example/{word}.png"),
                format!("a picture of a {word}"),
            )
        })
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_sign_in() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("SIGN IN"), "missing sign-in button in {html}");
    assert!(html.contains("Restricted Area"), "missing title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_greets_by_first_name() {
    let mut harness = setup_view_harness(ViewKind::Menu);
    harness.identity.sign_in();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome, Mina"), "missing greeting in {html}");
    assert!(html.contains("NEW CASE"), "missing new case in {html}");
    assert!(html.contains("CASE ARCHIVE"), "missing archive in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_signed_out_falls_back() {
    let mut harness = setup_view_harness(ViewKind::Menu);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("signed out"), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn saved_games_smoke_renders_empty_archive() {
    let mut harness = setup_view_harness(ViewKind::SavedGames);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No case files found."),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn saved_games_smoke_lists_newest_first_with_preview() {
    let mut harness = setup_view_harness(ViewKind::SavedGames);

    // Two creates a minute apart so the ids order the list.
    let older = GameService::new(Clock::fixed(fixed_now()), harness.storage.games.clone());
    let newer = GameService::new(
        Clock::fixed(fixed_now() + chrono::Duration::minutes(1)),
        harness.storage.games.clone(),
    );
    older
        .create_game(
            "Field Notes".into(),
            entries(&["fox", "owl", "bat", "cat", "dog", "elk"]),
        )
        .await
        .expect("create older game");
    newer
        .create_game("Night Shift".into(), entries(&["hen", "ram"]))
        .await
        .expect("create newer game");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    let newest = html.find("Night Shift").expect("newer game in list");
    let oldest = html.find("Field Notes").expect("older game in list");
    assert!(newest < oldest, "expected newest first in {html}");
    assert!(
        html.contains("fox, owl, bat, cat, dog, ..."),
        "missing trailed preview in {html}"
    );
    assert!(html.contains("hen, ram"), "missing short preview in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_reports_missing_vocabulary_source() {
    // The harness clock is fixed, so the created game's id is known up front.
    let game_id = fixed_now().timestamp_millis();
    let mut harness = setup_view_harness(ViewKind::Quiz(game_id));
    harness
        .games
        .create_game("Field Notes".into(), entries(&["fox", "owl"]))
        .await
        .expect("create game");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error state in {html}"
    );
}
