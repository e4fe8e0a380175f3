//! Attendance workflow integration tests.

use std::sync::Arc;

use tickwatch_core::error::ErrorKind;
use tickwatch_worker::{RunOutcome, TickRunner};

use crate::helpers::{TestApp, price_list};

#[tokio::test]
async fn test_first_run_creates_state_without_posting() {
    let app = TestApp::new(price_list()).await;
    app.mount_attendees(12).await;
    app.mount_webhook(204, 0).await;

    let outcome = app.job().run_once().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Initialized { .. }));
    let state = app.read_state();
    assert_eq!(state["count"], 12);
    assert!(state["datetime"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_change_posts_embed_and_updates_state() {
    let app = TestApp::new(price_list()).await;
    app.write_state("2024-06-01T10:00:00Z", 25);
    app.mount_attendees(30).await;
    app.mount_event().await;
    app.mount_webhook(204, 1).await;

    let outcome = app.job().run_once().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Notified { .. }));
    assert_eq!(app.read_state()["count"], 30);

    let posts = app.webhook_posts().await;
    assert_eq!(posts.len(), 1);
    let body = &posts[0];
    assert_eq!(body["username"], "TickWatch");

    let embed = &body["embeds"][0];
    assert_eq!(embed["title"], "Midsommarfest");
    assert_eq!(embed["url"], "https://billetto.se/e/midsommarfest-42");
    assert!(
        embed["description"]
            .as_str()
            .unwrap()
            .contains("*2024-06-01T10:00:00Z* då fanns det 25")
    );

    let fields = embed["fields"].as_array().unwrap();
    assert_eq!(fields[0]["value"], "+5");
    assert_eq!(fields[1]["value"], "30 / 70");
    assert!(
        fields[2]["value"]
            .as_str()
            .unwrap()
            .starts_with("2600.00 SEK\n")
    );
}

#[tokio::test]
async fn test_unchanged_count_is_quiet() {
    let app = TestApp::new(price_list()).await;
    app.write_state("2024-06-01T10:00:00Z", 30);
    app.mount_attendees(30).await;
    app.mount_webhook(204, 0).await;

    let outcome = app.job().run_once().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Unchanged { .. }));
    assert_eq!(app.read_state()["count"], 30);
}

#[tokio::test]
async fn test_rejected_webhook_keeps_old_state() {
    let app = TestApp::new(price_list()).await;
    app.write_state("2024-06-01T10:00:00Z", 25);
    app.mount_attendees(30).await;
    app.mount_event().await;
    app.mount_webhook(500, 1).await;

    let err = app.job().run_once().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Delivery);
    assert_eq!(app.read_state()["count"], 25);
}

#[tokio::test]
async fn test_unreachable_source_leaves_state() {
    let app = TestApp::new(price_list()).await;
    app.write_state("2024-06-01T10:00:00Z", 25);
    app.mount_webhook(204, 0).await;

    let err = app.job().run_once().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::SourceUnavailable);
    assert_eq!(app.read_state()["count"], 25);
}

#[tokio::test]
async fn test_corrupt_state_is_first_run() {
    let app = TestApp::new(price_list()).await;
    std::fs::write(app.state_path(), "not json at all").unwrap();
    app.mount_attendees(9).await;
    app.mount_webhook(204, 0).await;

    let outcome = app.job().run_once().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Initialized { .. }));
    assert_eq!(app.read_state()["count"], 9);
}

#[tokio::test]
async fn test_silent_mode_updates_state_only() {
    let mut app = TestApp::new(price_list()).await;
    app.config.discord.silent = true;
    app.write_state("2024-06-01T10:00:00Z", 25);
    app.mount_attendees(26).await;
    app.mount_event().await;
    app.mount_webhook(204, 0).await;

    let outcome = app.job().run_once().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Suppressed { .. }));
    assert_eq!(app.read_state()["count"], 26);
}

#[tokio::test]
async fn test_tick_runner_over_real_clients() {
    let app = TestApp::new(Vec::new()).await;
    app.mount_attendees(3).await;
    app.mount_webhook(204, 0).await;

    let runner = TickRunner::new(Arc::new(app.job()), true);
    runner.tick().await;

    assert_eq!(app.read_state()["count"], 3);
    assert!(app.state_dir.path().join("event.json").exists());
}
