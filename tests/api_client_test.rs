//! Tests for the scoreboard REST client against an in-process backend.

mod common;

use std::time::Duration;

use tictactoe_scoreboard::{
    ApiErrorKind, NewMatch, Outcome, RestScoreboardClient, ScoreboardApi, Symbol,
};

fn client(base_url: &str) -> RestScoreboardClient {
    RestScoreboardClient::new(base_url, Duration::from_secs(5)).expect("Failed to build client")
}

#[tokio::test]
async fn test_empty_backend_lists_nothing() {
    let (url, _state) = common::spawn_backend().await;
    let records = client(&url).list_matches().await.expect("List failed");
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_null_list_is_empty() {
    let (url, state) = common::spawn_backend().await;
    state.lock().unwrap().null_list = true;
    let records = client(&url).list_matches().await.expect("List failed");
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_create_then_fetch() {
    let (url, _state) = common::spawn_backend().await;
    let api = client(&url);

    let created = api
        .create_match(&NewMatch::new("Alice".to_string(), "Bob".to_string()))
        .await
        .expect("Create failed");
    assert_eq!(created.player1.name, "Alice");
    assert_eq!(created.player2.name, "Bob");
    assert_eq!(created.rounds, 0);
    assert!(created.created_at.is_some());

    let fetched = api.get_match(&created.id).await.expect("Get failed");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_reported_outcomes_update_counters() {
    let (url, _state) = common::spawn_backend().await;
    let api = client(&url);
    let record = api
        .create_match(&NewMatch::new("Alice".to_string(), "Bob".to_string()))
        .await
        .expect("Create failed");

    api.report_outcome(&record.id, Outcome::Winner(Symbol::X))
        .await
        .expect("Report failed");
    api.report_outcome(&record.id, Outcome::Winner(Symbol::O))
        .await
        .expect("Report failed");
    api.report_outcome(&record.id, Outcome::Draw)
        .await
        .expect("Report failed");

    let record = api.get_match(&record.id).await.expect("Get failed");
    assert_eq!(record.rounds, 3);
    assert_eq!(record.draw, 1);
    assert_eq!(record.player1.score.win, 1);
    assert_eq!(record.player1.score.lose, 1);
    assert_eq!(record.player2.score.win, 1);
    assert_eq!(record.player2.score.lose, 1);
    assert_eq!(record.display_round(), 3);
}

#[tokio::test]
async fn test_clear_resets_counters() {
    let (url, _state) = common::spawn_backend().await;
    let api = client(&url);
    let record = api
        .create_match(&NewMatch::new("Alice".to_string(), "Bob".to_string()))
        .await
        .expect("Create failed");
    api.report_outcome(&record.id, Outcome::Winner(Symbol::X))
        .await
        .expect("Report failed");

    api.clear_match(&record.id).await.expect("Clear failed");

    let record = api.get_match(&record.id).await.expect("Get failed");
    assert_eq!(record.rounds, 0);
    assert_eq!(record.display_round(), 1);
    assert_eq!(record.player1.score.win, 0);
    assert_eq!(record.player2.score.lose, 0);
}

#[tokio::test]
async fn test_unknown_match_is_status_404() {
    let (url, _state) = common::spawn_backend().await;
    let err = client(&url)
        .get_match("missing")
        .await
        .expect_err("Expected 404");
    assert_eq!(err.kind, ApiErrorKind::Status(404));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (url, _state) = common::spawn_backend().await;
    let api = client(&format!("{}/", url));
    assert_eq!(api.base_url(), url);
    api.list_matches().await.expect("List failed");
}

#[tokio::test]
async fn test_html_body_is_decode_error() {
    let url = common::spawn_html_backend().await;
    let api = client(&url);

    let err = api.list_matches().await.expect_err("Expected decode failure");
    assert_eq!(err.kind, ApiErrorKind::Decode);

    let err = api.get_match("any").await.expect_err("Expected decode failure");
    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Bind failed");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .list_matches()
        .await
        .expect_err("Expected failure");
    assert_eq!(err.kind, ApiErrorKind::Transport);
}
