//! In-process stand-in for the scoreboard backend.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde_json::{Value, json};

/// Backend state shared with the test so it can inspect or tweak it.
#[derive(Debug, Default)]
pub struct FakeState {
    /// Stored records in backend wire shape.
    pub records: Vec<Value>,
    /// Answer `null` instead of a list on `GET /api/players`.
    pub null_list: bool,
    next_id: u32,
}

/// Shared handle to the fake backend state.
pub type Shared = Arc<Mutex<FakeState>>;

/// Starts the fake backend on an ephemeral port and returns its base URL.
pub async fn spawn_backend() -> (String, Shared) {
    let state: Shared = Arc::new(Mutex::new(FakeState::default()));

    let app = Router::new()
        .route("/api/players", get(list).post(create))
        .route("/api/players/{id}", get(show).put(update))
        .route("/api/players/{id}/clear", put(clear))
        .with_state(state.clone());

    (serve(app).await, state)
}

/// Starts a backend that answers every request with 200 and an HTML page.
pub async fn spawn_html_backend() -> String {
    let app = Router::new().fallback(|| async { "<html><body>Service waking up</body></html>" });
    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake backend failed");
    });
    format!("http://{}", addr)
}

fn find<'a>(records: &'a mut [Value], id: &str) -> Option<&'a mut Value> {
    records.iter_mut().find(|r| r["_id"] == id)
}

fn bump(record: &mut Value, pointer: &str) {
    if let Some(v) = record.pointer_mut(pointer) {
        *v = json!(v.as_u64().unwrap_or(0) + 1);
    }
}

async fn list(State(state): State<Shared>) -> Json<Value> {
    let state = state.lock().unwrap();
    if state.null_list {
        Json(Value::Null)
    } else {
        Json(Value::Array(state.records.clone()))
    }
}

async fn create(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut state = state.lock().unwrap();
    state.next_id += 1;
    let record = json!({
        "_id": format!("match{}", state.next_id),
        "player1": { "name": body["player1"], "score": { "win": 0, "lose": 0 } },
        "player2": { "name": body["player2"], "score": { "win": 0, "lose": 0 } },
        "rounds": 0,
        "draw": 0,
        "createdAt": "2024-03-01T12:00:00.000Z",
        "updatedAt": "2024-03-01T12:00:00.000Z",
    });
    state.records.push(record.clone());
    Json(record)
}

async fn show(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    find(&mut state.records, &id)
        .map(|r| Json(r.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    let record = find(&mut state.records, &id).ok_or(StatusCode::NOT_FOUND)?;
    match body["winner"].as_str() {
        Some("player1") => {
            bump(record, "/player1/score/win");
            bump(record, "/player2/score/lose");
        }
        Some("player2") => {
            bump(record, "/player2/score/win");
            bump(record, "/player1/score/lose");
        }
        Some("draw") => bump(record, "/draw"),
        _ => return Err(StatusCode::BAD_REQUEST),
    }
    bump(record, "/rounds");
    Ok(Json(record.clone()))
}

async fn clear(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    let record = find(&mut state.records, &id).ok_or(StatusCode::NOT_FOUND)?;
    for pointer in [
        "/player1/score/win",
        "/player1/score/lose",
        "/player2/score/win",
        "/player2/score/lose",
        "/rounds",
        "/draw",
    ] {
        if let Some(v) = record.pointer_mut(pointer) {
            *v = json!(0);
        }
    }
    Ok(Json(record.clone()))
}
