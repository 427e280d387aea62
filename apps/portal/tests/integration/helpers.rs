use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use portal::{
    config::Config,
    infrastructure::http::ApiClient,
    presentation::view::traits::{ConfirmPrompt, LikeView, LikeViewModel, Notifier, ToastKind},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use url::Url;

pub const SESSION_COOKIE: &str = "session=test-token";
pub const ARTICLE_ID: &str = "a1";
pub const AUTHOR_ID: &str = "u1";

/// Mutable world of the fake CMS.
#[derive(Default)]
pub struct FakeState {
    /// Profile body; `None` answers 401.
    pub viewer: Option<Value>,
    pub liked_by: Vec<String>,
    pub like_calls: usize,
    /// Forces the like endpoint to fail with this status and message.
    pub like_failure: Option<(u16, String)>,
    pub like_malformed: bool,
    pub delete_status: Option<u16>,
    pub comments: Vec<Value>,
    pub comment_posts: usize,
    /// Comment writes answer `{message}` / `{text}` instead of the full comment.
    pub terse_comment_bodies: bool,
    pub pending: Vec<Value>,
    pub decisions: Vec<(String, String)>,
    pub last_pending_query: HashMap<String, String>,
    pub registered_emails: Vec<String>,
    pub cookies: Vec<String>,
}

impl FakeState {
    pub fn with_viewer(id: &str, role: &str) -> Self {
        Self {
            viewer: Some(json!({ "_id": id, "username": id, "role": role })),
            ..Default::default()
        }
    }

    fn viewer_id(&self) -> Option<String> {
        self.viewer
            .as_ref()
            .and_then(|v| v["_id"].as_str())
            .map(str::to_string)
    }
}

type Shared = Arc<Mutex<FakeState>>;

pub struct FakeCms {
    pub base: Url,
    state: Shared,
}

impl FakeCms {
    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake state poisoned")
    }

    pub fn config(&self) -> Config {
        Config {
            api_base: self.base.clone(),
            session_cookie: Some(SESSION_COOKIE.to_string()),
            ..Config::from_lookup(|_| None).expect("default config")
        }
    }

    pub fn client(&self) -> Arc<ApiClient> {
        Arc::new(ApiClient::new(&self.config()).expect("api client"))
    }
}

pub async fn spawn_fake_cms(state: FakeState) -> FakeCms {
    let shared: Shared = Arc::new(Mutex::new(state));
    let app = Router::new()
        .route("/api/auth/profile", get(profile))
        .route("/api/auth/register-pending", post(register_pending))
        .route("/api/articles/{id}", get(article).delete(delete_article))
        .route("/api/articles/{id}/like", post(toggle_like))
        .route(
            "/api/comments/{id}",
            get(list_comments)
                .post(create_comment)
                .put(update_comment)
                .delete(delete_comment),
        )
        .route("/api/admin/pending-users", get(pending_users))
        .route("/api/admin/{decision}/{id}", post(decide))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake cms");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake cms crashed");
    });

    FakeCms {
        base: Url::parse(&format!("http://{addr}")).expect("base url"),
        state: shared,
    }
}

fn lock(state: &Shared) -> MutexGuard<'_, FakeState> {
    state.lock().expect("fake state poisoned")
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

async fn profile(State(state): State<Shared>) -> Response {
    match &lock(&state).viewer {
        Some(viewer) => Json(viewer.clone()).into_response(),
        None => message(StatusCode::UNAUTHORIZED, "Brak sesji"),
    }
}

async fn article(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if id != ARTICLE_ID {
        return message(StatusCode::NOT_FOUND, "Nie znaleziono artykułu");
    }
    let state = lock(&state);
    Json(json!({
        "article": {
            "_id": ARTICLE_ID,
            "title": "Wiosna w mieście",
            "content": "Pierwszy akapit\nDrugi akapit",
            "author": { "_id": AUTHOR_ID, "email": "autor@example.com", "username": "autor" },
            "createdAt": "2024-03-05",
            "images": ["/uploads/1.jpg", "uploads/2.jpg"],
            "likes": state.liked_by,
        },
        "commentCount": state.comments.len(),
    }))
    .into_response()
}

async fn toggle_like(
    State(state): State<Shared>,
    Path(_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut state = lock(&state);
    state.like_calls += 1;
    if let Some(cookie) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        state.cookies.push(cookie.to_string());
    }
    if let Some((status, text)) = state.like_failure.clone() {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return message(status, &text);
    }
    if state.like_malformed {
        return Json(json!({ "liked": true })).into_response();
    }
    let Some(viewer) = state.viewer_id() else {
        return message(StatusCode::UNAUTHORIZED, "Zaloguj się");
    };

    let liked = if let Some(pos) = state.liked_by.iter().position(|id| *id == viewer) {
        state.liked_by.remove(pos);
        false
    } else {
        state.liked_by.push(viewer);
        true
    };
    Json(json!({ "liked": liked, "totalLikes": state.liked_by.len() })).into_response()
}

async fn delete_article(State(state): State<Shared>, Path(_id): Path<String>) -> Response {
    match lock(&state).delete_status {
        Some(403) => message(StatusCode::FORBIDDEN, "Brak uprawnień"),
        Some(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[derive(Deserialize)]
struct CommentPayload {
    text: String,
}

/// Mimics the server-side filter: markup is stripped before the length check.
fn sanitize(text: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

async fn list_comments(State(state): State<Shared>, Path(_article): Path<String>) -> Response {
    Json(lock(&state).comments.clone()).into_response()
}

async fn create_comment(
    State(state): State<Shared>,
    Path(_article): Path<String>,
    Json(payload): Json<CommentPayload>,
) -> Response {
    let mut state = lock(&state);
    state.comment_posts += 1;
    let text = sanitize(&payload.text);
    if text.chars().count() < 6 {
        return message(
            StatusCode::BAD_REQUEST,
            "Komentarz jest pusty po odfiltrowaniu",
        );
    }
    let author = state.viewer.clone().unwrap_or(Value::Null);
    let comment = json!({
        "_id": format!("c{}", state.comments.len() + 1),
        "text": text,
        "author": author,
        "createdAt": "2024-03-06T10:00:00Z",
    });
    state.comments.push(comment.clone());
    if state.terse_comment_bodies {
        return (StatusCode::CREATED, Json(json!({ "message": "Komentarz dodany" }))).into_response();
    }
    (StatusCode::CREATED, Json(comment)).into_response()
}

async fn update_comment(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(payload): Json<CommentPayload>,
) -> Response {
    let mut state = lock(&state);
    let terse = state.terse_comment_bodies;
    let text = sanitize(&payload.text);
    match state.comments.iter_mut().find(|c| c["_id"] == id.as_str()) {
        Some(comment) => {
            comment["text"] = Value::String(text.clone());
            if terse {
                return Json(json!({ "text": text })).into_response();
            }
            Json(comment.clone()).into_response()
        }
        None => message(StatusCode::NOT_FOUND, "Nie znaleziono komentarza"),
    }
}

async fn delete_comment(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = lock(&state);
    let before = state.comments.len();
    state.comments.retain(|c| c["_id"] != id.as_str());
    if state.comments.len() == before {
        return message(StatusCode::NOT_FOUND, "Nie znaleziono komentarza");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn pending_users(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut state = lock(&state);
    let search = query.get("search").cloned().unwrap_or_default();
    let page: usize = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: usize = query.get("limit").and_then(|l| l.parse().ok()).unwrap_or(10);
    state.last_pending_query = query;

    let matching: Vec<Value> = state
        .pending
        .iter()
        .filter(|user| {
            search.is_empty()
                || user["username"]
                    .as_str()
                    .is_some_and(|name| name.contains(&search))
        })
        .cloned()
        .collect();
    let total = matching.len();
    let total_pages = total.div_ceil(limit);
    let rows: Vec<Value> = matching
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    Json(json!({
        "pendingUsers": rows,
        "total": total,
        "page": page,
        "totalPages": total_pages,
    }))
    .into_response()
}

async fn decide(
    State(state): State<Shared>,
    Path((decision, id)): Path<(String, String)>,
) -> Response {
    let mut state = lock(&state);
    let before = state.pending.len();
    state.pending.retain(|user| user["_id"] != id.as_str());
    if state.pending.len() == before {
        return message(StatusCode::NOT_FOUND, "Nie znaleziono wniosku");
    }
    state.decisions.push((decision, id));
    Json(json!({ "message": "ok" })).into_response()
}

async fn register_pending(State(state): State<Shared>, Json(form): Json<Value>) -> Response {
    let mut state = lock(&state);
    let email = form["email"].as_str().unwrap_or_default().to_string();
    if state.registered_emails.contains(&email) {
        return message(StatusCode::CONFLICT, "Email jest już zajęty");
    }
    state.registered_emails.push(email);
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Wniosek przyjęty" })),
    )
        .into_response()
}

pub fn pending_user(n: usize) -> Value {
    json!({
        "_id": format!("p{n}"),
        "username": format!("user-{n}"),
        "email": format!("user{n}@example.com"),
        "role": "author",
    })
}

/// Notifier that records toasts and answers confirmations with a fixed value.
pub struct RecordingNotifier {
    answer: bool,
    toasts: Mutex<Vec<(String, ToastKind)>>,
    prompts: Mutex<Vec<ConfirmPrompt>>,
}

impl RecordingNotifier {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            toasts: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.toasts.lock().expect("toasts poisoned").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.toasts()
            .into_iter()
            .filter(|(_, kind)| *kind == ToastKind::Error)
            .map(|(message, _)| message)
            .collect()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().expect("prompts poisoned").len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn toast(&self, message: &str, kind: ToastKind) {
        self.toasts
            .lock()
            .expect("toasts poisoned")
            .push((message.to_string(), kind));
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        self.prompts.lock().expect("prompts poisoned").push(prompt);
        self.answer
    }
}

#[derive(Default)]
pub struct RecordingLikeView {
    renders: Mutex<Vec<LikeViewModel>>,
    enabled: Mutex<Vec<bool>>,
}

impl RecordingLikeView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn renders(&self) -> Vec<LikeViewModel> {
        self.renders.lock().expect("renders poisoned").clone()
    }

    pub fn enabled_history(&self) -> Vec<bool> {
        self.enabled.lock().expect("enabled poisoned").clone()
    }
}

impl LikeView for RecordingLikeView {
    fn render(&self, model: &LikeViewModel) {
        self.renders
            .lock()
            .expect("renders poisoned")
            .push(model.clone());
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.lock().expect("enabled poisoned").push(enabled);
    }
}
