//! In-memory stand-in for the Security and Compliance Center services.
//!
//! Serves a working subset of each API (profiles and scans, governance
//! rules with ETag concurrency, notification channels, findings notes and
//! occurrences), an IAM token endpoint, and `GET /_mock/requests`, which
//! lists every request received so tests can assert on exact headers and
//! bodies.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// One request as the server saw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Default)]
struct Store {
    profiles: HashMap<String, Value>,
    rules: HashMap<String, Versioned>,
    channels: HashMap<String, Value>,
    notes: HashMap<String, Value>,
    occurrences: HashMap<String, Value>,
}

/// A stored document and the revision its ETag is derived from.
#[derive(Debug, Clone)]
struct Versioned {
    doc: Value,
    revision: u64,
}

impl Versioned {
    fn etag(&self) -> String {
        format!("\"{}\"", self.revision)
    }
}

#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

/// Error body in the `{"errors":[{"code","message"}]}` shape the services use.
#[derive(Debug)]
struct MockError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl MockError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn not_found(what: &str, id: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", format!("{what} {id} not found"))
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", message)
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let body = json!({
            "errors": [{"code": self.code, "message": self.message}],
            "status_code": self.status.as_u16(),
        });
        (self.status, Json(body)).into_response()
    }
}

type Reply = Result<Response, MockError>;

pub fn app() -> Router {
    app_with_state(AppState::default())
}

pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/identity/token", post(issue_token))
        .route("/_mock/requests", get(list_requests).delete(clear_requests))
        .merge(compliance_routes())
        .merge(governance_routes())
        .nest("/notifications", notification_routes())
        .nest("/findings", findings_routes())
        .fallback(echo)
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn record(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return MockError::bad_request(format!("unreadable body: {err}")).into_response()
        }
    };
    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        uri: parts.uri.to_string(),
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    };
    debug!(method = %recorded.method, uri = %recorded.uri, "request");
    if recorded.uri != "/_mock/requests" {
        state.requests.write().await.push(recorded);
    }
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

async fn list_requests(State(state): State<AppState>) -> Json<Vec<RecordedRequest>> {
    Json(state.requests.read().await.clone())
}

async fn clear_requests(State(state): State<AppState>) -> StatusCode {
    state.requests.write().await.clear();
    StatusCode::NO_CONTENT
}

/// Unknown routes reflect the request back so tests can inspect URL shaping.
async fn echo(request: Request) -> Response {
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .map(|b| String::from_utf8_lossy(&b).into_owned())
        .unwrap_or_default();
    Json(json!({"method": method, "uri": uri, "body": body})).into_response()
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Merge `id_field: id` into a JSON object body.
fn with_id(mut doc: Value, id_field: &str, id: &str) -> Value {
    if let Value::Object(map) = &mut doc {
        map.insert(id_field.to_string(), Value::String(id.to_string()));
    }
    doc
}

fn require_object(body: &Value) -> Result<&Map<String, Value>, MockError> {
    body.as_object()
        .ok_or_else(|| MockError::bad_request("body must be a JSON object"))
}

fn require_fields(body: &Value, fields: &[&str]) -> Result<(), MockError> {
    let object = require_object(body)?;
    let missing: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|f| object.get(*f).map_or(true, Value::is_null))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MockError::bad_request(format!(
            "missing fields: {}",
            missing.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// IAM
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub grant_type: Option<String>,
    pub apikey: Option<String>,
    pub response_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub expiration: u64,
}

async fn issue_token(Form(form): Form<TokenForm>) -> Result<Json<TokenResponse>, MockError> {
    if form.grant_type.as_deref() != Some("urn:ibm:params:oauth:grant-type:apikey") {
        return Err(MockError::bad_request("unsupported grant_type"));
    }
    let Some(apikey) = form.apikey.filter(|k| !k.is_empty()) else {
        return Err(MockError::new(
            StatusCode::BAD_REQUEST,
            "BXNIM0415E",
            "Provided API key could not be found",
        ));
    };
    debug!(response_type = ?form.response_type, "issuing token");
    let expires_in = 3600;
    Ok(Json(TokenResponse {
        access_token: format!("token-for-{apikey}"),
        refresh_token: new_id(),
        token_type: "Bearer".into(),
        expires_in,
        expiration: now_secs() + expires_in,
    }))
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

fn compliance_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/instances/{instance_id}/v3/profiles",
            get(list_profiles).post(create_profile),
        )
        .route(
            "/instances/{instance_id}/v3/profiles/{profiles_id}",
            get(get_profile).put(replace_profile).delete(delete_profile),
        )
        .route("/instances/{instance_id}/v3/scans", post(create_scan))
}

fn profile_key(instance_id: &str, profile_id: &str) -> String {
    format!("{instance_id}/{profile_id}")
}

async fn list_profiles(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let store = state.store.read().await;
    let prefix = format!("{instance_id}/");
    let profiles: Vec<Value> = store
        .profiles
        .iter()
        .filter(|(key, _)| key.starts_with(&prefix))
        .map(|(_, doc)| doc.clone())
        .filter(|doc| match query.get("profile_type") {
            Some(kind) => doc["profile_type"] == Value::String(kind.clone()),
            None => true,
        })
        .collect();
    Json(json!({
        "total_count": profiles.len(),
        "limit": query.get("limit").and_then(|l| l.parse::<u64>().ok()).unwrap_or(50),
        "profiles": profiles,
    }))
}

async fn create_profile(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    require_fields(&body, &["profile_name", "profile_type"])?;
    let id = new_id();
    let mut profile = with_id(body, "id", &id);
    if let Value::Object(map) = &mut profile {
        map.insert("instance_id".into(), Value::String(instance_id.clone()));
        let count = map.get("controls").and_then(Value::as_array).map_or(0, Vec::len);
        map.insert("controls_count".into(), json!(count));
    }
    state
        .store
        .write()
        .await
        .profiles
        .insert(profile_key(&instance_id, &id), profile.clone());
    Ok((StatusCode::CREATED, Json(profile)).into_response())
}

async fn get_profile(
    State(state): State<AppState>,
    Path((instance_id, profile_id)): Path<(String, String)>,
) -> Reply {
    let store = state.store.read().await;
    store
        .profiles
        .get(&profile_key(&instance_id, &profile_id))
        .map(|doc| Json(doc.clone()).into_response())
        .ok_or_else(|| MockError::not_found("profile", &profile_id))
}

async fn replace_profile(
    State(state): State<AppState>,
    Path((instance_id, profile_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Reply {
    require_fields(&body, &["profile_name", "profile_type"])?;
    let mut store = state.store.write().await;
    let slot = store
        .profiles
        .get_mut(&profile_key(&instance_id, &profile_id))
        .ok_or_else(|| MockError::not_found("profile", &profile_id))?;
    let mut replaced = with_id(body, "id", &profile_id);
    if let Value::Object(map) = &mut replaced {
        map.insert("instance_id".into(), Value::String(instance_id));
    }
    *slot = replaced.clone();
    Ok(Json(replaced).into_response())
}

async fn delete_profile(
    State(state): State<AppState>,
    Path((instance_id, profile_id)): Path<(String, String)>,
) -> Reply {
    state
        .store
        .write()
        .await
        .profiles
        .remove(&profile_key(&instance_id, &profile_id))
        .map(|doc| Json(doc).into_response())
        .ok_or_else(|| MockError::not_found("profile", &profile_id))
}

async fn create_scan(Path(instance_id): Path<String>, Json(body): Json<Value>) -> Reply {
    require_fields(&body, &["attachment_id"])?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": new_id(),
            "account_id": instance_id,
            "attachment_id": body["attachment_id"],
            "status": "in_progress",
            "scan_type": "ondemand",
        })),
    )
        .into_response())
}

// ---------------------------------------------------------------------------
// Configuration governance
// ---------------------------------------------------------------------------

fn governance_routes() -> Router<AppState> {
    Router::new()
        .route("/config/v1/rules", get(list_rules).post(create_rules))
        .route(
            "/config/v1/rules/{rule_id}",
            get(get_rule).put(update_rule).delete(delete_rule),
        )
}

async fn create_rules(State(state): State<AppState>, Json(body): Json<Value>) -> Reply {
    let requests = body
        .get("rules")
        .and_then(Value::as_array)
        .ok_or_else(|| MockError::bad_request("rules must be an array"))?;

    let mut store = state.store.write().await;
    let results: Vec<Value> = requests
        .iter()
        .map(|request| {
            let request_id = request.get("request_id").cloned().unwrap_or(Value::Null);
            match request.get("rule") {
                Some(rule) if rule.is_object() => {
                    let id = format!("rule-{}", new_id());
                    let doc = with_id(rule.clone(), "rule_id", &id);
                    store.rules.insert(
                        id,
                        Versioned {
                            doc: doc.clone(),
                            revision: 1,
                        },
                    );
                    json!({"request_id": request_id, "status_code": 201, "rule": doc})
                }
                _ => json!({
                    "request_id": request_id,
                    "status_code": 400,
                    "errors": [{"code": "bad_request", "message": "rule is required"}],
                }),
            }
        })
        .collect();
    Ok((StatusCode::CREATED, Json(json!({"rules": results}))).into_response())
}

async fn list_rules(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    let account_id = query
        .get("account_id")
        .ok_or_else(|| MockError::bad_request("account_id is required"))?;
    let store = state.store.read().await;
    let rules: Vec<Value> = store
        .rules
        .values()
        .map(|v| v.doc.clone())
        .filter(|doc| doc["account_id"] == Value::String(account_id.clone()))
        .collect();
    Ok(Json(json!({
        "offset": 0,
        "limit": rules.len(),
        "total_count": rules.len(),
        "rules": rules,
    }))
    .into_response())
}

fn with_etag(versioned: &Versioned) -> Response {
    let mut response = Json(versioned.doc.clone()).into_response();
    if let Ok(value) = versioned.etag().parse() {
        response.headers_mut().insert(header::ETAG, value);
    }
    response
}

async fn get_rule(State(state): State<AppState>, Path(rule_id): Path<String>) -> Reply {
    let store = state.store.read().await;
    store
        .rules
        .get(&rule_id)
        .map(with_etag)
        .ok_or_else(|| MockError::not_found("rule", &rule_id))
}

async fn update_rule(
    State(state): State<AppState>,
    Path(rule_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let if_match = headers
        .get(header::IF_MATCH)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| MockError::bad_request("If-Match header is required"))?;

    let mut store = state.store.write().await;
    let current = store
        .rules
        .get_mut(&rule_id)
        .ok_or_else(|| MockError::not_found("rule", &rule_id))?;
    if if_match != current.etag() {
        return Err(MockError::new(
            StatusCode::PRECONDITION_FAILED,
            "precondition_failed",
            format!("rule {rule_id} was modified; expected {}", current.etag()),
        ));
    }
    current.doc = with_id(body, "rule_id", &rule_id);
    current.revision += 1;
    Ok(with_etag(current))
}

async fn delete_rule(State(state): State<AppState>, Path(rule_id): Path<String>) -> Reply {
    state
        .store
        .write()
        .await
        .rules
        .remove(&rule_id)
        .map(|_| StatusCode::NO_CONTENT.into_response())
        .ok_or_else(|| MockError::not_found("rule", &rule_id))
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/{account_id}/notifications/channels",
            get(list_channels)
                .post(create_channel)
                .delete(delete_channels),
        )
        .route(
            "/v1/{account_id}/notifications/channels/{channel_id}",
            get(get_channel).put(update_channel).delete(delete_channel),
        )
        .route(
            "/v1/{account_id}/notifications/channels/{channel_id}/test",
            get(test_channel),
        )
        .route("/v1/{account_id}/notifications/public_key", get(public_key))
}

fn channel_key(account_id: &str, channel_id: &str) -> String {
    format!("{account_id}/{channel_id}")
}

async fn list_channels(State(state): State<AppState>, Path(account_id): Path<String>) -> Json<Value> {
    let store = state.store.read().await;
    let prefix = format!("{account_id}/");
    let channels: Vec<Value> = store
        .channels
        .iter()
        .filter(|(key, _)| key.starts_with(&prefix))
        .map(|(_, doc)| doc.clone())
        .collect();
    Json(json!({"channels": channels}))
}

async fn create_channel(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    require_fields(&body, &["name", "type", "endpoint"])?;
    let id = new_id();
    let doc = with_id(body, "channel_id", &id);
    state
        .store
        .write()
        .await
        .channels
        .insert(channel_key(&account_id, &id), doc);
    Ok(Json(json!({"channel_id": id, "status_code": 200})).into_response())
}

async fn delete_channels(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Json(ids): Json<Vec<String>>,
) -> Json<Value> {
    let mut store = state.store.write().await;
    let removed = ids
        .iter()
        .filter(|id| store.channels.remove(&channel_key(&account_id, id)).is_some())
        .count();
    Json(json!({"message": format!("Deleted {removed} channels")}))
}

async fn get_channel(
    State(state): State<AppState>,
    Path((account_id, channel_id)): Path<(String, String)>,
) -> Reply {
    let store = state.store.read().await;
    store
        .channels
        .get(&channel_key(&account_id, &channel_id))
        .map(|doc| Json(json!({"channel": doc})).into_response())
        .ok_or_else(|| MockError::not_found("channel", &channel_id))
}

async fn update_channel(
    State(state): State<AppState>,
    Path((account_id, channel_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Reply {
    require_fields(&body, &["name", "type", "endpoint"])?;
    let mut store = state.store.write().await;
    let slot = store
        .channels
        .get_mut(&channel_key(&account_id, &channel_id))
        .ok_or_else(|| MockError::not_found("channel", &channel_id))?;
    *slot = with_id(body, "channel_id", &channel_id);
    Ok(Json(json!({"channel_id": channel_id, "status_code": 200})).into_response())
}

async fn delete_channel(
    State(state): State<AppState>,
    Path((account_id, channel_id)): Path<(String, String)>,
) -> Reply {
    state
        .store
        .write()
        .await
        .channels
        .remove(&channel_key(&account_id, &channel_id))
        .map(|_| {
            Json(json!({"channel_id": channel_id, "message": "Channel deleted"})).into_response()
        })
        .ok_or_else(|| MockError::not_found("channel", &channel_id))
}

async fn test_channel(
    State(state): State<AppState>,
    Path((account_id, channel_id)): Path<(String, String)>,
) -> Reply {
    let store = state.store.read().await;
    if !store.channels.contains_key(&channel_key(&account_id, &channel_id)) {
        return Err(MockError::not_found("channel", &channel_id));
    }
    Ok(Json(json!({"test": "success"})).into_response())
}

async fn public_key(Path(account_id): Path<String>) -> Json<Value> {
    Json(json!({
        "publicKey": format!("-----BEGIN PUBLIC KEY-----\n{account_id}\n-----END PUBLIC KEY-----")
    }))
}

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

fn findings_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/{account_id}/graph", post(post_graph))
        .route(
            "/v1/{account_id}/providers/{provider_id}/notes",
            get(list_notes).post(create_note),
        )
        .route(
            "/v1/{account_id}/providers/{provider_id}/notes/{note_id}",
            get(get_note).delete(delete_note),
        )
        .route(
            "/v1/{account_id}/providers/{provider_id}/occurrences",
            post(create_occurrence),
        )
        .route(
            "/v1/{account_id}/providers/{provider_id}/occurrences/{occurrence_id}",
            get(get_occurrence),
        )
}

/// Reports the content type and raw query it was given.
async fn post_graph(headers: HeaderMap, body: String) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    Json(json!({"data": {"content_type": content_type, "query": body}}))
}

fn note_key(account_id: &str, provider_id: &str, note_id: &str) -> String {
    format!("{account_id}/{provider_id}/{note_id}")
}

async fn create_note(
    State(state): State<AppState>,
    Path((account_id, provider_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Reply {
    require_fields(
        &body,
        &["short_description", "long_description", "kind", "id", "reported_by"],
    )?;
    let id = body["id"].as_str().unwrap_or_default().to_string();
    let key = note_key(&account_id, &provider_id, &id);
    let mut store = state.store.write().await;
    if store.notes.contains_key(&key) {
        return Err(MockError::new(
            StatusCode::CONFLICT,
            "conflict",
            format!("note {id} already exists"),
        ));
    }
    store.notes.insert(key, body.clone());
    Ok(Json(body).into_response())
}

async fn list_notes(
    State(state): State<AppState>,
    Path((account_id, provider_id)): Path<(String, String)>,
) -> Json<Value> {
    let store = state.store.read().await;
    let prefix = format!("{account_id}/{provider_id}/");
    let notes: Vec<Value> = store
        .notes
        .iter()
        .filter(|(key, _)| key.starts_with(&prefix))
        .map(|(_, doc)| doc.clone())
        .collect();
    Json(json!({"notes": notes}))
}

async fn get_note(
    State(state): State<AppState>,
    Path((account_id, provider_id, note_id)): Path<(String, String, String)>,
) -> Reply {
    let store = state.store.read().await;
    store
        .notes
        .get(&note_key(&account_id, &provider_id, &note_id))
        .map(|doc| Json(doc.clone()).into_response())
        .ok_or_else(|| MockError::not_found("note", &note_id))
}

async fn delete_note(
    State(state): State<AppState>,
    Path((account_id, provider_id, note_id)): Path<(String, String, String)>,
) -> Reply {
    state
        .store
        .write()
        .await
        .notes
        .remove(&note_key(&account_id, &provider_id, &note_id))
        .map(|_| StatusCode::OK.into_response())
        .ok_or_else(|| MockError::not_found("note", &note_id))
}

/// Conflicts on an existing id unless `Replace-If-Exists: true` is sent.
async fn create_occurrence(
    State(state): State<AppState>,
    Path((account_id, provider_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    require_fields(&body, &["note_name", "kind", "id"])?;
    let replace = headers
        .get("Replace-If-Exists")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    let id = body["id"].as_str().unwrap_or_default().to_string();
    let key = note_key(&account_id, &provider_id, &id);

    let mut store = state.store.write().await;
    if store.occurrences.contains_key(&key) && !replace {
        return Err(MockError::new(
            StatusCode::CONFLICT,
            "conflict",
            format!("occurrence {id} already exists"),
        ));
    }
    store.occurrences.insert(key, body.clone());
    Ok(Json(body).into_response())
}

async fn get_occurrence(
    State(state): State<AppState>,
    Path((account_id, provider_id, occurrence_id)): Path<(String, String, String)>,
) -> Reply {
    let store = state.store.read().await;
    store
        .occurrences
        .get(&note_key(&account_id, &provider_id, &occurrence_id))
        .map(|doc| Json(doc.clone()).into_response())
        .ok_or_else(|| MockError::not_found("occurrence", &occurrence_id))
}
