// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClientConfig, ClientError, EntityApi, HttpEntityApi};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tab_admin_domain::{ActionRequest, CellValue, EntityId, EntityKind, EntityRecord};
use tokio::sync::{Mutex, Notify, oneshot};

pub type FetchReply = Result<Vec<EntityRecord>, ClientError>;
pub type SubmitReply = Result<(), ClientError>;

/// Creates grid records with the given ids, in order.
pub fn create_test_records(ids: &[i64]) -> Vec<EntityRecord> {
    ids.iter()
        .map(|id| {
            EntityRecord::new(EntityId::new(*id))
                .with("lastName", CellValue::Text(format!("Speaker {id}")))
                .with("roundsDebated", CellValue::Integer(id * 3))
        })
        .collect()
}

pub fn record_ids(records: &[EntityRecord]) -> Vec<i64> {
    records.iter().map(|record| record.id.value()).collect()
}

pub fn create_test_status_error(status: u16) -> ClientError {
    ClientError::Status {
        status,
        body: String::from("boom"),
    }
}

/// An [`EntityApi`] whose answers are handed over by the test.
///
/// Each call takes the next scripted reply. Replies can be sent up front or
/// held back to control when the call completes.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    fetches: Mutex<VecDeque<oneshot::Receiver<FetchReply>>>,
    submits: Mutex<VecDeque<oneshot::Receiver<SubmitReply>>>,
    sent: Mutex<Vec<ActionRequest>>,
    fetch_calls: AtomicUsize,
    pub fetch_started: Notify,
    pub submit_started: Notify,
}

impl ScriptedApi {
    pub async fn hold_fetch(&self) -> oneshot::Sender<FetchReply> {
        let (tx, rx) = oneshot::channel();
        self.fetches.lock().await.push_back(rx);
        tx
    }

    pub async fn reply_fetch(&self, reply: FetchReply) {
        self.hold_fetch().await.send(reply).unwrap();
    }

    pub async fn hold_submit(&self) -> oneshot::Sender<SubmitReply> {
        let (tx, rx) = oneshot::channel();
        self.submits.lock().await.push_back(rx);
        tx
    }

    pub async fn reply_submit(&self, reply: SubmitReply) {
        self.hold_submit().await.send(reply).unwrap();
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub async fn sent(&self) -> Vec<ActionRequest> {
        self.sent.lock().await.clone()
    }
}

impl EntityApi for ScriptedApi {
    async fn fetch_collection(&self, _kind: EntityKind) -> FetchReply {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let reply: oneshot::Receiver<FetchReply> = self
            .fetches
            .lock()
            .await
            .pop_front()
            .expect("unscripted fetch");
        self.fetch_started.notify_one();
        reply.await.expect("fetch reply dropped")
    }

    async fn submit(&self, request: &ActionRequest) -> SubmitReply {
        self.sent.lock().await.push(request.clone());
        let reply: oneshot::Receiver<SubmitReply> = self
            .submits
            .lock()
            .await
            .pop_front()
            .expect("unscripted submit");
        self.submit_started.notify_one();
        reply.await.expect("submit reply dropped")
    }
}

/// A bulk action the fake backend received.
#[derive(Debug, Clone)]
pub struct ReceivedAction {
    pub path: String,
    pub content_type: Option<String>,
    pub body: Value,
}

/// In-process stand-in for the tournament API.
#[derive(Debug)]
pub struct FakeBackend {
    /// Keyed by `resource/list-path`.
    pub collections: HashMap<String, Value>,
    pub list_status: StatusCode,
    pub action_status: StatusCode,
    pub list_requests: usize,
    pub actions: Vec<ReceivedAction>,
}

impl FakeBackend {
    pub fn with_collection(kind: EntityKind, rows: Value) -> Self {
        let mut collections: HashMap<String, Value> = HashMap::new();
        collections.insert(format!("{}/{}", kind.resource(), kind.list_path()), rows);
        Self {
            collections,
            list_status: StatusCode::OK,
            action_status: StatusCode::OK,
            list_requests: 0,
            actions: Vec::new(),
        }
    }
}

type SharedBackend = Arc<Mutex<FakeBackend>>;

async fn list_handler(
    State(backend): State<SharedBackend>,
    Path((resource, path)): Path<(String, String)>,
) -> Response {
    let mut backend = backend.lock().await;
    backend.list_requests += 1;
    if !backend.list_status.is_success() {
        return (backend.list_status, "list unavailable").into_response();
    }
    match backend.collections.get(&format!("{resource}/{path}")) {
        Some(rows) => Json(rows.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn action_handler(
    State(backend): State<SharedBackend>,
    Path((resource, path)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut backend = backend.lock().await;
    backend.actions.push(ReceivedAction {
        path: format!("{resource}/{path}"),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    if backend.action_status.is_success() {
        StatusCode::OK.into_response()
    } else {
        (backend.action_status, "boom").into_response()
    }
}

/// Serves `backend` on an ephemeral local port.
///
/// Returns the API base URL and a handle for inspecting what was received.
pub async fn spawn_backend(backend: FakeBackend) -> (String, SharedBackend) {
    let shared: SharedBackend = Arc::new(Mutex::new(backend));
    let app: Router = Router::new()
        .route(
            "/api/v1/{resource}/{path}",
            get(list_handler).post(action_handler),
        )
        .with_state(Arc::clone(&shared));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api/v1"), shared)
}

pub fn create_http_api(base_url: &str) -> HttpEntityApi {
    HttpEntityApi::new(ClientConfig::new(base_url, Duration::from_secs(5)).unwrap()).unwrap()
}
