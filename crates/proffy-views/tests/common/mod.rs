use std::{
    collections::VecDeque,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Router,
    extract::{RawQuery, State},
    http::StatusCode,
    routing::get,
};
use proffy_api::{SearchError, TeacherSearch};
use proffy_core::{FilterCriteria, Teacher};
use proffy_store::{FAVORITES_KEY, FavoritesReader, FavoritesStorage, KeyValueStore, MemoryStore};
use proffy_views::{Alert, Notifier};
use tokio::sync::oneshot;

pub type SearchResult = Result<Vec<Teacher>, SearchError>;

/// Shared, ordered log of collaborator calls
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn push(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

pub fn teacher(id: i64) -> Teacher {
    Teacher::new(id, format!("Teacher {id}"))
}

pub fn favorites_json(ids: &[i64]) -> String {
    let teachers: Vec<Teacher> = ids.iter().map(|id| teacher(*id)).collect();
    serde_json::to_string(&teachers).unwrap()
}

/// Favorites reader over a memory store, logging every read.
///
/// Clones share the same store and log.
#[derive(Clone)]
pub struct LoggedFavorites {
    inner: Arc<FavoritesStorage<MemoryStore>>,
    log: CallLog,
}

impl LoggedFavorites {
    pub fn new(favorites: Option<&str>, log: CallLog) -> Self {
        let store = match favorites {
            Some(raw) => MemoryStore::with_items([(FAVORITES_KEY, raw)]),
            None => MemoryStore::new(),
        };
        Self {
            inner: Arc::new(FavoritesStorage::new(store)),
            log,
        }
    }

    /// Replace the persisted favorites, as another screen would
    pub async fn persist(&self, raw: &str) {
        self.inner.store().set_item(FAVORITES_KEY, raw).await.unwrap();
    }
}

impl FavoritesReader for LoggedFavorites {
    async fn read(&self, key: &str) -> Option<Vec<Teacher>> {
        self.log.push("read_favorites");
        self.inner.read(key).await
    }
}

/// Search answering from a queue of scripted results.
///
/// Clones share the same queue.
#[derive(Clone)]
pub struct ScriptedSearch {
    results: Arc<Mutex<VecDeque<SearchResult>>>,
    criteria: Arc<Mutex<Vec<FilterCriteria>>>,
    log: CallLog,
}

impl ScriptedSearch {
    pub fn new(results: Vec<SearchResult>, log: CallLog) -> Self {
        Self {
            results: Arc::new(Mutex::new(results.into())),
            criteria: Arc::new(Mutex::new(Vec::new())),
            log,
        }
    }

    /// Criteria of every search issued so far
    pub fn criteria(&self) -> Vec<FilterCriteria> {
        self.criteria.lock().unwrap().clone()
    }
}

impl TeacherSearch for ScriptedSearch {
    async fn search(&self, criteria: &FilterCriteria) -> SearchResult {
        self.log.push("search");
        self.criteria.lock().unwrap().push(criteria.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .expect("Unexpected search call")
    }
}

/// Search whose responses are released by the test, one gate per call.
///
/// Clones share the same gates.
#[derive(Clone)]
pub struct GatedSearch {
    gates: Arc<Mutex<VecDeque<oneshot::Receiver<SearchResult>>>>,
    issued: Arc<AtomicUsize>,
}

impl GatedSearch {
    /// Create a search expecting `calls` calls, with the senders releasing
    /// them in call order
    pub fn new(calls: usize) -> (Self, Vec<oneshot::Sender<SearchResult>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..calls).map(|_| oneshot::channel()).unzip();
        let search = Self {
            gates: Arc::new(Mutex::new(receivers)),
            issued: Arc::new(AtomicUsize::new(0)),
        };
        (search, senders)
    }

    /// Number of searches issued so far
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    /// Yield until `count` searches are waiting on their gate
    pub async fn wait_issued(&self, count: usize) {
        while self.issued() < count {
            tokio::task::yield_now().await;
        }
    }
}

impl TeacherSearch for GatedSearch {
    async fn search(&self, _criteria: &FilterCriteria) -> SearchResult {
        let gate = self
            .gates
            .lock()
            .unwrap()
            .pop_front()
            .expect("Unexpected search call");
        self.issued.fetch_add(1, Ordering::SeqCst);
        gate.await.expect("Gate dropped")
    }
}

/// Notifier remembering every alert
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, alert: &Alert) {
        self.alerts.lock().unwrap().push(*alert);
    }
}

pub fn server_error() -> SearchError {
    SearchError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A local `GET /classes` server answering with a fixed status and body,
/// recording raw query strings.
pub struct MockClassesServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<Option<String>>>>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    queries: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockClassesServer {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.to_string(),
            queries: queries.clone(),
        };

        let app = Router::new()
            .route("/classes", get(list_classes))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock server failed");
        });

        Self { addr, queries }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn queries(&self) -> Vec<Option<String>> {
        self.queries.lock().unwrap().clone()
    }
}

async fn list_classes(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
) -> (StatusCode, String) {
    state.queries.lock().unwrap().push(query);
    (state.status, state.body.clone())
}
