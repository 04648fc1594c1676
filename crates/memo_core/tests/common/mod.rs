#![allow(dead_code)]

use async_trait::async_trait;
use memo_core::{
    Category, CategoryId, FallbackPolicy, Memo, MemoApp, MemoDraft, MemoId, NewMemo,
    RemoteFailure, RemoteResult, RemoteStore, Snapshot, ViewProjector,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub const VALID_TOKEN: &str = "123e4567-e89b-42d3-a456-426614174000";

/// In-memory store with failure injection and per-call gates.
///
/// Call keys look like `list_memos:2` or `get_memo:10`.
#[derive(Default)]
pub struct ScriptedStore {
    inner: Mutex<Inner>,
    fail_all: AtomicBool,
}

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    memos: Vec<Memo>,
    next_id: i64,
    failing: Vec<String>,
    gates: HashMap<String, oneshot::Receiver<()>>,
    calls: Vec<String>,
}

impl ScriptedStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Three categories; category 1 has two memos, category 2 has one.
    pub fn seeded() -> Arc<Self> {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().unwrap();
            inner.categories = vec![
                Category::new(1, "Personal"),
                Category::new(2, "Restaurants"),
                Category::new(3, "Work"),
            ];
            inner.memos = vec![
                Memo::new(1, Some(CategoryId(1)), "Groceries", "milk, eggs"),
                Memo::new(2, Some(CategoryId(1)), "Books", "to read"),
                Memo::new(3, Some(CategoryId(2)), "Noodle Bar", "open late"),
            ];
            inner.next_id = 100;
        }
        store
    }

    pub fn fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    /// Makes every call with this key fail.
    pub fn fail_on(&self, key: &str) {
        self.inner.lock().unwrap().failing.push(key.to_string());
    }

    pub fn set_next_id(&self, next_id: i64) {
        self.inner.lock().unwrap().next_id = next_id;
    }

    /// Holds the next call with this key until the sender fires.
    pub fn gate(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.lock().unwrap().gates.insert(key.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn stored_memo(&self, memo_id: i64) -> Option<Memo> {
        self.inner
            .lock()
            .unwrap()
            .memos
            .iter()
            .find(|memo| memo.id == MemoId(memo_id))
            .cloned()
    }

    async fn enter(&self, key: String) -> RemoteResult<()> {
        let gate = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(key.clone());
            inner.gates.remove(&key)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let failing = self.inner.lock().unwrap().failing.contains(&key);
        if failing || self.fail_all.load(Ordering::SeqCst) {
            return Err(RemoteFailure::Status(503));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for ScriptedStore {
    async fn list_categories(&self) -> RemoteResult<Vec<Category>> {
        self.enter("list_categories".to_string()).await?;
        Ok(self.inner.lock().unwrap().categories.clone())
    }

    async fn list_memos(&self, category_id: CategoryId) -> RemoteResult<Vec<Memo>> {
        self.enter(format!("list_memos:{category_id}")).await?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .memos
            .iter()
            .filter(|memo| memo.category_id == Some(category_id))
            .cloned()
            .collect())
    }

    async fn get_memo(&self, memo_id: MemoId) -> RemoteResult<Memo> {
        self.enter(format!("get_memo:{memo_id}")).await?;
        self.inner
            .lock()
            .unwrap()
            .memos
            .iter()
            .find(|memo| memo.id == memo_id)
            .cloned()
            .ok_or(RemoteFailure::Status(404))
    }

    async fn create_memo(&self, payload: &NewMemo) -> RemoteResult<Memo> {
        self.enter(format!("create_memo:{}", payload.category_id))
            .await?;
        let mut inner = self.inner.lock().unwrap();
        let memo = payload.clone().into_memo(MemoId(inner.next_id));
        inner.next_id += 1;
        inner.memos.push(memo.clone());
        Ok(memo)
    }

    async fn update_memo(&self, memo_id: MemoId, payload: &MemoDraft) -> RemoteResult<()> {
        self.enter(format!("update_memo:{memo_id}")).await?;
        let mut inner = self.inner.lock().unwrap();
        let memo = inner
            .memos
            .iter_mut()
            .find(|memo| memo.id == memo_id)
            .ok_or(RemoteFailure::Status(404))?;
        memo.apply(payload);
        Ok(())
    }

    async fn delete_memo(&self, memo_id: MemoId) -> RemoteResult<()> {
        self.enter(format!("delete_memo:{memo_id}")).await?;
        self.inner
            .lock()
            .unwrap()
            .memos
            .retain(|memo| memo.id != memo_id);
        Ok(())
    }
}

/// Projector keeping every rendered snapshot.
#[derive(Default)]
pub struct RecordingProjector {
    snapshots: Mutex<Vec<Snapshot>>,
}

impl RecordingProjector {
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshots.lock().unwrap().clone()
    }

    pub fn last(&self) -> Snapshot {
        self.snapshots
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one snapshot rendered")
    }
}

impl ViewProjector for RecordingProjector {
    fn render(&self, snapshot: &Snapshot) {
        self.snapshots.lock().unwrap().push(snapshot.clone());
    }
}

pub fn app_with(
    store: Arc<ScriptedStore>,
    policy: FallbackPolicy,
) -> (MemoApp, Arc<RecordingProjector>) {
    let projector = Arc::new(RecordingProjector::default());
    let app = MemoApp::new(store, projector.clone(), policy);
    (app, projector)
}

/// Logs in and returns an app with categories loaded.
pub async fn logged_in(
    store: Arc<ScriptedStore>,
    policy: FallbackPolicy,
) -> (MemoApp, Arc<RecordingProjector>) {
    let (app, projector) = app_with(store, policy);
    app.session().login(VALID_TOKEN).await;
    (app, projector)
}

pub fn titles(snapshot: &Snapshot) -> Vec<&str> {
    snapshot.memos.iter().map(|memo| memo.title.as_str()).collect()
}
