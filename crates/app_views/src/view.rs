//! Generic reactive view engine
//!
//! A `View` wraps a query over the store ports, a change-feed subscription,
//! and a background task that re-runs the query on every matching event.
//! Refetch ordering is not guaranteed by the store, so applied results carry
//! a generation number and the view keeps whichever completed fetch is the
//! most recently started one ("last write to the view wins").

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::warn;

use core_kernel::{ChangeFeed, ChangeSubscription, EntityKind, StoreError};

/// A full fetch + filter + aggregate pass over the store
#[async_trait]
pub trait ViewQuery: Send + Sync + 'static {
    /// The assembled view data (rows plus aggregates)
    type Output: Clone + Default + Send + Sync + 'static;

    /// Runs the complete pass
    async fn fetch(&self) -> Result<Self::Output, StoreError>;

    /// Entity kinds whose changes invalidate this view
    fn watched_kinds(&self) -> Vec<EntityKind>;
}

/// Snapshot of a view's current state
#[derive(Debug, Clone, Default)]
pub struct ViewState<T> {
    pub data: T,
    pub is_loading: bool,
}

struct Shared<T> {
    state: RwLock<ViewState<T>>,
    closed: AtomicBool,
    next_generation: AtomicU64,
    last_applied: AtomicU64,
}

impl<T: Clone + Default + Send + Sync> Shared<T> {
    fn new() -> Self {
        Self {
            state: RwLock::new(ViewState {
                data: T::default(),
                is_loading: true,
            }),
            closed: AtomicBool::new(false),
            next_generation: AtomicU64::new(0),
            last_applied: AtomicU64::new(0),
        }
    }

    /// Applies a completed fetch, unless the view closed or a more recently
    /// started fetch already landed.
    async fn apply(&self, generation: u64, result: Result<T, StoreError>) {
        if self.closed.load(Ordering::SeqCst) {
            // The view is gone; a late-resolving fetch must never touch it.
            return;
        }

        let mut state = self.state.write().await;
        state.is_loading = false;
        match result {
            Ok(data) => {
                if generation >= self.last_applied.load(Ordering::SeqCst) {
                    self.last_applied.store(generation, Ordering::SeqCst);
                    state.data = data;
                }
            }
            Err(error) => {
                // Previous rows stay on screen through transient failures.
                warn!(%error, "view refetch failed, keeping previous state");
            }
        }
    }
}

/// A live, store-synchronized view
///
/// Owns its subscription and background task; `close` (or drop) releases
/// both exactly once, however often it is called.
pub struct View<Q: ViewQuery> {
    query: Arc<Q>,
    shared: Arc<Shared<Q::Output>>,
    refetch_tx: mpsc::UnboundedSender<()>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<Q: ViewQuery> View<Q> {
    /// Opens the view: subscribes to the feed, runs the initial fetch, and
    /// starts reacting to change events.
    pub fn open(query: Q, feed: &dyn ChangeFeed) -> Self {
        let query = Arc::new(query);
        let shared = Arc::new(Shared::new());
        let subscription = feed.subscribe(&query.watched_kinds());
        let (refetch_tx, refetch_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run_loop(
            query.clone(),
            shared.clone(),
            subscription,
            refetch_rx,
        ));

        Self {
            query,
            shared,
            refetch_tx,
            task: Mutex::new(Some(task)),
        }
    }

    /// Returns the current rows, aggregates, and loading flag
    pub async fn snapshot(&self) -> ViewState<Q::Output> {
        self.shared.state.read().await.clone()
    }

    /// Whether a fetch is currently in flight
    pub async fn is_loading(&self) -> bool {
        self.shared.state.read().await.is_loading
    }

    /// Manually triggers a refetch
    ///
    /// A no-op once the view is closed.
    pub fn refetch(&self) {
        let _ = self.refetch_tx.send(());
    }

    /// Releases the subscription and stops the background task
    ///
    /// Idempotent: only the first call releases anything, so rapid
    /// open/close cycles cannot double-free the channel.
    pub fn close(&self) {
        if self.shared.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Ok(mut task) = self.task.lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }

    /// The query backing this view
    pub fn query(&self) -> &Q {
        &self.query
    }
}

impl<Q: ViewQuery> Drop for View<Q> {
    fn drop(&mut self) {
        self.close();
    }
}

async fn run_loop<Q: ViewQuery>(
    query: Arc<Q>,
    shared: Arc<Shared<Q::Output>>,
    mut subscription: ChangeSubscription,
    mut refetch_rx: mpsc::UnboundedReceiver<()>,
) {
    fetch_once(&query, &shared).await;

    loop {
        tokio::select! {
            event = subscription.changed() => {
                if event.is_none() {
                    // Feed closed; nothing will ever invalidate us again.
                    break;
                }
            }
            request = refetch_rx.recv() => {
                if request.is_none() {
                    break;
                }
            }
        }
        fetch_once(&query, &shared).await;
    }
}

async fn fetch_once<Q: ViewQuery>(query: &Arc<Q>, shared: &Arc<Shared<Q::Output>>) {
    let generation = shared.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
    if shared.closed.load(Ordering::SeqCst) {
        return;
    }
    shared.state.write().await.is_loading = true;
    let result = query.fetch().await;
    shared.apply(generation, result).await;
}
