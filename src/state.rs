//! Screen state and its one-writer / many-reader propagation.
//!
//! A [`StatePublisher`] owns the current [`ScreenState`] and broadcasts every
//! transition.  Views hold a [`Subscription`], which can read but never write.
//!
//! Transitions are never coalesced: a subscriber that is slow to look will
//! still see `Loading` before the `Success`/`Error` that follows it, unless it
//! falls more than [`CHANNEL_CAPACITY`] transitions behind, in which case it
//! resyncs to the current state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// Transitions retained for subscribers that have not caught up yet.
pub const CHANNEL_CAPACITY: usize = 64;

/// What a screen is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    Loading,
    /// The complete result of the most recent successful fetch.
    Success(Vec<T>),
    /// A human-readable failure description.
    Error(String),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

// ---------------------------------------------------------------------------
// Publisher
// ---------------------------------------------------------------------------

struct Slot<T> {
    state: ScreenState<T>,
    /// Id of the most recently started request.
    latest_request: u64,
}

/// Single writer for one screen's state.
pub struct StatePublisher<T> {
    slot: Mutex<Slot<T>>,
    tx: broadcast::Sender<ScreenState<T>>,
}

impl<T: Clone + Send + 'static> StatePublisher<T> {
    /// A publisher in the `Loading` state with no requests started.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            slot: Mutex::new(Slot {
                state: ScreenState::Loading,
                latest_request: 0,
            }),
            tx,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ScreenState<T> {
        self.lock().state.clone()
    }

    /// Subscribe, starting from the current state.
    ///
    /// The snapshot and the receiver are taken under the same lock, so no
    /// transition falls between them.
    pub fn subscribe(self: &Arc<Self>) -> Subscription<T> {
        let slot = self.lock();
        Subscription {
            current: slot.state.clone(),
            rx: self.tx.subscribe(),
            publisher: Arc::clone(self),
        }
    }

    /// Start a new request: publish `Loading` and return the request id.
    pub fn begin(&self) -> u64 {
        let mut slot = self.lock();
        slot.latest_request += 1;
        let id = slot.latest_request;
        self.publish(&mut slot, ScreenState::Loading);
        id
    }

    /// Publish the outcome of `request`.
    ///
    /// Returns `false`, leaving the state untouched, when a newer request has
    /// been started since.
    pub fn resolve(&self, request: u64, state: ScreenState<T>) -> bool {
        let mut slot = self.lock();
        if request != slot.latest_request {
            return false;
        }
        self.publish(&mut slot, state);
        true
    }

    fn publish(&self, slot: &mut Slot<T>, state: ScreenState<T>) {
        slot.state = state.clone();
        // No receivers is fine; the snapshot still holds the value.
        let _ = self.tx.send(state);
    }
}

impl<T: Clone + Send + 'static> Default for StatePublisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// Read-only view of a publisher's state.
pub struct Subscription<T> {
    current: ScreenState<T>,
    rx: broadcast::Receiver<ScreenState<T>>,
    publisher: Arc<StatePublisher<T>>,
}

impl<T: Clone + Send + 'static> Subscription<T> {
    /// The last state this subscription has observed.
    pub fn current(&self) -> &ScreenState<T> {
        &self.current
    }

    /// Apply the next pending transition, if any, without waiting.
    pub fn try_next(&mut self) -> Option<&ScreenState<T>> {
        match self.rx.try_recv() {
            Ok(state) => self.current = state,
            Err(TryRecvError::Lagged(_)) => self.resync(),
            Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
        }
        Some(&self.current)
    }

    /// Wait for the next transition.
    pub async fn changed(&mut self) -> Option<&ScreenState<T>> {
        match self.rx.recv().await {
            Ok(state) => self.current = state,
            Err(RecvError::Lagged(_)) => self.resync(),
            Err(RecvError::Closed) => return None,
        }
        Some(&self.current)
    }

    fn resync(&mut self) {
        *self = self.publisher.subscribe();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
