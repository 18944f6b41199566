//! Per-screen state controllers.
//!
//! A [`ScreenController`] drives one screen's `Loading → Success | Error`
//! state machine against a shared [`Repository`].  The schedule and resources
//! screens differ only in which repository call they make, which payload type
//! they carry, and the noun used in failure messages; that difference is
//! captured by the [`Screen`] trait so the state machine exists once.
//!
//! ## Lifecycle
//!
//! * [`ScreenController::new`] starts one fetch immediately.
//! * [`ScreenController::fetch`] publishes `Loading` before returning, then
//!   resolves on a spawned task.
//! * [`ScreenController::retry`] is the same as `fetch`.
//!
//! Overlapping fetches are allowed.  Only the most recently *started* fetch
//! may publish its outcome; earlier ones are discarded when they resolve.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::DataError;
use crate::model::{Course, Resource};
use crate::repository::Repository;
use crate::state::{ScreenState, StatePublisher, Subscription};

pub type LoadFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, DataError>> + Send>>;

/// Binds a screen to its payload type and repository operation.
pub trait Screen: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    /// Noun used in log lines and failure messages.
    const NAME: &'static str;

    fn load(repo: Arc<dyn Repository>) -> LoadFuture<Self::Item>;
}

pub struct Schedule;

impl Screen for Schedule {
    type Item = Course;
    const NAME: &'static str = "schedule";

    fn load(repo: Arc<dyn Repository>) -> LoadFuture<Course> {
        Box::pin(async move { repo.get_courses().await })
    }
}

pub struct Resources;

impl Screen for Resources {
    type Item = Resource;
    const NAME: &'static str = "resources";

    fn load(repo: Arc<dyn Repository>) -> LoadFuture<Resource> {
        Box::pin(async move { repo.get_resources().await })
    }
}

pub type ScheduleController = ScreenController<Schedule>;
pub type ResourcesController = ScreenController<Resources>;

/// `"Failed to load {screen}: {description}"`, with `"Unknown error"` standing
/// in for an empty description.
pub fn failure_message(screen: &str, err: &DataError) -> String {
    let description = err
        .description()
        .unwrap_or_else(|| "Unknown error".to_string());
    format!("Failed to load {screen}: {description}")
}

pub struct ScreenController<S: Screen> {
    repo: Arc<dyn Repository>,
    publisher: Arc<StatePublisher<S::Item>>,
}

impl<S: Screen> ScreenController<S> {
    /// Build the controller and start its first fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        let controller = Self {
            repo,
            publisher: Arc::new(StatePublisher::new()),
        };
        controller.fetch();
        controller
    }

    /// Publish `Loading`, then load on a spawned task.
    ///
    /// The returned handle completes once the outcome has been published (or
    /// discarded as stale).  Dropping it does not cancel the fetch.
    pub fn fetch(&self) -> JoinHandle<()> {
        let request = self.publisher.begin();
        info!(screen = S::NAME, request, "fetch started");

        let repo = Arc::clone(&self.repo);
        let publisher = Arc::clone(&self.publisher);

        tokio::spawn(async move {
            let outcome = match S::load(repo).await {
                Ok(items) => {
                    info!(screen = S::NAME, request, count = items.len(), "fetch succeeded");
                    ScreenState::Success(items)
                }
                Err(e) => {
                    let message = failure_message(S::NAME, &e);
                    warn!(screen = S::NAME, request, error = %e, "fetch failed");
                    ScreenState::Error(message)
                }
            };

            if !publisher.resolve(request, outcome) {
                debug!(screen = S::NAME, request, "superseded result discarded");
            }
        })
    }

    /// Recovery action offered from the `Error` state.
    pub fn retry(&self) -> JoinHandle<()> {
        self.fetch()
    }

    pub fn state(&self) -> ScreenState<S::Item> {
        self.publisher.snapshot()
    }

    pub fn subscribe(&self) -> Subscription<S::Item> {
        self.publisher.subscribe()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
