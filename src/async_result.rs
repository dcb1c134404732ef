//! Asynchronously loaded values with the states a UI needs to display them.
//!
//! An [`AsyncResult`] owns one loadable value. While a request is in progress a
//! loading indicator can be shown, and after a failed refresh the last good value
//! is still available next to the error state.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use log::{debug, trace};
use parking_lot::Mutex;

/// Various states of the async request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    InProgress,
    Success,
    Failure,
}

/// Receives lifecycle events of the requests made by an [`AsyncResult`].
pub trait LoadObserver: Send + Sync {
    /// Called after the state moved to `InProgress`, before the producer runs.
    fn request_started(&self);

    /// Called once the value and `Success` state are stored.
    fn request_succeeded(&self);

    /// Called once the `Failure` state is stored.
    fn request_failed(&self, error: &dyn Display);
}

/// Reports request events through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn request_started(&self) {
        trace!("Request in progress");
    }

    fn request_succeeded(&self) {
        trace!("Request succeeded");
    }

    fn request_failed(&self, error: &dyn Display) {
        debug!("Request failed: {}", error);
    }
}

struct Inner<T> {
    value: Option<T>,
    state: LoadState,
}

/// An asynchronously loaded value.
///
/// At most one request runs at a time: while the state is `InProgress`, further
/// calls to [`load_if_needed`](Self::load_if_needed) or [`refresh`](Self::refresh)
/// return immediately without running their producer.
pub struct AsyncResult<T> {
    inner: Mutex<Inner<T>>,
    observer: Arc<dyn LoadObserver>,
}

impl<T> Default for AsyncResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for AsyncResult<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("AsyncResult")
            .field("state", &inner.state)
            .field("has_value", &inner.value.is_some())
            .finish()
    }
}

impl<T> AsyncResult<T> {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(LogObserver))
    }

    pub fn with_observer(observer: Arc<dyn LoadObserver>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                value: None,
                state: LoadState::NotStarted,
            }),
            observer,
        }
    }

    /// The current state of the async request.
    pub fn state(&self) -> LoadState {
        self.inner.lock().state
    }

    /// The value from the most recent successful request.
    pub fn value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().value.clone()
    }

    /// Borrows the most recent successful value.
    ///
    /// The coordinator is locked while `f` runs, so `f` must not call back into it.
    pub fn with_value<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        f(self.inner.lock().value.as_ref())
    }

    /// Loads the value if no request has happened yet.
    ///
    /// Does nothing once the state is `Success` or `Failure`, or while a request
    /// is in progress.
    pub async fn load_if_needed<F, Fut, E>(&self, producer: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.perform_request(false, producer).await;
    }

    /// Loads the value again regardless of previous requests, unless one is
    /// already in progress.
    pub async fn refresh<F, Fut, E>(&self, producer: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.perform_request(true, producer).await;
    }

    async fn perform_request<F, Fut, E>(&self, refresh: bool, producer: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let Some(mut in_flight) = self.begin(refresh) else {
            return;
        };
        self.observer.request_started();

        let result = producer().await;

        in_flight.settled = true;
        match result {
            Ok(value) => {
                {
                    let mut inner = self.inner.lock();
                    inner.value = Some(value);
                    inner.state = LoadState::Success;
                }
                self.observer.request_succeeded();
            }
            Err(error) => {
                self.inner.lock().state = LoadState::Failure;
                self.observer.request_failed(&error);
            }
        }
    }

    /// Moves to `InProgress` if this request is allowed to run.
    fn begin(&self, refresh: bool) -> Option<InFlight<'_, T>> {
        let mut inner = self.inner.lock();
        let previous = inner.state;
        match previous {
            LoadState::InProgress => return None,
            LoadState::Success | LoadState::Failure if !refresh => return None,
            _ => {}
        }
        inner.state = LoadState::InProgress;
        Some(InFlight {
            owner: self,
            previous,
            settled: false,
        })
    }
}

/// Restores the prior state if a request future is dropped before its producer
/// settles.
struct InFlight<'a, T> {
    owner: &'a AsyncResult<T>,
    previous: LoadState,
    settled: bool,
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if !self.settled {
            self.owner.inner.lock().state = self.previous;
        }
    }
}
