//! The single-result future returned by [`AfterpartyApi::load`](crate::AfterpartyApi::load).
//!
//! # Design
//! A `Load` is cold: building one only captures the work. The request is
//! spawned onto the client's runtime the first time the `Load` is polled or
//! subscribed, so the caller's executor never runs network or decode code and
//! does not need to be tokio at all.
//!
//! Cancellation is by drop. The spawned task is held in an abort-on-drop
//! guard, so dropping an unfinished `Load` (or a [`Subscription`]) aborts the
//! request and discards the callback without ever calling it.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use futures::stream::{self, Stream};
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use url::Url;

use crate::error::ApiError;

/// A cold, cancellable load that resolves to exactly one result.
#[must_use = "a Load does nothing until it is awaited or subscribed"]
pub struct Load<A> {
    url: Url,
    runtime: Handle,
    future: BoxFuture<'static, Result<A, ApiError>>,
}

impl<A: Send + 'static> Load<A> {
    pub(crate) fn spawn_on<F>(runtime: Handle, url: Url, task: F) -> Self
    where
        F: Future<Output = Result<A, ApiError>> + Send + 'static,
    {
        let spawner = runtime.clone();
        let task_url = url.clone();
        let future = async move {
            let task = AbortOnDrop(spawner.spawn(task));
            match task.await {
                Ok(result) => result,
                Err(err) => join_failure(err, task_url),
            }
        };
        Self {
            url,
            runtime,
            future: Box::pin(future),
        }
    }

    /// Start the load and call `on_complete` with its result.
    ///
    /// The callback runs at most once, on the client's runtime. Dropping the
    /// returned [`Subscription`] before then cancels the load and drops the
    /// callback uncalled.
    pub fn subscribe<F>(self, on_complete: F) -> Subscription
    where
        F: FnOnce(Result<A, ApiError>) + Send + 'static,
    {
        let runtime = self.runtime.clone();
        let task = runtime.spawn(async move {
            let result = self.await;
            on_complete(result);
        });
        Subscription { task }
    }

    /// A stream that yields the result once and then ends.
    pub fn into_stream(self) -> impl Stream<Item = Result<A, ApiError>> {
        stream::once(self)
    }
}

impl<A> Load<A> {
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl<A> Future for Load<A> {
    type Output = Result<A, ApiError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.as_mut().poll(cx)
    }
}

impl<A> fmt::Debug for Load<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Load")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

/// A task ends without a result only if it panicked or its runtime shut down.
fn join_failure<A>(err: JoinError, url: Url) -> Result<A, ApiError> {
    if err.is_panic() {
        std::panic::resume_unwind(err.into_panic());
    }
    tracing::warn!(%url, "runtime shut down during load");
    Err(ApiError::AddressUnreachable(url))
}

/// Handle to a subscribed [`Load`]. Cancels the load when dropped.
#[derive(Debug)]
#[must_use = "dropping a Subscription cancels its load"]
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    pub fn cancel(self) {
        self.task.abort();
    }

    /// True once the callback has run, or the load was cancelled and torn
    /// down.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Future for AbortOnDrop<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
