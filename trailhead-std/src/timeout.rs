//! Timeout Resource - Time-limited handler execution.
//!
//! **Note**: This module requires the `tokio` runtime and is only compiled
//! with the `timeout` feature.

use std::{future::Future, time::Duration};
use thiserror::Error;
use trailhead_core::{Context, HandlerResult, Resource};

/// Error returned when a wrapped operation does not finish in time.
#[derive(Debug, Clone, Error)]
#[error("handler timed out after {duration:?}")]
pub struct TimeoutError {
    duration: Duration,
}

impl TimeoutError {
    /// Create a new timeout error.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Get the duration that was exceeded.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// A Resource that bounds every operation of an inner Resource.
///
/// If an operation does not complete within the configured duration it is
/// dropped and [`TimeoutError`] is returned as the handler error.
///
/// # Example
///
/// ```rust,ignore
/// use trailhead::timeout::Timeout;
///
/// api.add("/reports/:id", Timeout::secs(Reports, 5));
/// ```
pub struct Timeout<R> {
    inner: R,
    duration: Duration,
}

impl<R> Timeout<R> {
    /// Wrap `inner` with a timeout of `duration`.
    pub fn new(inner: R, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// Create a `Timeout` with the duration specified in seconds.
    pub fn secs(inner: R, seconds: u64) -> Self {
        Self::new(inner, Duration::from_secs(seconds))
    }

    /// Create a `Timeout` with the duration specified in milliseconds.
    pub fn millis(inner: R, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Get the configured timeout duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Get a reference to the inner resource.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    async fn bounded(&self, operation: impl Future<Output = HandlerResult>) -> HandlerResult {
        match tokio::time::timeout(self.duration, operation).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutError::new(self.duration))),
        }
    }
}

impl<R: Resource> Resource for Timeout<R> {
    async fn get(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.get(ctx)).await
    }

    async fn post(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.post(ctx)).await
    }

    async fn put(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.put(ctx)).await
    }

    async fn patch(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.patch(ctx)).await
    }

    async fn delete(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.delete(ctx)).await
    }

    async fn options(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.options(ctx)).await
    }

    async fn head(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.head(ctx)).await
    }

    async fn trace(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.trace(ctx)).await
    }

    async fn connect(&self, ctx: &mut Context) -> HandlerResult {
        self.bounded(self.inner.connect(ctx)).await
    }
}
