//! Tower integration for trailhead.
//!
//! [`RouterService`] exposes any [`Router`] as a `tower::Service<Context>`,
//! so a router tree can sit behind tower layers (timeouts, concurrency
//! limits, tracing) in a transport built on tower.
//!
//! # Example
//!
//! ```rust,ignore
//! use trailhead::tower::RouterService;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .concurrency_limit(64)
//!     .service(RouterService::new(api));
//! ```

use crate::router::Router;
use futures::future::BoxFuture;
use std::{
    sync::Arc,
    task::{Context as TaskContext, Poll},
};
use trailhead_core::{Context, DispatchError};

/// Wraps a [`Router`] as a tower `Service`.
///
/// The service answers with the request [`Context`] after a successful
/// dispatch, carrying whatever handlers and middleware stored in it.
pub struct RouterService<R> {
    router: Arc<R>,
}

impl<R> RouterService<R> {
    /// Create a new `RouterService` owning `router`.
    pub fn new(router: R) -> Self {
        Self::from_arc(Arc::new(router))
    }

    /// Create a new `RouterService` sharing an existing router.
    pub fn from_arc(router: Arc<R>) -> Self {
        Self { router }
    }

    /// Get a reference to the inner router.
    pub fn inner(&self) -> &R {
        &self.router
    }
}

impl<R> Clone for RouterService<R> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

impl<R> ::tower::Service<Context> for RouterService<R>
where
    R: Router + 'static,
{
    type Response = Context;
    type Error = DispatchError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        // Routers are immutable and always ready
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, mut ctx: Context) -> Self::Future {
        let router = Arc::clone(&self.router);
        Box::pin(async move {
            router.serve(&mut ctx).await?;
            Ok(ctx)
        })
    }
}
