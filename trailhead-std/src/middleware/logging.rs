//! Logging Middleware - Observability for request dispatch.

use trailhead_core::{Context, HandlerResult, Middleware};

/// A Middleware that logs requests entering and leaving a group.
///
/// Logs the request method, path, and bound parameters at `debug` level and
/// always lets dispatch continue. Events are emitted through `tracing` when
/// the `tracing` feature is enabled; otherwise this middleware is a no-op.
///
/// # Example
///
/// ```rust,ignore
/// use trailhead::{RouteGroup, middleware::LoggingMiddleware};
///
/// let api = RouteGroup::new("/api")
///     .with(LoggingMiddleware::named("api"))
///     .route("/items", Items);
/// ```
pub struct LoggingMiddleware {
    name: &'static str,
}

impl LoggingMiddleware {
    /// Create a new `LoggingMiddleware` with a default name.
    pub fn new() -> Self {
        Self { name: "request" }
    }

    /// Create a new `LoggingMiddleware` with a custom name.
    ///
    /// The name is used in log messages to identify the group.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    async fn pre_dispatch(&self, ctx: &mut Context) -> HandlerResult {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name = %self.name,
                method = %ctx.effective_method(),
                path = %ctx.path(),
                params = ?ctx.params(),
                "dispatching request"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, ctx);
        }

        Ok(())
    }

    async fn post_dispatch(&self, ctx: &mut Context) -> HandlerResult {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = %self.name, path = %ctx.path(), "request dispatched");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, ctx);
        }

        Ok(())
    }
}
