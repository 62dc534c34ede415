//! Conditional Middleware - Run middleware only for some requests.

use trailhead_core::{Context, HandlerResult, Middleware};

/// A Middleware that conditionally runs an inner Middleware.
///
/// The condition is evaluated separately for each phase, so a handler that
/// changes what the condition looks at also changes whether the inner
/// `post_dispatch` runs.
///
/// # Example
///
/// ```rust,ignore
/// use trailhead::middleware::ConditionalMiddleware;
///
/// // Only authenticate requests that modify state
/// let auth = ConditionalMiddleware::new(
///     |ctx: &Context| ctx.effective_method() != "GET",
///     RequireToken,
/// );
/// ```
pub struct ConditionalMiddleware<C, M> {
    condition: C,
    inner: M,
}

impl<C, M> ConditionalMiddleware<C, M> {
    /// Create a new `ConditionalMiddleware`.
    ///
    /// `inner` only runs when `condition(ctx)` returns `true`.
    pub fn new(condition: C, inner: M) -> Self {
        Self { condition, inner }
    }

    /// Get a reference to the inner middleware.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<C, M> Middleware for ConditionalMiddleware<C, M>
where
    C: Fn(&Context) -> bool + Send + Sync + 'static,
    M: Middleware,
{
    async fn pre_dispatch(&self, ctx: &mut Context) -> HandlerResult {
        if (self.condition)(&*ctx) {
            self.inner.pre_dispatch(ctx).await
        } else {
            Ok(())
        }
    }

    async fn post_dispatch(&self, ctx: &mut Context) -> HandlerResult {
        if (self.condition)(&*ctx) {
            self.inner.post_dispatch(ctx).await
        } else {
            Ok(())
        }
    }
}
