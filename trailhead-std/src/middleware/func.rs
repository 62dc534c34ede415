//! Closure-backed middleware.

use trailhead_core::{Context, HandlerResult, Middleware};

/// A pre-dispatch Middleware built from a closure.
///
/// Useful for small synchronous checks and context decoration. The closure
/// runs in `pre_dispatch`; `post_dispatch` does nothing.
pub struct FnMiddleware<F> {
    func: F,
}

/// Wrap `func` as a pre-dispatch middleware.
///
/// # Example
///
/// ```rust
/// use trailhead_std::middleware::from_fn;
/// use trailhead_core::Context;
///
/// let require_json = from_fn(|ctx: &mut Context| {
///     match ctx.header("content-type") {
///         Some("application/json") => Ok(()),
///         _ => Err("expected a JSON body".into()),
///     }
/// });
/// # let _ = require_json;
/// ```
pub fn from_fn<F>(func: F) -> FnMiddleware<F>
where
    F: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
{
    FnMiddleware { func }
}

impl<F> Middleware for FnMiddleware<F>
where
    F: Fn(&mut Context) -> HandlerResult + Send + Sync + 'static,
{
    async fn pre_dispatch(&self, ctx: &mut Context) -> HandlerResult {
        (self.func)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::context;

    #[derive(Clone, Debug, PartialEq)]
    struct RequestId(u32);

    #[tokio::test]
    async fn test_fn_middleware_decorates_context() {
        let middleware = from_fn(|ctx: &mut Context| {
            ctx.extensions_mut().insert(RequestId(9));
            Ok(())
        });

        let mut ctx = context("GET", "/");
        middleware.pre_dispatch(&mut ctx).await.unwrap();
        middleware.post_dispatch(&mut ctx).await.unwrap();

        assert_eq!(ctx.extensions().get::<RequestId>(), Some(&RequestId(9)));
    }

    #[tokio::test]
    async fn test_fn_middleware_error() {
        let middleware = from_fn(|_: &mut Context| Err("denied".into()));

        let mut ctx = context("GET", "/");
        let err = middleware.pre_dispatch(&mut ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "denied");
    }
}
