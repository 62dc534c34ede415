//! # Middleware
//!
//! Middleware wraps the dispatch of every route inside a
//! [`RouteGroup`](../trailhead_std/struct.RouteGroup.html): `pre_dispatch`
//! runs before the matched route, `post_dispatch` after it succeeds. Both
//! default to doing nothing, so an implementation overrides only the phase
//! it cares about.
//!
//! An `Err` from either phase aborts the rest of the chain and is returned
//! to the caller unchanged.

use crate::{context::Context, handler::HandlerResult};
use futures::future::{BoxFuture, FutureExt};
use std::future::{Future, ready};

/// Hooks run around the dispatch of a matched route.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Middleware`",
    label = "missing `Middleware` implementation",
    note = "Implement `pre_dispatch` and/or `post_dispatch` for this type."
)]
pub trait Middleware: Send + Sync + 'static {
    /// Runs before the matched route is dispatched.
    fn pre_dispatch(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        ready(Ok(()))
    }

    /// Runs after the matched route was dispatched successfully.
    fn post_dispatch(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        ready(Ok(()))
    }
}

/// Object-safe version of [`Middleware`].
pub trait DynMiddleware: Send + Sync + 'static {
    /// Dynamic version of [`Middleware::pre_dispatch`].
    fn pre_dispatch_dyn<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, HandlerResult>;

    /// Dynamic version of [`Middleware::post_dispatch`].
    fn post_dispatch_dyn<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, HandlerResult>;
}

impl<T: Middleware> DynMiddleware for T {
    fn pre_dispatch_dyn<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, HandlerResult> {
        self.pre_dispatch(ctx).boxed()
    }

    fn post_dispatch_dyn<'a>(&'a self, ctx: &'a mut Context) -> BoxFuture<'a, HandlerResult> {
        self.post_dispatch(ctx).boxed()
    }
}

// Allow Box<dyn DynMiddleware> to be used where Middleware is expected.
impl Middleware for Box<dyn DynMiddleware> {
    async fn pre_dispatch(&self, ctx: &mut Context) -> HandlerResult {
        (**self).pre_dispatch_dyn(ctx).await
    }

    async fn post_dispatch(&self, ctx: &mut Context) -> HandlerResult {
        (**self).post_dispatch_dyn(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PreOnly;

    impl Middleware for PreOnly {
        async fn pre_dispatch(&self, ctx: &mut Context) -> HandlerResult {
            ctx.params_mut().set("pre", "yes");
            Ok(())
        }
    }

    fn context() -> Context {
        Context::new(http::Request::builder().uri("/").body(()).unwrap())
    }

    #[tokio::test]
    async fn test_default_phases_succeed() {
        let mut ctx = context();
        assert!(PreOnly.post_dispatch(&mut ctx).await.is_ok());
        assert!(ctx.params().is_empty());
    }

    #[tokio::test]
    async fn test_boxed_middleware_delegates() {
        let boxed: Box<dyn DynMiddleware> = Box::new(PreOnly);
        let mut ctx = context();

        boxed.pre_dispatch(&mut ctx).await.unwrap();
        assert_eq!(ctx.param("pre"), Some("yes"));
    }
}
