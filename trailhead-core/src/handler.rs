//! # Resource Handlers
//!
//! A [`Resource`] is the terminal point of dispatch: one async operation per
//! HTTP verb, each receiving the request [`Context`]. Operations a resource
//! does not override answer with [`MethodNotAllowed`].
//!
//! Resources are shared by every request that reaches their route, so they
//! must not stash request data in their own fields; everything per-request
//! goes through the `&mut Context` argument.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Resource`] uses return-position `impl Future` for static dispatch.
//! Routes store resources as [`DynResource`] trait objects, which the blanket
//! implementation provides for every `Resource`.
//!
//! # Example
//!
//! ```rust
//! use trailhead_core::{BoxError, Context, Resource};
//!
//! struct User;
//!
//! impl Resource for User {
//!     async fn get(&self, ctx: &mut Context) -> Result<(), BoxError> {
//!         let id = ctx.param("id").unwrap_or_default().to_string();
//!         ctx.extensions_mut().insert(id);
//!         Ok(())
//!     }
//! }
//! ```

use crate::{
    context::Context,
    error::{BoxError, MethodNotAllowed},
    method::Method,
};
use futures::future::{BoxFuture, FutureExt};
use std::future::{Future, Ready, ready};

/// The outcome of a handler or middleware operation.
pub type HandlerResult = Result<(), BoxError>;

fn not_allowed(method: Method) -> Ready<HandlerResult> {
    let err: BoxError = Box::new(MethodNotAllowed(method));
    ready(Err(err))
}

/// A handler exposing one operation per HTTP verb.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Resource`",
    label = "missing `Resource` implementation",
    note = "Implement `Resource` and override the verb operations this handler supports."
)]
pub trait Resource: Send + Sync + 'static {
    /// Handle `GET`.
    fn get(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Get)
    }

    /// Handle `POST`.
    fn post(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Post)
    }

    /// Handle `PUT`.
    fn put(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Put)
    }

    /// Handle `PATCH`.
    fn patch(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Patch)
    }

    /// Handle `DELETE`.
    fn delete(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Delete)
    }

    /// Handle `OPTIONS`.
    fn options(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Options)
    }

    /// Handle `HEAD`.
    fn head(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Head)
    }

    /// Handle `TRACE`.
    fn trace(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Trace)
    }

    /// Handle `CONNECT`.
    fn connect(&self, ctx: &mut Context) -> impl Future<Output = HandlerResult> + Send {
        let _ = ctx;
        not_allowed(Method::Connect)
    }
}

/// Object-safe version of [`Resource`], keyed by [`Method`].
pub trait DynResource: Send + Sync + 'static {
    /// Invoke the operation for `method`.
    fn call_dyn<'a>(&'a self, method: Method, ctx: &'a mut Context)
    -> BoxFuture<'a, HandlerResult>;
}

impl<T: Resource> DynResource for T {
    fn call_dyn<'a>(
        &'a self,
        method: Method,
        ctx: &'a mut Context,
    ) -> BoxFuture<'a, HandlerResult> {
        match method {
            Method::Get => self.get(ctx).boxed(),
            Method::Post => self.post(ctx).boxed(),
            Method::Put => self.put(ctx).boxed(),
            Method::Patch => self.patch(ctx).boxed(),
            Method::Delete => self.delete(ctx).boxed(),
            Method::Options => self.options(ctx).boxed(),
            Method::Head => self.head(ctx).boxed(),
            Method::Trace => self.trace(ctx).boxed(),
            Method::Connect => self.connect(ctx).boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Article;

    impl Resource for Article {
        async fn get(&self, ctx: &mut Context) -> HandlerResult {
            ctx.params_mut().set("seen", "get");
            Ok(())
        }

        async fn delete(&self, _ctx: &mut Context) -> HandlerResult {
            Err("article is locked".into())
        }
    }

    fn context() -> Context {
        Context::new(http::Request::builder().uri("/").body(()).unwrap())
    }

    #[tokio::test]
    async fn test_dyn_dispatch_selects_operation() {
        let resource: Box<dyn DynResource> = Box::new(Article);
        let mut ctx = context();

        resource.call_dyn(Method::Get, &mut ctx).await.unwrap();
        assert_eq!(ctx.param("seen"), Some("get"));
    }

    #[tokio::test]
    async fn test_handler_error_is_returned() {
        let mut ctx = context();
        let err = Article.call_dyn(Method::Delete, &mut ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "article is locked");
    }

    #[tokio::test]
    async fn test_unimplemented_verbs_are_not_allowed() {
        let mut ctx = context();
        for method in [Method::Post, Method::Head, Method::Connect] {
            let err = Article.call_dyn(method, &mut ctx).await.unwrap_err();
            let not_allowed = err.downcast_ref::<MethodNotAllowed>().unwrap();
            assert_eq!(not_allowed.0, method);
        }
    }
}
