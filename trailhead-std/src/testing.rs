//! Testing utilities for trailhead.
//!
//! This module provides helpers to make testing routers, resources, and
//! middleware easier.
//!
//! # Features
//!
//! - [`context`] / [`context_with_override`]: Build a request context in one call
//! - [`Journal`]: A shared, ordered log of what ran
//! - [`RecordingResource`]: A resource that records each operation it serves
//! - [`RecordingMiddleware`]: A middleware that records both phases and can
//!   be told to fail

use std::sync::{Arc, Mutex};
use thiserror::Error;
use trailhead_core::{
    BoxError, Context, HandlerResult, METHOD_OVERRIDE_HEADER, Method, Middleware, Params,
    Resource,
};

// ============================================================================
// Contexts
// ============================================================================

/// Build a context for `method` and `path`.
///
/// # Panics
///
/// Panics if `method` or `path` are not valid in an HTTP request line.
pub fn context(method: &str, path: &str) -> Context {
    let request = http::Request::builder()
        .method(method)
        .uri(path)
        .body(())
        .unwrap();
    Context::new(request)
}

/// Build a context carrying an `X-HTTP-Method-Override` header.
///
/// # Panics
///
/// Panics if any argument is not valid in an HTTP request.
pub fn context_with_override(method: &str, path: &str, method_override: &str) -> Context {
    let request = http::Request::builder()
        .method(method)
        .uri(path)
        .header(METHOD_OVERRIDE_HEADER, method_override)
        .body(())
        .unwrap();
    Context::new(request)
}

// ============================================================================
// Journal
// ============================================================================

/// An ordered log shared by recording resources and middleware.
///
/// Clones share the same entries.
///
/// # Example
///
/// ```rust,ignore
/// let journal = Journal::new();
/// let group = RouteGroup::new("/api")
///     .with(RecordingMiddleware::new("auth", &journal))
///     .route("/items", RecordingResource::new("items", &journal));
///
/// group.serve(&mut context("GET", "/api/items")).await?;
/// assert_eq!(journal.entries(), vec!["auth:pre", "items:GET", "auth:post"]);
/// ```
#[derive(Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    /// Get a copy of the recorded entries.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

/// The error produced by recorders configured to fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} failed")]
pub struct InjectedFailure(pub String);

// ============================================================================
// Recording Resource
// ============================================================================

/// A resource that records every operation it serves.
///
/// Each call appends `"<name>:<METHOD>"` to the journal and keeps a copy of
/// the parameters visible in the context at that point.
#[derive(Clone)]
pub struct RecordingResource {
    name: String,
    journal: Journal,
    params: Arc<Mutex<Vec<Params>>>,
    fail: bool,
}

impl RecordingResource {
    /// Create a resource that succeeds for every verb.
    pub fn new(name: impl Into<String>, journal: &Journal) -> Self {
        Self {
            name: name.into(),
            journal: journal.clone(),
            params: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a resource that records, then fails with [`InjectedFailure`].
    pub fn failing(name: impl Into<String>, journal: &Journal) -> Self {
        Self {
            fail: true,
            ..Self::new(name, journal)
        }
    }

    /// The parameters seen by each call, in call order.
    pub fn seen_params(&self) -> Vec<Params> {
        self.params.lock().unwrap().clone()
    }

    fn serve(&self, method: Method, ctx: &Context) -> HandlerResult {
        let entry = format!("{}:{}", self.name, method);
        self.params.lock().unwrap().push(ctx.params().clone());
        self.journal.record(entry.clone());

        if self.fail {
            Err(Box::new(InjectedFailure(entry)) as BoxError)
        } else {
            Ok(())
        }
    }
}

impl Resource for RecordingResource {
    async fn get(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Get, ctx)
    }

    async fn post(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Post, ctx)
    }

    async fn put(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Put, ctx)
    }

    async fn patch(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Patch, ctx)
    }

    async fn delete(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Delete, ctx)
    }

    async fn options(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Options, ctx)
    }

    async fn head(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Head, ctx)
    }

    async fn trace(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Trace, ctx)
    }

    async fn connect(&self, ctx: &mut Context) -> HandlerResult {
        self.serve(Method::Connect, ctx)
    }
}

// ============================================================================
// Recording Middleware
// ============================================================================

/// A middleware that records `"<label>:pre"` and `"<label>:post"`.
///
/// Either phase can be made to fail after recording.
#[derive(Clone)]
pub struct RecordingMiddleware {
    label: String,
    journal: Journal,
    fail_pre: bool,
    fail_post: bool,
}

impl RecordingMiddleware {
    /// Create a middleware whose phases both succeed.
    pub fn new(label: impl Into<String>, journal: &Journal) -> Self {
        Self {
            label: label.into(),
            journal: journal.clone(),
            fail_pre: false,
            fail_post: false,
        }
    }

    /// Make `pre_dispatch` fail.
    pub fn fail_pre(mut self) -> Self {
        self.fail_pre = true;
        self
    }

    /// Make `post_dispatch` fail.
    pub fn fail_post(mut self) -> Self {
        self.fail_post = true;
        self
    }

    /// The label used in journal entries.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn phase(&self, phase: &str, fail: bool) -> HandlerResult {
        let entry = format!("{}:{}", self.label, phase);
        self.journal.record(entry.clone());

        if fail {
            Err(Box::new(InjectedFailure(entry)))
        } else {
            Ok(())
        }
    }
}

impl Middleware for RecordingMiddleware {
    async fn pre_dispatch(&self, _ctx: &mut Context) -> HandlerResult {
        self.phase("pre", self.fail_pre)
    }

    async fn post_dispatch(&self, _ctx: &mut Context) -> HandlerResult {
        self.phase("post", self.fail_post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailhead_core::DynResource;

    #[test]
    fn test_journal_is_shared_between_clones() {
        let journal = Journal::new();
        let clone = journal.clone();
        clone.record("one");

        assert_eq!(journal.entries(), vec!["one"]);
        journal.clear();
        assert!(clone.is_empty());
    }

    #[tokio::test]
    async fn test_recording_resource_keeps_params() {
        let journal = Journal::new();
        let resource = RecordingResource::new("user", &journal);
        let mut ctx = context("GET", "/users/1");
        ctx.params_mut().set("id", "1");

        resource.call_dyn(Method::Get, &mut ctx).await.unwrap();

        assert_eq!(journal.entries(), vec!["user:GET"]);
        assert_eq!(resource.seen_params()[0].get("id"), Some("1"));
    }

    #[tokio::test]
    async fn test_recording_middleware_failure() {
        let journal = Journal::new();
        let middleware = RecordingMiddleware::new("auth", &journal).fail_post();
        let mut ctx = context("GET", "/");

        assert!(middleware.pre_dispatch(&mut ctx).await.is_ok());
        let err = middleware.post_dispatch(&mut ctx).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<InjectedFailure>(),
            Some(&InjectedFailure("auth:post".to_string()))
        );
        assert_eq!(journal.len(), 2);
    }
}
