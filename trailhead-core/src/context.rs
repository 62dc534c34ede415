//! Per-request context.
//!
//! A [`Context`] is created for every inbound request and exclusively
//! borrowed by the router while the request is matched and dispatched.
//! Everything request-specific (bound path parameters, typed state shared
//! between middleware and handlers) lives here, never in the router tree.
//!
//! # Example
//!
//! ```rust
//! use trailhead_core::Context;
//!
//! let request = http::Request::builder()
//!     .method("POST")
//!     .uri("/users/42")
//!     .header("X-HTTP-Method-Override", "delete")
//!     .body(())
//!     .unwrap();
//!
//! let ctx = Context::new(request);
//! assert_eq!(ctx.path(), "/users/42");
//! assert_eq!(ctx.effective_method(), "DELETE");
//! ```

use crate::params::Params;
use http::{Extensions, HeaderMap, Request, Uri, request::Parts};

/// Header whose value, when present and non-empty, replaces the request method.
pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// Request-scoped state threaded through matching and dispatch.
#[derive(Debug)]
pub struct Context {
    request: Parts,
    params: Params,
    extensions: Extensions,
}

impl Context {
    /// Create a context from a bodiless request.
    pub fn new(request: Request<()>) -> Self {
        let (parts, ()) = request.into_parts();
        Self::from_parts(parts)
    }

    /// Create a context from request head parts.
    ///
    /// The transport keeps ownership of the body.
    pub fn from_parts(request: Parts) -> Self {
        Self {
            request,
            params: Params::new(),
            extensions: Extensions::new(),
        }
    }

    /// The request method as sent by the client.
    pub fn method(&self) -> &http::Method {
        &self.request.method
    }

    /// The request URI.
    pub fn uri(&self) -> &Uri {
        &self.request.uri
    }

    /// The request path, without query string.
    pub fn path(&self) -> &str {
        self.request.uri.path()
    }

    /// All request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.request.headers
    }

    /// Look up a header value, ignoring values that are not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.request
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    /// The method used for dispatch, uppercased.
    ///
    /// A non-empty [`METHOD_OVERRIDE_HEADER`] wins over the request method,
    /// even when it is not valid text.
    pub fn effective_method(&self) -> String {
        match self.request.headers.get(METHOD_OVERRIDE_HEADER) {
            Some(value) if !value.is_empty() => {
                String::from_utf8_lossy(value.as_bytes()).to_ascii_uppercase()
            }
            _ => self.request.method.as_str().to_ascii_uppercase(),
        }
    }

    /// Path parameters bound so far.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable access to the parameter store.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Shorthand for `self.params().get(key)`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    /// Typed state attached by middleware or handlers.
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Mutable access to the typed state.
    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    /// Split the context back into the request head and its parameters.
    pub fn into_parts(self) -> (Parts, Params) {
        (self.request, self.params)
    }
}

impl From<Parts> for Context {
    fn from(parts: Parts) -> Self {
        Self::from_parts(parts)
    }
}
