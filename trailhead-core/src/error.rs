//! Error types for trailhead.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Errors surfaced by the dispatch phase
//! - [`MethodNotAllowed`] - Default outcome of an unimplemented verb operation
//! - [`UnknownMethod`] - A method string outside the nine supported verbs
//! - [`PatternError`] - A route pattern that cannot be parsed

use crate::method::Method;
use thiserror::Error;

/// A boxed error type for handler and middleware failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while dispatching a request.
///
/// User errors raised by middleware or handlers are carried unchanged:
/// their `Display` output is forwarded as-is, and the original error can be
/// recovered with [`DispatchError::downcast_ref`] or [`DispatchError::into_inner`].
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Nothing in the router tree matched the request path.
    #[error("no matching route found")]
    NoMatch,

    /// The effective method is not one of the nine dispatchable verbs.
    #[error("method not supported: {0}")]
    UnsupportedMethod(String),

    /// A pre- or post-dispatch middleware failed.
    #[error(transparent)]
    Middleware(BoxError),

    /// The route handler failed.
    #[error(transparent)]
    Handler(BoxError),
}

impl DispatchError {
    /// Returns true if no route matched.
    pub fn is_no_match(&self) -> bool {
        matches!(self, DispatchError::NoMatch)
    }

    /// Attempts to view the wrapped user error as a concrete type.
    pub fn downcast_ref<T: std::error::Error + 'static>(&self) -> Option<&T> {
        match self {
            DispatchError::Middleware(err) | DispatchError::Handler(err) => err.downcast_ref(),
            _ => None,
        }
    }

    /// Consumes the error, returning the wrapped user error if there is one.
    pub fn into_inner(self) -> Option<BoxError> {
        match self {
            DispatchError::Middleware(err) | DispatchError::Handler(err) => Some(err),
            _ => None,
        }
    }
}

/// Returned by verb operations a resource does not implement.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("method {0} not allowed")]
pub struct MethodNotAllowed(pub Method);

/// A method string that does not name a dispatchable verb.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl From<UnknownMethod> for DispatchError {
    fn from(err: UnknownMethod) -> Self {
        DispatchError::UnsupportedMethod(err.0)
    }
}

/// Errors raised while parsing a route pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A segment consists of the parameter sigil alone.
    #[error("empty parameter name at segment {index} of `{pattern}`")]
    EmptyParam {
        /// The pattern as registered.
        pattern: String,
        /// Zero-based index of the offending segment.
        index: usize,
    },
}
