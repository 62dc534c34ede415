//! # trailhead-core
//!
//! Core traits and types for the trailhead request router.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! handler and middleware crates that don't need the routing tree itself.
//!
//! # Collaborators
//!
//! The router in `trailhead-std` selects a route and then drives the types
//! defined here:
//!
//! - [`Context`] - The per-request state: request head, bound [`Params`],
//!   typed extensions
//! - [`Resource`] - A handler with one async operation per [`Method`]
//! - [`Middleware`] - Pre- and post-dispatch hooks around a route
//!
//! Routes and groups store handlers and middleware as [`DynResource`] and
//! [`DynMiddleware`] trait objects; both are implemented automatically.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Everything the dispatch phase can return
//! - [`MethodNotAllowed`] - Default outcome of unimplemented verbs
//! - [`PatternError`] - Invalid route patterns

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod handler;
mod method;
mod middleware;
mod params;

// Re-exports
pub use context::{Context, METHOD_OVERRIDE_HEADER};
pub use error::{BoxError, DispatchError, MethodNotAllowed, PatternError, UnknownMethod};
pub use handler::{DynResource, HandlerResult, Resource};
pub use method::Method;
pub use middleware::{DynMiddleware, Middleware};
pub use params::Params;
