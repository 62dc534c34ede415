//! # trailhead - REST Request Routing
//!
//! `trailhead` routes HTTP requests to resources through a tree of route
//! groups. A [`Route`] binds a `:param` path pattern to a [`Resource`]; a
//! [`RouteGroup`] adds a shared prefix and [`Middleware`] to the routes and
//! groups nested inside it.
//!
//! Matching and dispatch are separate phases. Matching produces a [`Match`]
//! owned by the request, so one router can serve many requests at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use trailhead::prelude::*;
//!
//! struct User;
//!
//! impl Resource for User {
//!     async fn get(&self, ctx: &mut Context) -> HandlerResult {
//!         let id = ctx.param("id").unwrap_or_default().to_string();
//!         ctx.extensions_mut().insert(id);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() {
//! let api = RouteGroup::new("/api/:version").route("/users/:id", User);
//!
//! let matched = api.resolve("/api/v1/users/42").unwrap();
//! assert_eq!(matched.params().get("version"), Some("v1"));
//! assert_eq!(matched.params().get("id"), Some("42"));
//! # }
//! ```
//!
//! ## Method Override
//!
//! Clients that can only send `GET` and `POST` may set the
//! `X-HTTP-Method-Override` header; a non-empty value replaces the request
//! method when the handler operation is chosen.
//!
//! ## Features
//!
//! - `tracing`: debug and trace events for matching and dispatch
//! - `tower`: [`tower::RouterService`], a `tower::Service` over any [`Router`]
//! - `timeout`: [`timeout::Timeout`], a time limit around a [`Resource`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Request state
pub use trailhead_core::{Context, METHOD_OVERRIDE_HEADER, Method, Params};

// Errors
pub use trailhead_core::{BoxError, DispatchError, MethodNotAllowed, PatternError, UnknownMethod};

// Resources and middleware
pub use trailhead_core::{DynMiddleware, DynResource, HandlerResult, Middleware, Resource};

// Routing tree
pub use trailhead_std::{Match, Pattern, Route, RouteGroup, Router, Segment};

/// Standard middleware implementations.
pub mod middleware {
    pub use trailhead_std::middleware::{
        ConditionalMiddleware, FnMiddleware, LoggingMiddleware, from_fn,
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use trailhead_std::testing::*;
}

/// Handler timeouts.
#[cfg(feature = "timeout")]
pub mod timeout {
    pub use trailhead_std::timeout::{Timeout, TimeoutError};
}

/// Tower integration.
#[cfg(feature = "tower")]
pub mod tower {
    pub use trailhead_std::tower::RouterService;
}

/// Prelude module - common imports for trailhead.
///
/// # Usage
///
/// ```rust,ignore
/// use trailhead::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Context, DispatchError, HandlerResult, Method, Middleware, Params, Resource,
        Route, RouteGroup, Router,
    };
}
