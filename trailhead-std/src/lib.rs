//! # trailhead-std
//!
//! Standard implementations for the trailhead REST router.
//!
//! This crate provides:
//! - **Patterns**: [`Pattern`] and [`Segment`], the `:param` path matcher
//! - **Routing tree**: [`Route`] leaves and [`RouteGroup`] prefix nodes
//! - **Dispatch**: the [`Router`] trait and the per-request [`Match`]
//! - **Standard middleware**: Logging, Conditional, closures
//! - **Integrations**: tower `Service` (`tower` feature), handler timeouts
//!   (`timeout` feature)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use trailhead_core;

// Modules
pub mod group;
pub mod middleware;
pub mod path;
pub mod route;
pub mod router;
pub mod testing;

#[cfg(feature = "timeout")]
pub mod timeout;

#[cfg(feature = "tower")]
pub mod tower;

pub use group::RouteGroup;
pub use path::{Pattern, Segment};
pub use route::Route;
pub use router::{Match, Router};
