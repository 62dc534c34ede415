//! # Match-then-dispatch
//!
//! Routing happens in two phases:
//!
//! 1. **Match**: [`Router::resolve`] walks the tree and returns a [`Match`]
//!    describing the chain of groups traversed, the winning route, and the
//!    parameters bound along the way. [`Router::match_path`] does the same
//!    and writes the parameters into the request [`Context`].
//! 2. **Dispatch**: [`Match::dispatch`] runs the matched chain without
//!    walking the tree again.
//!
//! The match is a value owned by the request, not state stored in the tree,
//! so a single router can be shared by any number of concurrent requests.
//!
//! ```rust
//! use trailhead_std::{RouteGroup, Router};
//! # use trailhead_core::Resource;
//! # struct Items;
//! # impl Resource for Items {}
//!
//! let api = RouteGroup::new("/api/:version").route("/items/:id", Items);
//!
//! let matched = api.resolve("/api/v2/items/7").unwrap();
//! assert_eq!(matched.params().get("version"), Some("v2"));
//! assert_eq!(matched.params().get("id"), Some("7"));
//! assert_eq!(matched.route().path(), "/items/:id");
//! ```

use crate::{group::RouteGroup, route::Route};
use std::{fmt, future::Future};
use trailhead_core::{Context, DispatchError, Params};

/// Something a request path can be matched against.
///
/// Implemented by [`Route`] and [`RouteGroup`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot route requests",
    label = "missing `Router` implementation",
    note = "Use a `Route` or a `RouteGroup`."
)]
pub trait Router: Send + Sync {
    /// Match `path` without touching any request state.
    fn resolve(&self, path: &str) -> Option<Match<'_>>;

    /// Match `path` and, on success, write the bound parameters into `ctx`.
    ///
    /// A failed match leaves `ctx` untouched.
    fn match_path(&self, path: &str, ctx: &mut Context) -> Option<Match<'_>> {
        let matched = self.resolve(path)?;
        ctx.params_mut().extend(matched.params().iter());
        Some(matched)
    }

    /// Match the context's own request path and dispatch it.
    ///
    /// Returns [`DispatchError::NoMatch`] if nothing matches.
    fn serve(&self, ctx: &mut Context) -> impl Future<Output = Result<(), DispatchError>> + Send {
        async move {
            let path = ctx.path().to_string();
            match self.match_path(&path, ctx) {
                Some(matched) => matched.dispatch(ctx).await,
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%path, "no matching route found");
                    Err(DispatchError::NoMatch)
                }
            }
        }
    }
}

/// The outcome of a successful match.
///
/// Borrows the router tree; consumed by [`Match::dispatch`].
pub struct Match<'r> {
    groups: Vec<&'r RouteGroup>,
    route: &'r Route,
    params: Params,
}

impl<'r> Match<'r> {
    pub(crate) fn leaf(route: &'r Route, params: Params) -> Self {
        Self {
            groups: Vec::new(),
            route,
            params,
        }
    }

    /// Wrap this match in `group`, whose prefix bound `params`.
    ///
    /// Groups are collected innermost first while the tree unwinds;
    /// [`outermost_first`](Self::outermost_first) restores traversal order.
    /// Parameters bound deeper in the tree win over the group's own.
    pub(crate) fn within(mut self, group: &'r RouteGroup, mut params: Params) -> Self {
        params.extend(std::mem::take(&mut self.params));
        self.params = params;
        self.groups.push(group);
        self
    }

    pub(crate) fn outermost_first(mut self) -> Self {
        self.groups.reverse();
        self
    }

    /// The matched leaf route.
    pub fn route(&self) -> &'r Route {
        self.route
    }

    /// The groups traversed to reach the route, outermost first.
    pub fn groups(&self) -> &[&'r RouteGroup] {
        &self.groups
    }

    /// Every parameter bound along the matched path.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Run the matched chain.
    ///
    /// Pre-dispatch middleware of each group runs outermost first, then the
    /// route, then post-dispatch middleware innermost first; within a group
    /// both phases follow insertion order. The first error aborts everything
    /// after it and is returned as-is.
    pub async fn dispatch(self, ctx: &mut Context) -> Result<(), DispatchError> {
        let result = self.run(ctx).await;

        #[cfg(feature = "tracing")]
        {
            if let Err(ref err) = result {
                tracing::debug!(route = %self.route.path(), error = %err, "dispatch failed");
            }
        }

        result
    }

    async fn run(&self, ctx: &mut Context) -> Result<(), DispatchError> {
        for group in &self.groups {
            group.pre_dispatch(ctx).await?;
        }

        self.route.dispatch(ctx).await?;

        for group in self.groups.iter().rev() {
            group.post_dispatch(ctx).await?;
        }
        Ok(())
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field(
                "groups",
                &self.groups.iter().map(|g| g.prefix()).collect::<Vec<_>>(),
            )
            .field("route", &self.route.path())
            .field("params", &self.params)
            .finish()
    }
}
