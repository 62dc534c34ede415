//! Leaf routes: one exact pattern, one resource.

use crate::{
    path::{self, Pattern},
    router::{Match, Router},
};
use std::fmt;
use trailhead_core::{
    Context, DispatchError, DynResource, Method, Params, PatternError, Resource,
};

/// A path pattern bound to the [`Resource`] that handles it.
///
/// Route matching is exact: the request must have the same number of
/// segments as the pattern, literal segments must be equal, and `:name`
/// segments bind whatever text sits in their position. Optional segments
/// are expressed by registering several routes for the same resource.
///
/// # Example
///
/// ```rust
/// use trailhead_std::{Route, Router};
/// # use trailhead_core::Resource;
/// # struct User;
/// # impl Resource for User {}
///
/// let route = Route::new("/users/:id", User);
///
/// let matched = route.resolve("/users/42").unwrap();
/// assert_eq!(matched.params().get("id"), Some("42"));
/// assert!(route.resolve("/users/42/posts").is_none());
/// ```
pub struct Route {
    pattern: Pattern,
    handler: Box<dyn DynResource>,
}

impl Route {
    /// Create a route for `path`, handled by `handler`.
    pub fn new(path: &str, handler: impl Resource) -> Self {
        Self {
            pattern: Pattern::new(path),
            handler: Box::new(handler),
        }
    }

    /// Like [`Route::new`], but rejects parameter segments without a name.
    pub fn try_new(path: &str, handler: impl Resource) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: Pattern::parse(path)?,
            handler: Box::new(handler),
        })
    }

    /// The path as registered.
    pub fn path(&self) -> &str {
        self.pattern.original()
    }

    /// The parsed pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub(crate) fn match_segments(&self, segments: &[&str]) -> Option<Params> {
        self.pattern.match_exact(segments)
    }

    /// Invoke the resource operation for the request's effective method.
    ///
    /// The effective method is the `X-HTTP-Method-Override` header when it
    /// is set, else the request method. Methods outside the nine supported
    /// verbs fail with [`DispatchError::UnsupportedMethod`] without calling
    /// the resource; resource errors are returned as
    /// [`DispatchError::Handler`].
    pub async fn dispatch(&self, ctx: &mut Context) -> Result<(), DispatchError> {
        let method: Method = match ctx.effective_method().parse() {
            Ok(method) => method,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(route = %self.path(), method = %err.0, "unsupported method");
                return Err(err.into());
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(route = %self.path(), %method, "dispatching route");

        self.handler
            .call_dyn(method, ctx)
            .await
            .map_err(DispatchError::Handler)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path())
            .finish_non_exhaustive()
    }
}

impl Router for Route {
    fn resolve(&self, path: &str) -> Option<Match<'_>> {
        self.match_segments(&path::segments(path))
            .map(|params| Match::leaf(self, params))
    }
}
