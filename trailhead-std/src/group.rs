//! Route groups: a shared prefix, middleware, and nested routers.

use crate::{
    path::{self, Pattern},
    route::Route,
    router::{Match, Router},
};
use std::fmt;
use trailhead_core::{
    Context, DispatchError, DynMiddleware, Middleware, PatternError, Resource,
};

/// A child of a [`RouteGroup`].
#[derive(Debug)]
enum Node {
    Route(Route),
    Group(RouteGroup),
}

impl Node {
    fn resolve<'r>(&'r self, segments: &[&str]) -> Option<Match<'r>> {
        match self {
            Node::Route(route) => route
                .match_segments(segments)
                .map(|params| Match::leaf(route, params)),
            Node::Group(group) => group.resolve_segments(segments),
        }
    }
}

/// Routes grouped under a common path prefix.
///
/// A group matches a request when its prefix matches the leading segments
/// of the path (parameter segments included) *and* one of its children
/// matches the rest. Children are tried in insertion order and the first
/// match wins. Groups nest to any depth.
///
/// Middleware added with [`insert`](Self::insert) runs around every route in
/// the group, nested groups included: `pre_dispatch` in insertion order
/// before the route, `post_dispatch` in the same order after it.
///
/// # Example
///
/// ```rust
/// use trailhead_std::{RouteGroup, Router};
/// # use trailhead_core::{Middleware, Resource};
/// # struct Health;
/// # impl Resource for Health {}
/// # struct User;
/// # impl Resource for User {}
/// # struct Auth;
/// # impl Middleware for Auth {}
///
/// let mut users = RouteGroup::new("/users");
/// users.insert(Auth).add("/:id", User);
///
/// let mut api = RouteGroup::new("/api/:version");
/// api.add("/health", Health).add_group(users);
///
/// assert!(api.resolve("/api/v1/users/42").is_some());
/// assert!(api.resolve("/api/v1").is_none());
/// assert_eq!(api.routes(), vec!["/api/:version/health", "/api/:version/users/:id"]);
/// ```
pub struct RouteGroup {
    prefix: Pattern,
    middleware: Vec<Box<dyn DynMiddleware>>,
    children: Vec<Node>,
}

impl RouteGroup {
    /// Create an empty group for `prefix`.
    pub fn new(prefix: &str) -> Self {
        Self::with_pattern(Pattern::new(prefix))
    }

    /// Like [`RouteGroup::new`], but rejects parameter segments without a name.
    pub fn try_new(prefix: &str) -> Result<Self, PatternError> {
        Ok(Self::with_pattern(Pattern::parse(prefix)?))
    }

    fn with_pattern(prefix: Pattern) -> Self {
        Self {
            prefix,
            middleware: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The prefix as registered.
    pub fn prefix(&self) -> &str {
        self.prefix.original()
    }

    /// The parsed prefix.
    pub fn pattern(&self) -> &Pattern {
        &self.prefix
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a route for `path` handled by `handler`.
    pub fn add(&mut self, path: &str, handler: impl Resource) -> &mut Self {
        self.children.push(Node::Route(Route::new(path, handler)));
        self
    }

    /// Append an already constructed route.
    pub fn add_route(&mut self, route: Route) -> &mut Self {
        self.children.push(Node::Route(route));
        self
    }

    /// Append a nested group.
    pub fn add_group(&mut self, group: RouteGroup) -> &mut Self {
        self.children.push(Node::Group(group));
        self
    }

    /// Append a middleware; insertion order is execution order.
    pub fn insert(&mut self, middleware: impl Middleware) -> &mut Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Builder form of [`add`](Self::add).
    pub fn route(mut self, path: &str, handler: impl Resource) -> Self {
        self.add(path, handler);
        self
    }

    /// Builder form of [`add_group`](Self::add_group).
    pub fn group(mut self, group: RouteGroup) -> Self {
        self.add_group(group);
        self
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, middleware: impl Middleware) -> Self {
        self.insert(middleware);
        self
    }

    /// Full patterns of every route reachable through this group, in match
    /// priority order.
    pub fn routes(&self) -> Vec<String> {
        let mut routes = Vec::new();
        self.collect_routes(&mut Vec::new(), &mut routes);
        routes
    }

    fn collect_routes<'a>(&'a self, prefixes: &mut Vec<&'a str>, out: &mut Vec<String>) {
        let pushed = !self.prefix.is_root();
        if pushed {
            prefixes.push(self.prefix.normalized());
        }

        for child in &self.children {
            match child {
                Node::Route(route) => {
                    let mut parts = prefixes.clone();
                    if !route.pattern().is_root() {
                        parts.push(route.pattern().normalized());
                    }
                    out.push(format!("{}{}", path::SEPARATOR, parts.join("/")));
                }
                Node::Group(group) => group.collect_routes(prefixes, out),
            }
        }

        if pushed {
            prefixes.pop();
        }
    }

    pub(crate) fn resolve_segments<'r>(&'r self, segments: &[&str]) -> Option<Match<'r>> {
        let params = self.prefix.match_prefix(segments)?;
        let rest = &segments[self.prefix.len()..];

        let matched = self.children.iter().find_map(|child| child.resolve(rest));

        #[cfg(feature = "tracing")]
        {
            if matched.is_none() {
                tracing::trace!(prefix = %self.prefix(), "prefix matched but no child did");
            }
        }

        matched.map(|m| m.within(self, params))
    }

    pub(crate) async fn pre_dispatch(&self, ctx: &mut Context) -> Result<(), DispatchError> {
        for middleware in &self.middleware {
            middleware
                .pre_dispatch_dyn(ctx)
                .await
                .map_err(DispatchError::Middleware)?;
        }
        Ok(())
    }

    pub(crate) async fn post_dispatch(&self, ctx: &mut Context) -> Result<(), DispatchError> {
        for middleware in &self.middleware {
            middleware
                .post_dispatch_dyn(ctx)
                .await
                .map_err(DispatchError::Middleware)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteGroup")
            .field("prefix", &self.prefix())
            .field("middleware", &self.middleware.len())
            .field("children", &self.children)
            .finish()
    }
}

impl Router for RouteGroup {
    fn resolve(&self, path: &str) -> Option<Match<'_>> {
        self.resolve_segments(&path::segments(path)).map(Match::outermost_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Journal, RecordingMiddleware, RecordingResource, context};

    fn resource(name: &str) -> RecordingResource {
        RecordingResource::new(name, &Journal::new())
    }

    #[test]
    fn test_prefix_params_are_bound() {
        let group = RouteGroup::new("/api/:version").route("/items", resource("items"));

        let matched = group.resolve("/api/v2/items").unwrap();
        assert_eq!(matched.params().get("version"), Some("v2"));
        assert_eq!(matched.route().path(), "/items");
        assert_eq!(matched.groups().len(), 1);
    }

    #[test]
    fn test_insufficient_segments() {
        let group = RouteGroup::new("/api/:version").route("/", resource("index"));

        assert!(group.resolve("/api").is_none());
        assert!(group.resolve("/api/v1").is_some());
    }

    #[test]
    fn test_prefix_match_without_child_fails() {
        let group = RouteGroup::new("/api").route("/items", resource("items"));
        let mut ctx = context("GET", "/api/v1/other");

        assert!(group.match_path("/api/v1/other", &mut ctx).is_none());
        assert!(ctx.params().is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let group = RouteGroup::new("/")
            .route("/users/:id", resource("by-id"))
            .route("/users/me", resource("me"));

        let matched = group.resolve("/users/me").unwrap();
        assert_eq!(matched.route().path(), "/users/:id");
        assert_eq!(matched.params().get("id"), Some("me"));
    }

    #[test]
    fn test_nested_groups_accumulate_params() {
        let repos = RouteGroup::new("/repos/:repo").route("/issues/:number", resource("issue"));
        let org = RouteGroup::new("/orgs/:org").group(repos);
        let root = RouteGroup::new("/api").group(org);

        let matched = root.resolve("/api/orgs/acme/repos/anvil/issues/12").unwrap();
        assert_eq!(matched.groups().len(), 3);
        assert_eq!(matched.params().get("org"), Some("acme"));
        assert_eq!(matched.params().get("repo"), Some("anvil"));
        assert_eq!(matched.params().get("number"), Some("12"));
    }

    #[test]
    fn test_groups_listed_outermost_first() {
        let c = RouteGroup::new("/c").route("/leaf", resource("leaf"));
        let b = RouteGroup::new("/b").group(c);
        let a = RouteGroup::new("/a").group(b);
        let root = RouteGroup::new("/").group(a);

        let matched = root.resolve("/a/b/c/leaf").unwrap();
        let prefixes: Vec<_> = matched.groups().iter().map(|g| g.prefix()).collect();
        assert_eq!(prefixes, vec!["/", "/a", "/b", "/c"]);

        let again = root.resolve("/a/b/c/leaf").unwrap();
        assert_eq!(again.groups().len(), 4);
        assert!(std::ptr::eq(again.groups()[3], matched.groups()[3]));
    }

    #[test]
    fn test_inner_params_override_outer() {
        let inner = RouteGroup::new("/:id").route("/", resource("inner"));
        let outer = RouteGroup::new("/:id").group(inner);

        let matched = outer.resolve("/outer/inner").unwrap();
        assert_eq!(matched.params().get("id"), Some("inner"));
        assert_eq!(matched.params().len(), 1);
    }

    #[test]
    fn test_routes_listing() {
        let admin = RouteGroup::new("/admin/").route("/stats", resource("stats"));
        let root = RouteGroup::new("/")
            .route("/", resource("home"))
            .route("/about", resource("about"))
            .group(admin);

        assert_eq!(root.routes(), vec!["/", "/about", "/admin/stats"]);
        assert_eq!(root.len(), 3);
        assert!(!root.is_empty());
    }

    #[tokio::test]
    async fn test_middleware_wraps_route() {
        let journal = Journal::new();
        let mut group = RouteGroup::new("/api");
        group
            .insert(RecordingMiddleware::new("first", &journal))
            .insert(RecordingMiddleware::new("second", &journal))
            .add("/items", RecordingResource::new("items", &journal));

        let mut ctx = context("GET", "/api/items");
        group.serve(&mut ctx).await.unwrap();

        assert_eq!(
            journal.entries(),
            vec![
                "first:pre",
                "second:pre",
                "items:GET",
                "first:post",
                "second:post"
            ]
        );
    }

    #[tokio::test]
    async fn test_serve_without_match() {
        let group = RouteGroup::new("/api").route("/items", resource("items"));
        let mut ctx = context("GET", "/elsewhere");

        let err = group.serve(&mut ctx).await.unwrap_err();
        assert!(err.is_no_match());
        assert_eq!(err.to_string(), "no matching route found");
    }
}
