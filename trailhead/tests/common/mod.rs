#![allow(dead_code)]

use trailhead::{
    Context, HandlerResult, Resource, RouteGroup,
    testing::{Journal, RecordingMiddleware, RecordingResource},
};

// ============================================================================
// Test Resources
// ============================================================================

/// Marks which resource served a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServedBy(pub &'static str);

/// Copies the bound parameters into the context extensions.
pub struct Echo {
    pub name: &'static str,
}

impl Echo {
    fn echo(&self, ctx: &mut Context) -> HandlerResult {
        let params = ctx.params().clone();
        ctx.extensions_mut().insert(ServedBy(self.name));
        ctx.extensions_mut().insert(params);
        Ok(())
    }
}

impl Resource for Echo {
    async fn get(&self, ctx: &mut Context) -> HandlerResult {
        tokio::task::yield_now().await;
        self.echo(ctx)
    }

    async fn delete(&self, ctx: &mut Context) -> HandlerResult {
        self.echo(ctx)
    }
}

// ============================================================================
// Fixture Tree
// ============================================================================

/// ```text
/// /                              -> home
/// /api/:version/users            -> users
/// /api/:version/users/:id        -> user
/// /api/:version/orgs/:org/repos/:repo -> repo
/// ```
pub fn api() -> RouteGroup {
    let orgs = RouteGroup::new("/orgs/:org").route("/repos/:repo", Echo { name: "repo" });

    let versioned = RouteGroup::new("/api/:version")
        .route("/users", Echo { name: "users" })
        .route("/users/:id", Echo { name: "user" })
        .group(orgs);

    RouteGroup::new("/")
        .route("/", Echo { name: "home" })
        .group(versioned)
}

/// `/outer` with middleware `a`, `b` wrapping `/inner` with middleware `c`,
/// which holds the `/leaf` route.
pub fn nested(journal: &Journal) -> RouteGroup {
    nested_with(
        journal,
        RecordingMiddleware::new("b", journal),
        RecordingResource::new("leaf", journal),
    )
}

pub fn nested_with(
    journal: &Journal,
    second: RecordingMiddleware,
    leaf: RecordingResource,
) -> RouteGroup {
    let inner = RouteGroup::new("/inner")
        .with(RecordingMiddleware::new("c", journal))
        .route("/leaf", leaf);

    RouteGroup::new("/outer")
        .with(RecordingMiddleware::new("a", journal))
        .with(second)
        .group(inner)
}
