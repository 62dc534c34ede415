mod common;

use common::{ServedBy, api};
use std::sync::Arc;
use trailhead::{Params, Router, testing::context};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_keep_their_own_match() {
    let tree = Arc::new(api());

    let tasks: Vec<_> = (0..256)
        .map(|i| {
            let tree = Arc::clone(&tree);
            tokio::spawn(async move {
                let (path, expected) = if i % 2 == 0 {
                    (format!("/api/v{i}/users/{i}"), "user")
                } else {
                    (format!("/api/v{i}/orgs/org{i}/repos/repo{i}"), "repo")
                };

                let mut ctx = context("GET", &path);
                tree.serve(&mut ctx).await.unwrap();

                let served = ctx.extensions().get::<ServedBy>().cloned().unwrap();
                let seen = ctx.extensions().get::<Params>().cloned().unwrap();
                (i, expected, served, seen)
            })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        let (i, expected, served, seen) = result.unwrap();
        let version = format!("v{i}");

        assert_eq!(served, ServedBy(expected));
        assert_eq!(seen.get("version"), Some(version.as_str()));
        if i % 2 == 0 {
            assert_eq!(seen.get("id"), Some(i.to_string().as_str()));
            assert_eq!(seen.len(), 2);
        } else {
            assert_eq!(seen.get("org"), Some(format!("org{i}").as_str()));
            assert_eq!(seen.get("repo"), Some(format!("repo{i}").as_str()));
            assert_eq!(seen.len(), 3);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_matches_held_across_tasks_do_not_interfere() {
    let tree = Arc::new(api());

    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let tree = Arc::clone(&tree);
            tokio::spawn(async move {
                let mut ctx = context("GET", "/");
                let path = format!("/api/v1/users/{i}");
                let matched = tree.match_path(&path, &mut ctx).unwrap();

                // Let other tasks match against the same tree in between.
                tokio::task::yield_now().await;

                matched.dispatch(&mut ctx).await.unwrap();
                (i, ctx.param("id").map(str::to_string))
            })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        let (i, id) = result.unwrap();
        assert_eq!(id, Some(i.to_string()));
    }
}
