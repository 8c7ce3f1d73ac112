mod common;

use std::sync::Arc;

use linkhop::prelude::{Resolution, ResolutionService};

#[tokio::test]
async fn test_concurrent_counted_resolutions_increase_by_exactly_n() {
    let (state, repo) = common::create_test_state();
    common::seed_link(&repo, "hot", "https://example.com", 0).await;

    let resolver: Arc<ResolutionService> = state.resolver.clone();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let resolver = resolver.clone();
        handles.push(tokio::spawn(
            async move { resolver.resolve("hot", true).await },
        ));
    }

    for handle in handles {
        let resolution = handle.await.unwrap().unwrap();
        assert!(matches!(resolution, Resolution::Found { .. }));
    }

    assert_eq!(common::visit_count(&repo, "hot").await, 50);
}

#[tokio::test]
async fn test_concurrent_previews_never_mutate() {
    let (state, repo) = common::create_test_state();
    common::seed_link(&repo, "cold", "https://example.com", 7).await;

    let resolver = state.resolver.clone();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let resolver = resolver.clone();
        handles.push(tokio::spawn(async move {
            resolver.resolve("cold", false).await
        }));
    }

    for handle in handles {
        let resolution = handle.await.unwrap().unwrap();
        assert!(matches!(resolution, Resolution::Found { .. }));
    }

    assert_eq!(common::visit_count(&repo, "cold").await, 7);
}

#[tokio::test]
async fn test_not_found_is_stable_under_any_visit_flag() {
    let (state, repo) = common::create_test_state();
    common::seed_link(&repo, "abc", "https://example.com", 5).await;

    for count_visit in [true, false] {
        let resolution = state.resolver.resolve("missing", count_visit).await.unwrap();
        assert_eq!(resolution, Resolution::NotFound);
    }

    assert_eq!(common::visit_count(&repo, "abc").await, 5);
}
