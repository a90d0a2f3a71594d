mod common;

use common::{signup, test_pool};
use friender::services::{feed_service, friendship_service, relationship_service};

const FEED_LIMIT: i64 = 50;

#[tokio::test]
async fn feed_never_contains_the_viewer() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    signup(&pool, "bob").await;

    let feed = feed_service::candidates_for(&pool, a.id, FEED_LIMIT)
        .await
        .unwrap();
    assert!(feed.iter().all(|u| u.id != a.id));
    assert_eq!(feed.len(), 1);
}

#[tokio::test]
async fn feed_excludes_everyone_already_judged() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;
    let c = signup(&pool, "carol").await;
    let d = signup(&pool, "dave").await;

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    relationship_service::record_dislike(&pool, a.id, c.id)
        .await
        .unwrap();

    let feed = feed_service::candidates_for(&pool, a.id, FEED_LIMIT)
        .await
        .unwrap();
    let ids: Vec<i64> = feed.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![d.id]);

    let judged = relationship_service::judged_by(&pool, a.id).await.unwrap();
    assert!(feed.iter().all(|u| !judged.contains(&u.id)));
}

#[tokio::test]
async fn rejudged_users_stay_out_of_the_feed() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;

    relationship_service::record_dislike(&pool, a.id, b.id)
        .await
        .unwrap();
    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();

    // The pair moved disliked -> liked, never back to unjudged.
    let feed = feed_service::candidates_for(&pool, a.id, FEED_LIMIT)
        .await
        .unwrap();
    assert!(feed.is_empty());
}

#[tokio::test]
async fn feed_is_ordered_by_ascending_id() {
    let pool = test_pool().await;
    let viewer = signup(&pool, "viewer").await;
    let b = signup(&pool, "bob").await;
    let c = signup(&pool, "carol").await;
    let d = signup(&pool, "dave").await;

    let feed = feed_service::candidates_for(&pool, viewer.id, FEED_LIMIT)
        .await
        .unwrap();
    let ids: Vec<i64> = feed.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![b.id, c.id, d.id]);
}

#[tokio::test]
async fn feed_is_capped_at_the_limit() {
    let pool = test_pool().await;
    let viewer = signup(&pool, "viewer").await;
    let b = signup(&pool, "bob").await;
    let c = signup(&pool, "carol").await;
    signup(&pool, "dave").await;

    let feed = feed_service::candidates_for(&pool, viewer.id, 2)
        .await
        .unwrap();
    let ids: Vec<i64> = feed.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![b.id, c.id]);
}

/// The end-to-end scenario: A, B, C exist with no judgements, A works
/// through the feed, and the friendship appears only once B likes back.
#[tokio::test]
async fn like_then_like_back_creates_a_friendship() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;
    let c = signup(&pool, "carol").await;

    let feed = feed_service::candidates_for(&pool, a.id, FEED_LIMIT)
        .await
        .unwrap();
    let ids: Vec<i64> = feed.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![b.id, c.id]);

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    let feed = feed_service::candidates_for(&pool, a.id, FEED_LIMIT)
        .await
        .unwrap();
    let ids: Vec<i64> = feed.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![c.id]);
    assert!(friendship_service::friends_of(&pool, a.id)
        .await
        .unwrap()
        .is_empty());

    relationship_service::record_like(&pool, b.id, a.id)
        .await
        .unwrap();
    let friends_of_a = friendship_service::friends_of(&pool, a.id).await.unwrap();
    let friends_of_b = friendship_service::friends_of(&pool, b.id).await.unwrap();
    assert_eq!(friends_of_a.len(), 1);
    assert_eq!(friends_of_a[0].id, b.id);
    assert_eq!(friends_of_b.len(), 1);
    assert_eq!(friends_of_b[0].id, a.id);
}
