mod common;

use std::collections::HashSet;

use common::{signup, test_pool};
use friender::error::AppError;
use friender::services::{friendship_service, relationship_service};

#[tokio::test]
async fn record_like_shows_up_on_both_sides() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();

    assert!(relationship_service::likes_given_by(&pool, a.id)
        .await
        .unwrap()
        .contains(&b.id));
    assert!(relationship_service::likes_received_by(&pool, b.id)
        .await
        .unwrap()
        .contains(&a.id));
}

#[tokio::test]
async fn record_like_is_idempotent() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    let once = relationship_service::likes_given_by(&pool, a.id)
        .await
        .unwrap();

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    let twice = relationship_service::likes_given_by(&pool, a.id)
        .await
        .unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice, HashSet::from([b.id]));
}

#[tokio::test]
async fn dislike_clears_an_existing_like() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    relationship_service::record_dislike(&pool, a.id, b.id)
        .await
        .unwrap();

    assert!(!relationship_service::likes_given_by(&pool, a.id)
        .await
        .unwrap()
        .contains(&b.id));
    assert!(relationship_service::dislikes_given_by(&pool, a.id)
        .await
        .unwrap()
        .contains(&b.id));
}

#[tokio::test]
async fn like_clears_an_existing_dislike() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;

    relationship_service::record_dislike(&pool, a.id, b.id)
        .await
        .unwrap();
    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();

    assert!(!relationship_service::dislikes_given_by(&pool, a.id)
        .await
        .unwrap()
        .contains(&b.id));
    assert!(relationship_service::likes_given_by(&pool, a.id)
        .await
        .unwrap()
        .contains(&b.id));
}

#[tokio::test]
async fn self_judgement_is_rejected() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;

    let err = relationship_service::record_like(&pool, a.id, a.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::SelfReference));

    let err = relationship_service::record_dislike(&pool, a.id, a.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::SelfReference));

    assert!(relationship_service::judged_by(&pool, a.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn judging_a_missing_user_is_not_found() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;

    let err = relationship_service::record_like(&pool, a.id, 9999)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn judged_by_is_the_union_of_likes_and_dislikes() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;
    let c = signup(&pool, "carol").await;

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    relationship_service::record_dislike(&pool, a.id, c.id)
        .await
        .unwrap();

    let judged = relationship_service::judged_by(&pool, a.id).await.unwrap();
    assert_eq!(judged, HashSet::from([b.id, c.id]));
}

#[tokio::test]
async fn friendship_requires_a_mutual_like() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    // One-sided like is not a friendship.
    assert!(friendship_service::friends_of(&pool, a.id)
        .await
        .unwrap()
        .is_empty());

    relationship_service::record_like(&pool, b.id, a.id)
        .await
        .unwrap();
    let friends_of_a = friendship_service::friends_of(&pool, a.id).await.unwrap();
    assert_eq!(friends_of_a.len(), 1);
    assert_eq!(friends_of_a[0].id, b.id);
}

#[tokio::test]
async fn friendship_is_symmetric() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;
    let c = signup(&pool, "carol").await;

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    relationship_service::record_like(&pool, b.id, a.id)
        .await
        .unwrap();
    relationship_service::record_like(&pool, c.id, a.id)
        .await
        .unwrap();

    for (x, y) in [(a.id, b.id), (a.id, c.id), (b.id, c.id)] {
        let x_has_y = friendship_service::friends_of(&pool, x)
            .await
            .unwrap()
            .iter()
            .any(|u| u.id == y);
        let y_has_x = friendship_service::friends_of(&pool, y)
            .await
            .unwrap()
            .iter()
            .any(|u| u.id == x);
        assert_eq!(x_has_y, y_has_x, "friendship must be symmetric");
    }
}

#[tokio::test]
async fn deleting_a_user_cascades_their_edges() {
    let pool = test_pool().await;
    let a = signup(&pool, "alice").await;
    let b = signup(&pool, "bob").await;

    relationship_service::record_like(&pool, a.id, b.id)
        .await
        .unwrap();
    relationship_service::record_dislike(&pool, b.id, a.id)
        .await
        .unwrap();

    sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(b.id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(relationship_service::judged_by(&pool, a.id)
        .await
        .unwrap()
        .is_empty());
    assert!(relationship_service::likes_received_by(&pool, a.id)
        .await
        .unwrap()
        .is_empty());
}
