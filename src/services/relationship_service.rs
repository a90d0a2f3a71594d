use std::collections::HashSet;

use sqlx::SqlitePool;

use crate::database::relationship_repo;
use crate::error::AppError;

/// Records that `viewer_id` liked `target_id`. Idempotent; clears any
/// Dislike for the same ordered pair in the same transaction. The feed never
/// offers the viewer to themselves, so SelfReference is a defensive check.
pub async fn record_like(
    pool: &SqlitePool,
    viewer_id: i64,
    target_id: i64,
) -> Result<(), AppError> {
    if viewer_id == target_id {
        return Err(AppError::SelfReference);
    }
    relationship_repo::upsert_like(pool, viewer_id, target_id)
        .await
        .map_err(classify_edge_error)
}

pub async fn record_dislike(
    pool: &SqlitePool,
    viewer_id: i64,
    target_id: i64,
) -> Result<(), AppError> {
    if viewer_id == target_id {
        return Err(AppError::SelfReference);
    }
    relationship_repo::upsert_dislike(pool, viewer_id, target_id)
        .await
        .map_err(classify_edge_error)
}

/// An edge pointing at a missing user trips the FOREIGN KEY constraint;
/// surface that as NotFound instead of a raw storage error.
fn classify_edge_error(err: sqlx::Error) -> AppError {
    if AppError::is_foreign_key_violation(&err) {
        AppError::NotFound
    } else {
        err.into()
    }
}

pub async fn likes_given_by(pool: &SqlitePool, user_id: i64) -> Result<HashSet<i64>, AppError> {
    let ids = relationship_repo::load_liked_ids(pool, user_id).await?;
    Ok(ids.into_iter().collect())
}

pub async fn likes_received_by(pool: &SqlitePool, user_id: i64) -> Result<HashSet<i64>, AppError> {
    let ids = relationship_repo::load_liker_ids(pool, user_id).await?;
    Ok(ids.into_iter().collect())
}

pub async fn dislikes_given_by(pool: &SqlitePool, user_id: i64) -> Result<HashSet<i64>, AppError> {
    let ids = relationship_repo::load_disliked_ids(pool, user_id).await?;
    Ok(ids.into_iter().collect())
}

/// Everyone the viewer has already liked or disliked; the feed excludes
/// exactly this set.
pub async fn judged_by(pool: &SqlitePool, user_id: i64) -> Result<HashSet<i64>, AppError> {
    let ids = relationship_repo::load_judged_ids(pool, user_id).await?;
    Ok(ids.into_iter().collect())
}
