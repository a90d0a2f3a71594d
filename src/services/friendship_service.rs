use sqlx::SqlitePool;

use crate::database::friendship_repo;
use crate::error::AppError;
use crate::models::UserRow;

/// Mutual likes for `user_id`, as full user records in ascending id order.
/// Symmetric by construction: B shows up for A exactly when A shows up
/// for B.
pub async fn friends_of(pool: &SqlitePool, user_id: i64) -> Result<Vec<UserRow>, AppError> {
    let rows = friendship_repo::load_mutual_friends(pool, user_id).await?;
    Ok(rows)
}
