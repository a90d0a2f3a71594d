use sqlx::SqlitePool;

use crate::models::UserRow;

/// Everyone the viewer has not judged yet, viewer excluded. Ascending id is
/// the documented feed order (stable across requests, newest profiles last).
pub const SQL_FEED_CANDIDATES: &str = r#"
SELECT
    u.id, u.username, u.password_hash, u.first_name, u.last_name,
    u.location, u.friend_radius, u.hobbies, u.interests, u.photo_url
FROM users u
WHERE u.id != ?1
  AND u.id NOT IN (SELECT liked_user_id FROM likes WHERE liker_user_id = ?1)
  AND u.id NOT IN (SELECT disliked_user_id FROM dislikes WHERE disliker_user_id = ?1)
ORDER BY u.id ASC
LIMIT ?2
"#;

pub async fn load_feed_candidates(
    pool: &SqlitePool,
    viewer_id: i64,
    limit: i64,
) -> sqlx::Result<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_FEED_CANDIDATES)
        .bind(viewer_id)
        .bind(limit)
        .fetch_all(pool)
        .await
}
