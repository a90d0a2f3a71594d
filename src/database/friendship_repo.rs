use sqlx::SqlitePool;

use crate::models::UserRow;

/// A friendship is a mutual like: the user appears on both sides of the
/// likes table. Never materialized, always recomputed from the edges.
pub const SQL_MUTUAL_FRIENDS: &str = r#"
SELECT
    u.id, u.username, u.password_hash, u.first_name, u.last_name,
    u.location, u.friend_radius, u.hobbies, u.interests, u.photo_url
FROM users u
JOIN likes given    ON given.liked_user_id = u.id AND given.liker_user_id = ?1
JOIN likes received ON received.liker_user_id = u.id AND received.liked_user_id = ?1
ORDER BY u.id ASC
"#;

pub async fn load_mutual_friends(pool: &SqlitePool, user_id: i64) -> sqlx::Result<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_MUTUAL_FRIENDS)
        .bind(user_id)
        .fetch_all(pool)
        .await
}
