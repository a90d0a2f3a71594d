use sqlx::SqlitePool;

const SQL_INSERT_LIKE: &str = r#"
INSERT OR IGNORE INTO likes (liker_user_id, liked_user_id)
VALUES (?1, ?2)
"#;

const SQL_DELETE_LIKE: &str = r#"
DELETE FROM likes
WHERE liker_user_id = ?1 AND liked_user_id = ?2
"#;

const SQL_INSERT_DISLIKE: &str = r#"
INSERT OR IGNORE INTO dislikes (disliker_user_id, disliked_user_id)
VALUES (?1, ?2)
"#;

const SQL_DELETE_DISLIKE: &str = r#"
DELETE FROM dislikes
WHERE disliker_user_id = ?1 AND disliked_user_id = ?2
"#;

pub const SQL_LIKED_IDS: &str = r#"
SELECT liked_user_id FROM likes
WHERE liker_user_id = ?1
"#;

pub const SQL_LIKER_IDS: &str = r#"
SELECT liker_user_id FROM likes
WHERE liked_user_id = ?1
"#;

pub const SQL_DISLIKED_IDS: &str = r#"
SELECT disliked_user_id FROM dislikes
WHERE disliker_user_id = ?1
"#;

pub const SQL_JUDGED_IDS: &str = r#"
SELECT liked_user_id FROM likes WHERE liker_user_id = ?1
UNION
SELECT disliked_user_id FROM dislikes WHERE disliker_user_id = ?1
"#;

/// Records a Like for the ordered pair. Runs in one transaction so a reader
/// never sees both edges for the pair: the opposite Dislike goes first, then
/// the Like is inserted (OR IGNORE makes re-recording a no-op).
pub async fn upsert_like(pool: &SqlitePool, viewer_id: i64, target_id: i64) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query(SQL_DELETE_DISLIKE)
        .bind(viewer_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query(SQL_INSERT_LIKE)
        .bind(viewer_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await
}

/// Mirror of [`upsert_like`]: removes any Like for the pair, then inserts
/// the Dislike.
pub async fn upsert_dislike(pool: &SqlitePool, viewer_id: i64, target_id: i64) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query(SQL_DELETE_LIKE)
        .bind(viewer_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query(SQL_INSERT_DISLIKE)
        .bind(viewer_id)
        .bind(target_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await
}

pub async fn load_liked_ids(pool: &SqlitePool, viewer_id: i64) -> sqlx::Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(SQL_LIKED_IDS)
        .bind(viewer_id)
        .fetch_all(pool)
        .await
}

pub async fn load_liker_ids(pool: &SqlitePool, target_id: i64) -> sqlx::Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(SQL_LIKER_IDS)
        .bind(target_id)
        .fetch_all(pool)
        .await
}

pub async fn load_disliked_ids(pool: &SqlitePool, viewer_id: i64) -> sqlx::Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(SQL_DISLIKED_IDS)
        .bind(viewer_id)
        .fetch_all(pool)
        .await
}

pub async fn load_judged_ids(pool: &SqlitePool, viewer_id: i64) -> sqlx::Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(SQL_JUDGED_IDS)
        .bind(viewer_id)
        .fetch_all(pool)
        .await
}
