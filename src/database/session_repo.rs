use sqlx::SqlitePool;

use crate::models::SessionRow;

pub struct NewSession<'a> {
    pub id: &'a str,
    pub user_id: i64,
    pub csrf_token: &'a str,
}

const SQL_INSERT_SESSION: &str = r#"
INSERT INTO sessions (id, user_id, csrf_token)
VALUES (?1, ?2, ?3)
"#;

pub const SQL_LOAD_SESSION: &str = r#"
SELECT id, user_id, csrf_token
FROM sessions
WHERE id = ?1
LIMIT 1
"#;

const SQL_DELETE_SESSION: &str = r#"
DELETE FROM sessions
WHERE id = ?1
"#;

pub async fn insert_session(pool: &SqlitePool, session: NewSession<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_SESSION)
        .bind(session.id)
        .bind(session.user_id)
        .bind(session.csrf_token)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn load_session(pool: &SqlitePool, session_id: &str) -> sqlx::Result<Option<SessionRow>> {
    sqlx::query_as::<_, SessionRow>(SQL_LOAD_SESSION)
        .bind(session_id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_session(pool: &SqlitePool, session_id: &str) -> sqlx::Result<()> {
    sqlx::query(SQL_DELETE_SESSION)
        .bind(session_id)
        .execute(pool)
        .await?;
    Ok(())
}
