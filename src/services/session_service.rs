use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::session_repo;
use crate::error::AppError;
use crate::models::SessionRow;

/// Opens a fresh session for the user: opaque cookie token plus a per-session
/// CSRF token, both random UUIDs.
pub async fn open_session(pool: &SqlitePool, user_id: i64) -> Result<SessionRow, AppError> {
    let id = Uuid::new_v4().to_string();
    let csrf_token = Uuid::new_v4().to_string();

    session_repo::insert_session(
        pool,
        session_repo::NewSession {
            id: &id,
            user_id,
            csrf_token: &csrf_token,
        },
    )
    .await?;

    Ok(SessionRow {
        id,
        user_id,
        csrf_token,
    })
}

pub async fn close_session(pool: &SqlitePool, session_id: &str) -> Result<(), AppError> {
    session_repo::delete_session(pool, session_id).await?;
    Ok(())
}

pub async fn resolve_session(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Option<SessionRow>, AppError> {
    Ok(session_repo::load_session(pool, session_id).await?)
}
