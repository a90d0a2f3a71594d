use sqlx::SqlitePool;

use crate::models::UserRow;

pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub location: &'a str,
    pub friend_radius: Option<i64>,
    pub hobbies: &'a str,
    pub interests: &'a str,
}

const SQL_INSERT_USER: &str = r#"
INSERT INTO users (
  username,
  password_hash,
  first_name,
  last_name,
  location,
  friend_radius,
  hobbies,
  interests
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SQL_LOAD_USER_BY_ID: &str = r#"
SELECT
    id, username, password_hash, first_name, last_name,
    location, friend_radius, hobbies, interests, photo_url
FROM users
WHERE id = ?1
LIMIT 1
"#;

pub const SQL_LOAD_USER_BY_USERNAME: &str = r#"
SELECT
    id, username, password_hash, first_name, last_name,
    location, friend_radius, hobbies, interests, photo_url
FROM users
WHERE username = ?1
LIMIT 1
"#;

const SQL_SET_PHOTO_URL: &str = r#"
UPDATE users
SET photo_url = ?2
WHERE id = ?1
"#;

/// Inserts the profile and returns the generated id. A UNIQUE violation on
/// username bubbles up as the raw sqlx error; the service layer classifies it.
pub async fn insert_user(pool: &SqlitePool, user: NewUser<'_>) -> sqlx::Result<i64> {
    let result = sqlx::query(SQL_INSERT_USER)
        .bind(user.username)
        .bind(user.password_hash)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.location)
        .bind(user.friend_radius)
        .bind(user.hobbies)
        .bind(user.interests)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn load_user_by_id(pool: &SqlitePool, user_id: i64) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_LOAD_USER_BY_ID)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn load_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_LOAD_USER_BY_USERNAME)
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Returns the number of rows updated (0 when the user does not exist).
pub async fn set_photo_url(pool: &SqlitePool, user_id: i64, url: &str) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_SET_PHOTO_URL)
        .bind(user_id)
        .bind(url)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
