use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::database::user_repo;
use crate::error::AppError;
use crate::models::UserRow;
use crate::validation::{self, LoginForm, ValidSignup};

/// Hashes the password and persists the profile. The username UNIQUE
/// constraint is the source of truth for duplicates; the violation is
/// classified here, never exposed raw.
pub async fn create_user(pool: &SqlitePool, signup: ValidSignup) -> Result<UserRow, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(signup.password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?
        .to_string();

    let insert = user_repo::insert_user(
        pool,
        user_repo::NewUser {
            username: &signup.username,
            password_hash: &password_hash,
            first_name: &signup.first_name,
            last_name: &signup.last_name,
            location: &signup.location,
            friend_radius: signup.friend_radius,
            hobbies: &signup.hobbies,
            interests: &signup.interests,
        },
    )
    .await;

    let user_id = match insert {
        Ok(id) => id,
        Err(e) if AppError::is_unique_violation(&e) => return Err(AppError::DuplicateUsername),
        Err(e) => return Err(e.into()),
    };

    load_user(pool, user_id).await
}

pub async fn load_user(pool: &SqlitePool, user_id: i64) -> Result<UserRow, AppError> {
    user_repo::load_user_by_id(pool, user_id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<UserRow>> {
    user_repo::load_user_by_username(pool, username).await
}

/// Verifies username + password. Returns None on unknown username and on a
/// wrong password alike, so callers cannot tell which half failed.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<UserRow>, AppError> {
    let Some(user) = user_repo::load_user_by_username(pool, username).await? else {
        return Ok(None);
    };

    let Ok(parsed) = PasswordHash::new(&user.password_hash) else {
        warn!("stored password hash for user {} is unparseable", user.id);
        return Ok(None);
    };

    if Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
    {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

/// The full login flow. A malformed form, an unknown username, and a wrong
/// password all collapse into the one typed InvalidCredentials, so the
/// caller has a single generic failure to show.
pub async fn login(pool: &SqlitePool, form: &LoginForm) -> Result<UserRow, AppError> {
    let Ok((username, password)) = validation::validate_login(form) else {
        return Err(AppError::InvalidCredentials);
    };

    match authenticate(pool, &username, &password).await? {
        Some(user) => Ok(user),
        None => Err(AppError::InvalidCredentials),
    }
}

pub async fn attach_photo(pool: &SqlitePool, user_id: i64, url: &str) -> Result<(), AppError> {
    let updated = user_repo::set_photo_url(pool, user_id, url).await?;
    if updated == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub struct UserProfileView {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub location: String,
    pub friend_radius_label: String,
    pub hobbies: String,
    pub interests: String,
    pub photo_url: String,
}

impl UserProfileView {
    pub fn from_row(row: UserRow) -> Self {
        UserProfileView {
            id: row.id,
            username: row.username,
            display_name: format!("{} {}", row.first_name, row.last_name),
            location: row.location,
            friend_radius_label: row
                .friend_radius
                .map(|r| format!("{} miles", r))
                .unwrap_or_default(),
            hobbies: row.hobbies,
            interests: row.interests,
            photo_url: row.photo_url.unwrap_or_default(),
        }
    }
}

pub async fn load_user_profile_view(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<UserProfileView, AppError> {
    let row = load_user(pool, user_id).await?;
    Ok(UserProfileView::from_row(row))
}
