#![allow(dead_code)]

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use friender::models::UserRow;
use friender::services::user_service;
use friender::validation::{validate_signup, SignupForm};

pub const TEST_PASSWORD: &str = "hunter22";

/// One-connection in-memory database with migrations applied. A single
/// connection keeps every query on the same :memory: instance; foreign keys
/// are on, as in production, so cascades and FK violations behave the same.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory sqlite options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    sqlx::migrate!().run(&pool).await.expect("migrations");
    pool
}

pub fn signup_form(username: &str) -> SignupForm {
    SignupForm {
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        location: "94110".to_string(),
        friend_radius: "25".to_string(),
        hobbies: "hiking".to_string(),
        interests: "maps".to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

pub async fn signup(pool: &SqlitePool, username: &str) -> UserRow {
    let valid = validate_signup(&signup_form(username)).expect("valid signup form");
    user_service::create_user(pool, valid)
        .await
        .expect("signup succeeds")
}
