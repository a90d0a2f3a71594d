use std::sync::Arc;

use sqlx::SqlitePool;

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;
pub mod web;

/// Shared handler state: one pool, one config, one HTTP client for the
/// photo store (reqwest clients are cheap to clone, expensive to build).
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<config::Config>,
    pub http: reqwest::Client,
}
