use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::session_service;
use crate::AppState;

pub const SESSION_COOKIE: &str = "session_id";

/// The acting user, resolved from the session cookie and threaded into
/// handlers as a request extension. Never read from ambient/global state.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub session_id: String,
    pub csrf_token: String,
}

/// Pulls the session token out of the Cookie header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split("; ")
                .find_map(|c| c.strip_prefix("session_id="))
        })
}

/// Resolves the cookie to a live session row. Used directly by the landing
/// page, which is public but renders the feed for signed-in visitors.
pub async fn session_user(pool: &SqlitePool, headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let token = session_token(headers)?;
    match session_service::resolve_session(pool, token).await {
        Ok(Some(session)) => Some(AuthenticatedUser {
            id: session.user_id,
            session_id: session.id,
            csrf_token: session.csrf_token,
        }),
        Ok(None) => None,
        Err(e) => {
            warn!("session lookup failed: {}", e);
            None
        }
    }
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(user) = session_user(&state.pool, request.headers()).await {
        request.extensions_mut().insert(user);
        return next.run(request).await;
    }

    Redirect::to("/login?notice=login_required").into_response()
}
