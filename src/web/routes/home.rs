use askama::Template;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::services::feed_service::{self, CandidateCard};
use crate::web::middleware::auth;
use crate::web::routes::notice_text;
use crate::AppState;

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate;

#[derive(Template)]
#[template(path = "feed.html")]
pub struct FeedTemplate {
    pub candidates: Vec<CandidateCard>,
    pub csrf_token: String,
    pub notice: String,
}

#[derive(Deserialize, Default)]
pub struct HomeQuery {
    pub notice: Option<String>,
}

/// Landing page: the candidate feed for signed-in visitors, the anonymous
/// landing otherwise.
pub async fn home_handler(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
    headers: HeaderMap,
) -> Response {
    let Some(user) = auth::session_user(&state.pool, &headers).await else {
        let template = LandingTemplate;
        return Html(template.render().unwrap()).into_response();
    };

    let candidates =
        match feed_service::build_feed_page(&state.pool, user.id, state.config.feed_limit).await {
            Ok(candidates) => candidates,
            Err(e) => return e.into_response(),
        };

    let template = FeedTemplate {
        candidates,
        csrf_token: user.csrf_token,
        notice: notice_text(query.notice.as_deref()),
    };
    Html(template.render().unwrap()).into_response()
}
