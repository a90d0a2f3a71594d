use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Extension,
};

use crate::services::user_service::{self, UserProfileView};
use crate::services::friendship_service;
use crate::web::middleware::auth::AuthenticatedUser;
use crate::AppState;

#[derive(Template)]
#[template(path = "user.html")]
pub struct UserProfileTemplate {
    pub user: UserProfileView,
    pub is_self: bool,
}

pub async fn user_profile_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Response {
    let view = match user_service::load_user_profile_view(&state.pool, user_id).await {
        Ok(view) => view,
        Err(e) => return e.into_response(),
    };

    let template = UserProfileTemplate {
        is_self: auth_user.id == user_id,
        user: view,
    };
    Html(template.render().unwrap()).into_response()
}

#[derive(Template)]
#[template(path = "friends.html")]
pub struct FriendsTemplate {
    pub user: UserProfileView,
    pub friends: Vec<UserProfileView>,
}

pub async fn user_friends_handler(
    Extension(_auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Response {
    let user = match user_service::load_user_profile_view(&state.pool, user_id).await {
        Ok(view) => view,
        Err(e) => return e.into_response(),
    };

    let friends = match friendship_service::friends_of(&state.pool, user_id).await {
        Ok(rows) => rows.into_iter().map(UserProfileView::from_row).collect(),
        Err(e) => return e.into_response(),
    };

    let template = FriendsTemplate { user, friends };
    Html(template.render().unwrap()).into_response()
}
