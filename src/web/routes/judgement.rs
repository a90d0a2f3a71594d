use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::relationship_service;
use crate::web::middleware::auth::AuthenticatedUser;
use crate::AppState;

#[derive(Deserialize)]
pub struct JudgementForm {
    pub csrf_token: String,
}

/// POST /pending/:liked_user_id — records a Like from the session user.
/// The original surface exposed this as a state-mutating GET; the path is
/// kept, the method is not.
pub async fn like_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(liked_user_id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<JudgementForm>,
) -> Response {
    if form.csrf_token != auth_user.csrf_token {
        return Redirect::to("/?notice=unauthorized").into_response();
    }

    let outcome = relationship_service::record_like(&state.pool, auth_user.id, liked_user_id).await;
    judgement_response(outcome)
}

/// POST /disliking/:disliked_user_id — mirror of [`like_handler`].
pub async fn dislike_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(disliked_user_id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<JudgementForm>,
) -> Response {
    if form.csrf_token != auth_user.csrf_token {
        return Redirect::to("/?notice=unauthorized").into_response();
    }

    let outcome =
        relationship_service::record_dislike(&state.pool, auth_user.id, disliked_user_id).await;
    judgement_response(outcome)
}

fn judgement_response(outcome: Result<(), AppError>) -> Response {
    match outcome {
        Ok(()) => Redirect::to("/").into_response(),
        Err(AppError::SelfReference) => Redirect::to("/?notice=self_judgement").into_response(),
        Err(e) => e.into_response(),
    }
}
