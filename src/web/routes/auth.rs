use askama::Template;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use cookie::Cookie;
use serde::Deserialize;
use tracing::warn;

use crate::error::AppError;
use crate::services::{session_service, user_service};
use crate::validation::{self, LoginForm, SignupForm};
use crate::web::middleware::auth::{AuthenticatedUser, SESSION_COOKIE};
use crate::web::routes::notice_text;
use crate::AppState;

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub errors: Vec<String>,
    pub form: SignupForm,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: String,
    pub username: String,
    pub notice: String,
}

#[derive(Deserialize, Default)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

fn session_cookie(value: &str) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, value.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(cookie::SameSite::Lax);
    cookie
}

fn with_session_cookie(mut response: Response, value: &str) -> Response {
    if let Ok(header_value) = session_cookie(value).to_string().parse() {
        response
            .headers_mut()
            .append(header::SET_COOKIE, header_value);
    }
    response
}

pub async fn signup_page() -> Html<String> {
    let template = SignupTemplate {
        errors: vec![],
        form: SignupForm::default(),
    };
    Html(template.render().unwrap())
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Response {
    let valid = match validation::validate_signup(&form) {
        Ok(valid) => valid,
        Err(field_errors) => {
            let template = SignupTemplate {
                errors: field_errors.into_iter().map(|e| e.message).collect(),
                form,
            };
            return Html(template.render().unwrap()).into_response();
        }
    };

    let user = match user_service::create_user(&state.pool, valid).await {
        Ok(user) => user,
        Err(AppError::DuplicateUsername) => {
            let template = SignupTemplate {
                errors: vec!["That username is already taken.".to_string()],
                form,
            };
            return Html(template.render().unwrap()).into_response();
        }
        Err(e) => return e.into_response(),
    };

    // Sign the new user in and send them to the photo-upload step.
    let session = match session_service::open_session(&state.pool, user.id).await {
        Ok(session) => session,
        Err(e) => return e.into_response(),
    };

    let response = Redirect::to(&format!("/profilephoto/{}", user.id)).into_response();
    with_session_cookie(response, &session.id)
}

pub async fn login_page(Query(query): Query<NoticeQuery>) -> Html<String> {
    let template = LoginTemplate {
        error: String::new(),
        username: String::new(),
        notice: notice_text(query.notice.as_deref()),
    };
    Html(template.render().unwrap())
}

pub async fn login_handler(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let user = match user_service::login(&state.pool, &form).await {
        Ok(user) => user,
        // One generic message for a malformed attempt, an unknown username,
        // and a wrong password alike, so the form leaks nothing.
        Err(AppError::InvalidCredentials) => return invalid_credentials_page(&form.username),
        Err(e) => return e.into_response(),
    };

    let session = match session_service::open_session(&state.pool, user.id).await {
        Ok(session) => session,
        Err(e) => return e.into_response(),
    };

    let response = Redirect::to("/").into_response();
    with_session_cookie(response, &session.id)
}

fn invalid_credentials_page(username: &str) -> Response {
    let template = LoginTemplate {
        error: "Invalid credentials.".to_string(),
        username: username.trim().to_string(),
        notice: String::new(),
    };
    Html(template.render().unwrap()).into_response()
}

#[derive(Deserialize)]
pub struct LogoutForm {
    pub csrf_token: String,
}

pub async fn logout_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Form(form): Form<LogoutForm>,
) -> Response {
    if form.csrf_token != auth_user.csrf_token {
        return Redirect::to("/?notice=unauthorized").into_response();
    }

    if let Err(e) = session_service::close_session(&state.pool, &auth_user.session_id).await {
        warn!("logout failed to delete session: {}", e);
    }

    // Clear the cookie regardless; the session row is gone or worthless.
    let response = Redirect::to("/").into_response();
    with_session_cookie(response, "")
}
