use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};
use tracing::warn;

use crate::error::AppError;
use crate::services::{photo_service, user_service};
use crate::web::middleware::auth::AuthenticatedUser;
use crate::AppState;

#[derive(Template)]
#[template(path = "photo_upload.html")]
pub struct PhotoUploadTemplate {
    pub user_id: i64,
    pub csrf_token: String,
}

pub async fn photo_upload_page(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
) -> Response {
    if auth_user.id != user_id {
        return Redirect::to("/?notice=unauthorized").into_response();
    }

    let template = PhotoUploadTemplate {
        user_id,
        csrf_token: auth_user.csrf_token,
    };
    Html(template.render().unwrap()).into_response()
}

struct UploadedFile {
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// POST /profilephoto/:user_id — one image file, stored under a fresh unique
/// name, URL recorded on the profile. Upload failure is non-fatal: the user
/// lands back on the feed with a notice and an unchanged profile.
pub async fn photo_upload_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    if auth_user.id != user_id {
        return Redirect::to("/?notice=unauthorized").into_response();
    }

    let mut csrf_token = String::new();
    let mut file: Option<UploadedFile> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("multipart read failed: {}", e);
                return Redirect::to("/?notice=no_file").into_response();
            }
        };

        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "csrf_token" => {
                csrf_token = field.text().await.unwrap_or_default();
            }
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(e) => {
                        warn!("file field read failed: {}", e);
                        return Redirect::to("/?notice=no_file").into_response();
                    }
                };
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    if csrf_token != auth_user.csrf_token {
        return Redirect::to("/?notice=unauthorized").into_response();
    }

    let Some(file) = file.filter(|f| !f.bytes.is_empty()) else {
        return Redirect::to("/?notice=no_file").into_response();
    };

    let url = match photo_service::store_photo(
        &state.http,
        &state.config,
        &file.filename,
        &file.content_type,
        file.bytes,
    )
    .await
    {
        Ok(url) => url,
        Err(AppError::UploadFailure(reason)) => {
            warn!("photo upload failed for user {}: {}", user_id, reason);
            return Redirect::to("/?notice=upload_failed").into_response();
        }
        Err(e) => return e.into_response(),
    };

    if let Err(e) = user_service::attach_photo(&state.pool, user_id, &url).await {
        return e.into_response();
    }

    Redirect::to("/").into_response()
}
