use std::path::Path;

use tracing::error;
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;

/// Uploads the image bytes to the photo store under a freshly generated
/// unique object name and returns the retrievable URL. The client carries an
/// explicit timeout; a failure here is non-fatal to the profile, the caller
/// just proceeds without a photo.
pub async fn store_photo(
    http: &reqwest::Client,
    config: &Config,
    original_filename: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<String, AppError> {
    let object_name = unique_object_name(original_filename);
    let url = format!(
        "{}/{}",
        config.photo_store_url.trim_end_matches('/'),
        object_name
    );

    let response = http
        .put(&url)
        .header("Content-Type", content_type)
        .body(bytes)
        .send()
        .await
        .map_err(|e| {
            error!("photo store request failed: {}", e);
            AppError::UploadFailure(e.to_string())
        })?;

    if !response.status().is_success() {
        return Err(AppError::UploadFailure(format!(
            "photo store returned {}",
            response.status()
        )));
    }

    Ok(url)
}

/// UUID plus the original extension (lowercased), so uploads never collide
/// and never reuse a caller-controlled path.
fn unique_object_name(original_filename: &str) -> String {
    let ext = Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext {
        Some(ext) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext),
        _ => Uuid::new_v4().to_string(),
    }
}
