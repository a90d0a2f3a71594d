pub mod auth;
pub mod home;
pub mod judgement;
pub mod photos;
pub mod user;

/// Maps the `?notice=` flash codes used across redirects to display text.
pub fn notice_text(code: Option<&str>) -> String {
    match code.unwrap_or("") {
        "login_required" => "Please log in first.",
        "unauthorized" => "That action was not allowed.",
        "self_judgement" => "You cannot judge yourself.",
        "upload_failed" => "Photo upload failed. Your profile is saved; you can retry later.",
        "no_file" => "Choose a file to upload.",
        _ => "",
    }
    .to_string()
}
