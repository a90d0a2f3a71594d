//! Form validation, decoupled from the web layer: plain functions from raw
//! form input to either a cleaned value or a list of field errors.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    #[serde(default)]
    pub friend_radius: String,
    #[serde(default)]
    pub hobbies: String,
    #[serde(default)]
    pub interests: String,
    pub password: String,
}

/// A signup form that passed validation. Text fields are trimmed;
/// friend_radius is parsed.
#[derive(Debug, Clone)]
pub struct ValidSignup {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub friend_radius: Option<i64>,
    pub hobbies: String,
    pub interests: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_signup(form: &SignupForm) -> Result<ValidSignup, Vec<FieldError>> {
    let mut errors = Vec::new();

    let username = form.username.trim();
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let location = form.location.trim();
    let radius_raw = form.friend_radius.trim();

    if username.is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    }
    if first_name.is_empty() {
        errors.push(FieldError::new("first_name", "First name is required"));
    }
    if last_name.is_empty() {
        errors.push(FieldError::new("last_name", "Last name is required"));
    }
    if location.is_empty() {
        errors.push(FieldError::new("location", "Zipcode is required"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }

    let friend_radius = if radius_raw.is_empty() {
        None
    } else {
        match radius_raw.parse::<i64>() {
            Ok(r) if r >= 0 => Some(r),
            _ => {
                errors.push(FieldError::new(
                    "friend_radius",
                    "Friend radius must be a non-negative number",
                ));
                None
            }
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidSignup {
        username: username.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        location: location.to_string(),
        friend_radius,
        hobbies: form.hobbies.trim().to_string(),
        interests: form.interests.trim().to_string(),
        password: form.password.clone(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub fn validate_login(form: &LoginForm) -> Result<(String, String), Vec<FieldError>> {
    let mut errors = Vec::new();
    let username = form.username.trim();

    if username.is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok((username.to_string(), form.password.clone()))
}
