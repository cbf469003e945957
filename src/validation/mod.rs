use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::AppError;
use crate::routes::user::{LoginRequest, RegisterRequest};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const MIN_USERNAME_LEN: usize = 5;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: &str, msg: &str) -> Self {
        Self {
            field: field.to_string(),
            msg: msg.to_string(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Shape checks for `POST /api/register`. Collects every violation in rule
/// order; the confirmation rule compares against the raw password value, not
/// its validity.
pub fn validate_register(req: &RegisterRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if req.username.chars().count() < MIN_USERNAME_LEN {
        errors.push(FieldError::new(
            "username",
            "Username must be at least 5 characters",
        ));
    }
    if !is_valid_email(&req.email) {
        errors.push(FieldError::new("email", "Email is not valid"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    if req.password_confirm != req.password {
        errors.push(FieldError::new(
            "passwordConfirm",
            "Password and confirmation do not match",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Shape checks for `POST /api/login`. The password rule is structural only;
/// credential comparison happens later against the store.
pub fn validate_login(req: &LoginRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if !is_valid_email(&req.email) {
        errors.push(FieldError::new("email", "Email is not valid"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new("password", "Password is not valid"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
