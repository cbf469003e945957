use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
    #[error("email is already registered")]
    DuplicateEmail,
    #[error("user not found")]
    UserNotFound,
    #[error("invalid password")]
    BadPassword,
    #[error("access denied, no token provided")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("token has expired")]
    ExpiredToken,
    #[error("error fetching data from upstream API")]
    Upstream(String),
    #[error("internal server error")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorList {
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct ErrorMessage {
    msg: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorList { errors })).into_response()
            }
            AppError::DuplicateEmail => {
                field_errors(StatusCode::BAD_REQUEST, "email", "Email is already registered")
            }
            AppError::UserNotFound => {
                field_errors(StatusCode::BAD_REQUEST, "email", "User not found")
            }
            AppError::BadPassword => {
                field_errors(StatusCode::BAD_REQUEST, "password", "Invalid password")
            }
            AppError::MissingToken => unauthorized("Access denied, no token provided"),
            AppError::InvalidToken => unauthorized("Invalid token"),
            AppError::ExpiredToken => unauthorized("Token has expired"),
            AppError::Upstream(reason) => {
                tracing::warn!("upstream fetch failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessage {
                        msg: "Error fetching data from API".to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::Internal(reason) => {
                tracing::error!("internal error: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessage {
                        msg: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

fn field_errors(status: StatusCode, field: &str, msg: &str) -> Response {
    (
        status,
        Json(ErrorList {
            errors: vec![FieldError::new(field, msg)],
        }),
    )
        .into_response()
}

fn unauthorized(msg: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorMessage {
            msg: msg.to_string(),
        }),
    )
        .into_response()
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AppError::Internal(format!("password hashing failed: {}", e))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        AppError::Internal(format!("token signing failed: {}", e))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("blocking task failed: {}", e))
    }
}
