use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use tracing::info;

use crate::{
    AppState,
    auth::{generate_token, hash_password, verify_password},
    error::AppError,
    store::User,
    validation,
};

use super::model::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    validation::validate_register(&req)?;

    // Cheap uniqueness check before paying for the hash. The store re-checks
    // under its write lock, which is the authoritative decision.
    if state.users.contains(&req.email).await {
        return Err(AppError::DuplicateEmail);
    }

    let password = req.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

    state
        .users
        .insert_if_absent(User {
            username: req.username,
            email: req.email.clone(),
            password_hash,
        })
        .await?;

    info!("registered user {}", req.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    validation::validate_login(&req)?;

    let user = state
        .users
        .find_by_email(&req.email)
        .await
        .ok_or(AppError::UserNotFound)?;

    let password = req.password;
    let hash = user.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await??;
    if !matches {
        return Err(AppError::BadPassword);
    }

    let token = generate_token(&user.email, &state.config)?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
