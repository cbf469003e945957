use axum::{Json, extract::Extension};
use serde::Serialize;

use crate::auth::Claims;

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: Claims,
}

/// The claims were verified and attached by the auth middleware.
#[axum::debug_handler]
pub async fn protected(Extension(claims): Extension<Claims>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "You are accessing a protected route".to_string(),
        user: claims,
    })
}
