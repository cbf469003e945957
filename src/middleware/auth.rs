use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

use crate::{AppState, auth::verify_token, error::AppError};

/// Verifies the bearer token on protected routes. The `Authorization` header
/// carries the raw token, no scheme prefix. Verified claims are attached to
/// the request for the handler.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        // an empty header value is the same as no token at all
        .filter(|token| !token.is_empty())
        .ok_or(AppError::MissingToken)?;

    let claims = verify_token(token, &state.config)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
