use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    middleware::{auth_middleware, log_errors},
};

pub mod protected;
pub mod randomuser;
pub mod user;

/// Builds the full `/api` router. Tests drive this directly without binding
/// a socket.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/register", post(user::register))
        .route("/login", post(user::login))
        .route("/randomuser", get(randomuser::random_user));

    let protected_routes = Router::new()
        .route("/protected", get(protected::protected))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest(
            "/api",
            Router::new().merge(public_routes).merge(protected_routes),
        )
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
