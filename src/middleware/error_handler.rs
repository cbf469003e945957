use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;

/// Cap on how much of a 5xx body gets logged. Error payloads in this service
/// are one-line JSON (`{"msg": ...}`), so this is well above anything real.
const ERROR_BODY_LOG_LIMIT: usize = 1024;

/// Logs the status and body of every server-error response on its way out.
/// The body is consumed to read it, so the response is rebuilt afterwards.
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);

    match to_bytes(body, ERROR_BODY_LOG_LIMIT).await {
        Ok(bytes) => {
            error!(
                "server error: status {}, body {}",
                parts.status,
                String::from_utf8_lossy(&bytes)
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => {
            // body exceeded the cap; drop it rather than forward a partial read
            error!(
                "server error: status {}, body over {} bytes not logged",
                parts.status, ERROR_BODY_LOG_LIMIT
            );
            Response::from_parts(parts, Body::empty())
        }
    }
}
