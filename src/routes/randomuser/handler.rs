use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use tracing::debug;

use crate::{AppState, error::AppError};

use super::model::RandomUserQuery;

/// Cache-augmented proxy for the external random-user source. A live cached
/// entry short-circuits the upstream call; a failed fetch is returned to the
/// caller and never cached. Two concurrent misses on the same key may both
/// fetch; last write wins.
#[axum::debug_handler]
pub async fn random_user(
    State(state): State<AppState>,
    Query(query): Query<RandomUserQuery>,
) -> Result<Json<Value>, AppError> {
    let key = query.cache_key();

    if let Some(record) = state.cache.get(&key).await {
        debug!("cache hit for {:?}", key);
        return Ok(Json(record));
    }

    let record = state
        .upstream
        .fetch_random_user(
            query.gender.as_deref(),
            query.name.as_deref(),
            query.occupation.as_deref(),
        )
        .await?;

    state.cache.insert(key, record.clone()).await;

    Ok(Json(record))
}
