use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::AppError;

/// Client for the external random-user data source. Requests are bounded by
/// the configured timeout; a timeout surfaces as an upstream failure.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(config.upstream_timeout())
            .build()
            .expect("Failed to build upstream HTTP client");

        Self {
            http,
            base_url: config.upstream_url.clone(),
        }
    }

    /// Fetches a single record, forwarding only the filters the caller
    /// actually provided. Errors and non-success statuses are not cached by
    /// anyone; callers simply retry on their next request.
    pub async fn fetch_random_user(
        &self,
        gender: Option<&str>,
        name: Option<&str>,
        occupation: Option<&str>,
    ) -> Result<Value, AppError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(gender) = gender.filter(|v| !v.is_empty()) {
            query.push(("gender", gender));
        }
        if let Some(name) = name.filter(|v| !v.is_empty()) {
            query.push(("name", name));
        }
        if let Some(occupation) = occupation.filter(|v| !v.is_empty()) {
            query.push(("occupation", occupation));
        }

        debug!("fetching random user from upstream, filters: {:?}", query);

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "upstream returned status {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        // The source wraps records in a `results` array; one record per call.
        body.get("results")
            .and_then(|results| results.get(0))
            .cloned()
            .ok_or_else(|| AppError::Upstream("upstream response had no results".to_string()))
    }
}
