use std::env;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
    pub cache_ttl_secs: u64,
    pub cache_sweep_interval_secs: u64,
    pub upstream_url: String,
    pub upstream_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            // The secret signs every token, so it has no default.
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_secs: env_or("JWT_EXPIRATION_SECS", 3600),
            cache_ttl_secs: env_or("CACHE_TTL_SECS", 60),
            cache_sweep_interval_secs: env_or("CACHE_SWEEP_INTERVAL_SECS", 120),
            upstream_url: env::var("RANDOMUSER_URL")
                .unwrap_or_else(|_| "https://randomuser.me/api/".to_string()),
            upstream_timeout_secs: env_or("UPSTREAM_TIMEOUT_SECS", 10),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "::".to_string()),
            server_port: env_or("SERVER_PORT", 3000),
        })
    }

    pub fn jwt_expiration(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
impl Config {
    pub fn for_tests(secret: &str) -> Self {
        Config {
            jwt_secret: secret.to_string(),
            jwt_expiration_secs: 3600,
            cache_ttl_secs: 60,
            cache_sweep_interval_secs: 120,
            upstream_url: "https://randomuser.me/api/".to_string(),
            upstream_timeout_secs: 10,
            server_host: "::".to_string(),
            server_port: 3000,
        }
    }
}
