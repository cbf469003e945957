use config::Config;

use crate::cache::RandomUserCache;
use crate::store::UserStore;
use crate::upstream::UpstreamClient;

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod store;
pub mod upstream;
pub mod validation;

pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: UserStore,
    pub cache: RandomUserCache,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cache = RandomUserCache::new(config.cache_ttl());
        let upstream = UpstreamClient::new(&config);
        Self {
            config,
            users: UserStore::new(),
            cache,
            upstream,
        }
    }
}
