use serde::Deserialize;

use crate::cache::CacheKey;

#[derive(Debug, Deserialize)]
pub struct RandomUserQuery {
    pub gender: Option<String>,
    pub name: Option<String>,
    pub occupation: Option<String>,
}

impl RandomUserQuery {
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(
            self.gender.as_deref(),
            self.name.as_deref(),
            self.occupation.as_deref(),
        )
    }
}
