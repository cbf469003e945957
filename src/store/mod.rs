use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// In-memory credential store, keyed by email (case-sensitive). Process
/// lifetime only; everything is gone on restart.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, email: &str) -> bool {
        self.users.read().await.contains_key(email)
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.get(email).cloned()
    }

    /// Inserts the user unless the email is already taken. The re-check under
    /// the write lock is the serialization point for concurrent registrations
    /// racing on the same email; the losing writer gets `DuplicateEmail`.
    pub async fn insert_if_absent(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AppError::DuplicateEmail);
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}
