use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::User;

#[derive(Debug)]
struct StoreState {
    users: Vec<User>,
    next_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory user records plus the next-id counter.
///
/// Records and counter share one lock, so every id is handed out exactly
/// once and listing order matches creation order. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    state: Arc<RwLock<StoreState>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<User> {
        self.state.read().await.users.clone()
    }

    /// Appends a record built from already-validated fields.
    pub async fn append(&self, name: String, email: String) -> User {
        let mut state = self.state.write().await;

        let user = User {
            id: state.next_id,
            name,
            email,
            created_at: Utc::now().trunc_subsecs(3),
        };
        state.next_id += 1;
        state.users.push(user.clone());

        debug!(user_id = user.id, "Appended user record");
        user
    }

    /// Drops every record and restarts ids at 1.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        *state = StoreState::default();
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
