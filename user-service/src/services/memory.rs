use crate::models::User;
use crate::services::UserStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Map-backed [`UserStore`] for tests and local runs.
#[derive(Default)]
pub struct InMemoryUserStore {
    rows: HashMap<(String, String), User>,
    failure: Option<String>,
    empty_for_missing: bool,
    lookups: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, table: &str, id: &str, name: &str) -> Self {
        self.rows
            .insert((table.to_string(), id.to_string()), User::new(id, name));
        self
    }

    /// Answer misses with `Ok(Some(User::default()))` instead of `Ok(None)`.
    pub fn with_empty_for_missing(mut self) -> Self {
        self.empty_for_missing = true;
        self
    }

    /// Number of `find_by_id` calls served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, table: &str, id: &str) -> Result<Option<User>, anyhow::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.failure {
            return Err(anyhow::anyhow!("{}", reason));
        }

        match self.rows.get(&(table.to_string(), id.to_string())) {
            Some(user) => Ok(Some(user.clone())),
            None if self.empty_for_missing => Ok(Some(User::default())),
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> Result<(), anyhow::Error> {
        match &self.failure {
            Some(reason) => Err(anyhow::anyhow!("{}", reason)),
            None => Ok(()),
        }
    }
}
