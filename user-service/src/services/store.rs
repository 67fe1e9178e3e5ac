use crate::models::User;
use async_trait::async_trait;

/// Identifier-keyed, read-only access to a users table.
///
/// `find_by_id` answers three ways: `Ok(Some(user))` for a row,
/// `Ok(None)` when the table has no such id, and `Err` only when the backend
/// itself failed. Absence must never be reported as an error. Implementations
/// are shared across concurrent requests and do their own synchronisation.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, table: &str, id: &str) -> Result<Option<User>, anyhow::Error>;

    async fn health_check(&self) -> Result<(), anyhow::Error>;
}
