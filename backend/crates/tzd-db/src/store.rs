use crate::Result as DbErrorResult;

use tzd_core::{UserRecord, UserUpdate};

use async_trait::async_trait;

/// The directory's single source of truth.
///
/// Everything the dispatcher and the query engine read or write goes through
/// this trait, so handlers can be driven against any backing store.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Apply the present fields of `update`, creating the record if needed.
    async fn upsert(&self, identity: &str, update: &UserUpdate) -> DbErrorResult<UserRecord>;

    /// Point lookup. A missing record is `Ok(None)`.
    async fn get(&self, identity: &str) -> DbErrorResult<Option<UserRecord>>;

    async fn set_operator_flag(&self, identity: &str, value: bool) -> DbErrorResult<UserRecord> {
        self.upsert(identity, &UserUpdate::new().operator(value))
            .await
    }

    /// Operators, optionally with an exact timezone match, in storage order.
    async fn find_operators(&self, timezone: Option<&str>) -> DbErrorResult<Vec<UserRecord>>;

    /// Records whose joined language string contains `language`.
    async fn find_by_language(&self, language: &str) -> DbErrorResult<Vec<UserRecord>>;
}
