use tzd_core::{UserRecord, UserUpdate};
use tzd_db::{DirectoryStore, Result as DbErrorResult, UserRepository};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Wraps a repository and counts every call that reaches the store
pub struct CountingStore {
    inner: UserRepository,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: UserRepository) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DirectoryStore for CountingStore {
    async fn upsert(&self, identity: &str, update: &UserUpdate) -> DbErrorResult<UserRecord> {
        self.hit();
        self.inner.upsert(identity, update).await
    }

    async fn get(&self, identity: &str) -> DbErrorResult<Option<UserRecord>> {
        self.hit();
        self.inner.find_by_identity(identity).await
    }

    async fn find_operators(&self, timezone: Option<&str>) -> DbErrorResult<Vec<UserRecord>> {
        self.hit();
        self.inner.find_operators(timezone).await
    }

    async fn find_by_language(&self, language: &str) -> DbErrorResult<Vec<UserRecord>> {
        self.hit();
        self.inner.find_by_language(language).await
    }
}
