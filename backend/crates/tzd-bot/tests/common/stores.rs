use tzd_core::{UserRecord, UserUpdate};
use tzd_db::{DirectoryStore, Result as DbErrorResult, UserRepository};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

/// Wraps a repository and counts reads and writes that reach it
pub struct CountingStore {
    inner: UserRepository,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: UserRepository) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.reads() + self.writes()
    }

    pub fn repository(&self) -> &UserRepository {
        &self.inner
    }
}

#[async_trait]
impl DirectoryStore for CountingStore {
    async fn upsert(&self, identity: &str, update: &UserUpdate) -> DbErrorResult<UserRecord> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.upsert(identity, update).await
    }

    async fn get(&self, identity: &str) -> DbErrorResult<Option<UserRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_identity(identity).await
    }

    async fn find_operators(&self, timezone: Option<&str>) -> DbErrorResult<Vec<UserRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_operators(timezone).await
    }

    async fn find_by_language(&self, language: &str) -> DbErrorResult<Vec<UserRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_language(language).await
    }
}

/// Panics on every call
pub struct PanickingStore;

#[async_trait]
impl DirectoryStore for PanickingStore {
    async fn upsert(&self, _identity: &str, _update: &UserUpdate) -> DbErrorResult<UserRecord> {
        panic!("upsert exploded");
    }

    async fn get(&self, _identity: &str) -> DbErrorResult<Option<UserRecord>> {
        panic!("get exploded");
    }

    async fn find_operators(&self, _timezone: Option<&str>) -> DbErrorResult<Vec<UserRecord>> {
        panic!("find_operators exploded");
    }

    async fn find_by_language(&self, _language: &str) -> DbErrorResult<Vec<UserRecord>> {
        panic!("find_by_language exploded");
    }
}

/// Never answers within any reasonable handler timeout
pub struct StalledStore;

#[async_trait]
impl DirectoryStore for StalledStore {
    async fn upsert(&self, identity: &str, _update: &UserUpdate) -> DbErrorResult<UserRecord> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(UserRecord::new(identity))
    }

    async fn get(&self, _identity: &str) -> DbErrorResult<Option<UserRecord>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn find_operators(&self, _timezone: Option<&str>) -> DbErrorResult<Vec<UserRecord>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }

    async fn find_by_language(&self, _language: &str) -> DbErrorResult<Vec<UserRecord>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }
}
