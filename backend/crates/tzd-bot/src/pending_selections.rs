//! Correlation of selector prompts with their responses.
//!
//! A prompt registers `token -> (kind, identity, issued_at)`. A response is
//! accepted only while its token is live and only from the identity the
//! prompt was issued to. Resolving consumes the token.

use tzd_core::SelectorKind;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection {
    pub kind: SelectorKind,
    pub identity: String,
    pub issued_at: Instant,
}

impl PendingSelection {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.issued_at.elapsed() >= ttl
    }
}

#[derive(Debug, Clone)]
pub struct PendingSelections {
    pending: Arc<RwLock<HashMap<String, PendingSelection>>>,
    ttl: Duration,
}

impl PendingSelections {
    pub fn new(ttl: Duration) -> Self {
        Self {
            pending: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `identity`, superseding any live prompt of the same kind.
    pub async fn register(&self, identity: &str, kind: SelectorKind) -> String {
        let token = format!("{}:{}", kind.as_str(), Uuid::new_v4().as_simple());

        let mut pending = self.pending.write().await;
        pending.retain(|_, p| !(p.identity == identity && p.kind == kind));
        pending.insert(
            token.clone(),
            PendingSelection {
                kind,
                identity: identity.to_string(),
                issued_at: Instant::now(),
            },
        );

        debug!("Registered {} prompt for {}", kind, identity);
        token
    }

    /// Consume `token` for `identity`.
    ///
    /// `None` for unknown and expired tokens. A token presented by another
    /// identity is left in place for its owner.
    pub async fn take(&self, token: &str, identity: &str) -> Option<PendingSelection> {
        let mut pending = self.pending.write().await;

        let (owned, expired) = match pending.get(token) {
            None => return None,
            Some(p) => (p.identity == identity, p.is_expired(self.ttl)),
        };

        if expired {
            pending.remove(token);
            return None;
        }
        if !owned {
            return None;
        }

        pending.remove(token)
    }

    /// Drop every expired token, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut pending = self.pending.write().await;
        let before = pending.len();
        pending.retain(|_, p| !p.is_expired(self.ttl));
        before - pending.len()
    }

    pub async fn len(&self) -> usize {
        self.pending.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Purge expired tokens every `every` until the handle is aborted.
    pub fn spawn_sweep(&self, every: Duration) -> JoinHandle<()> {
        let selections = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let purged = selections.purge_expired().await;
                if purged > 0 {
                    debug!("Purged {} expired selection prompt(s)", purged);
                }
            }
        })
    }
}
