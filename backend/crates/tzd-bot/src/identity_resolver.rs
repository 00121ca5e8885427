use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Label shown for an identity whose display name is not known
pub const UNKNOWN_USER: &str = "Unknown User";

/// Maps opaque identities to human-readable names.
///
/// Resolution never fails; an unknown identity renders as [`UNKNOWN_USER`].
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn display_name(&self, identity: &str) -> Option<String>;

    /// Record a name seen on an inbound event. No-op by default.
    async fn remember(&self, _identity: &str, _display_name: &str) {}

    async fn label(&self, identity: &str) -> String {
        self.display_name(identity)
            .await
            .unwrap_or_else(|| UNKNOWN_USER.to_string())
    }
}

/// In-process cache filled from the display names carried on events.
#[derive(Debug, Clone, Default)]
pub struct DisplayNameCache {
    names: Arc<RwLock<HashMap<String, String>>>,
}

impl DisplayNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.names.read().await.len()
    }
}

#[async_trait]
impl IdentityResolver for DisplayNameCache {
    async fn display_name(&self, identity: &str) -> Option<String> {
        self.names.read().await.get(identity).cloned()
    }

    async fn remember(&self, identity: &str, display_name: &str) {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return;
        }
        self.names
            .write()
            .await
            .insert(identity.to_string(), display_name.to_string());
    }
}
