use crate::{IdentityResolver, PendingSelections, RequestContext, UserRef};

use tzd_db::{DirectoryStore, QueryEngine};

use std::sync::Arc;

/// Context passed to all handlers containing request metadata and resources.
#[derive(Clone)]
pub struct HandlerContext {
    /// Directory store shared by every handler
    pub store: Arc<dyn DirectoryStore>,
    /// Read-only views over the same store
    pub queries: QueryEngine,
    /// Live selector prompts
    pub selections: PendingSelections,
    /// Display names for rendering identities
    pub names: Arc<dyn IdentityResolver>,
    /// Request context for tracing
    pub request_ctx: RequestContext,
}

impl HandlerContext {
    pub fn new(
        store: Arc<dyn DirectoryStore>,
        selections: PendingSelections,
        names: Arc<dyn IdentityResolver>,
        request_ctx: RequestContext,
    ) -> Self {
        Self {
            queries: QueryEngine::new(store.clone()),
            store,
            selections,
            names,
            request_ctx,
        }
    }

    /// Get log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        self.request_ctx.log_prefix()
    }

    /// Name to show for `user`: the name on the event, else the resolver's.
    pub async fn user_label(&self, user: &UserRef) -> String {
        match user.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.names.label(&user.identity).await,
        }
    }

    pub async fn label(&self, identity: &str) -> String {
        self.names.label(identity).await
    }
}

impl std::fmt::Debug for HandlerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerContext")
            .field("identity", &self.request_ctx.identity)
            .field("correlation_id", &self.request_ctx.correlation_id)
            .finish()
    }
}
