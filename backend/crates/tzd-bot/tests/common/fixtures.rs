use crate::common::CountingStore;

use tzd_bot::{
    Command, DisplayNameCache, Dispatcher, DispatcherConfig, IdentityResolver, InboundEvent,
    RenderableResult, SelectionResponse, UserRef,
};
use tzd_core::UserUpdate;
use tzd_db::{DirectoryStore, UserRepository};

use std::sync::Arc;
use std::time::Duration;

pub const OPERATOR: &str = "op-1";

pub struct TestBot {
    pub dispatcher: Dispatcher,
    pub store: Arc<CountingStore>,
    pub names: Arc<DisplayNameCache>,
}

impl TestBot {
    pub async fn new() -> Self {
        Self::with_config(DispatcherConfig::default()).await
    }

    pub async fn with_config(config: DispatcherConfig) -> Self {
        let repo = UserRepository::open_in_memory()
            .await
            .expect("Failed to create test database");
        let store = Arc::new(CountingStore::new(repo));
        let names = Arc::new(DisplayNameCache::new());
        let dispatcher = Dispatcher::new(
            store.clone() as Arc<dyn DirectoryStore>,
            names.clone() as Arc<dyn IdentityResolver>,
            config,
        );

        Self {
            dispatcher,
            store,
            names,
        }
    }

    pub async fn send(&self, event: impl Into<InboundEvent>) -> RenderableResult {
        self.dispatcher.dispatch(event.into()).await
    }

    /// Issue a prompt and return its token
    pub async fn prompt(&self, command: &str, caller: &str) -> String {
        let result = self.send(member(command, caller)).await;
        result
            .prompt
            .expect("command should return a selector prompt")
            .token
    }

    pub async fn select(&self, token: &str, caller: &str, values: &[&str]) -> RenderableResult {
        self.send(SelectionResponse::new(token, UserRef::new(caller), values))
            .await
    }

    /// Write directly, bypassing the dispatcher and the counters
    pub async fn seed(
        &self,
        identity: &str,
        timezone: Option<&str>,
        languages: Option<&str>,
        is_operator: bool,
    ) {
        let mut update = UserUpdate::new().operator(is_operator);
        if let Some(tz) = timezone {
            update = update.timezone(tz);
        }
        if let Some(langs) = languages {
            update = update.languages(langs);
        }
        self.store
            .repository()
            .upsert(identity, &update)
            .await
            .expect("Failed to seed user");
    }
}

pub fn member(command: &str, caller: &str) -> Command {
    Command::new(command, UserRef::new(caller)).with_interaction_id(format!("{command}-{caller}"))
}

pub fn operator(command: &str) -> Command {
    member(command, OPERATOR).as_operator()
}

pub fn short_timeout() -> DispatcherConfig {
    DispatcherConfig {
        handler_timeout: Duration::from_millis(100),
        ..DispatcherConfig::default()
    }
}

/// Dispatcher over an arbitrary store, for failure-injection tests
pub fn dispatcher_over(store: Arc<dyn DirectoryStore>, config: DispatcherConfig) -> Dispatcher {
    Dispatcher::new(store, Arc::new(DisplayNameCache::new()), config)
}
