use crate::handlers::response_builder::{build_error_result, build_failure_result};
use crate::{
    ArgumentValue, Command, CommandDefinition, CommandName, HandlerContext, IdentityResolver,
    InboundEvent, PendingSelections, RenderableResult, RequestContext, Result as BotErrorResult,
    command_definitions, handle_list_mods_by_timezone, handle_list_users_by_language,
    handle_profile, handle_remove_mod, handle_selection_response, handle_set_language,
    handle_set_mod, handle_set_timezone, log_handler_entry, log_handler_exit, require_operator,
    with_error_boundary,
};

use tzd_db::DirectoryStore;

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct DispatcherConfig {
    /// Upper bound on one handler run
    pub handler_timeout: Duration,
    /// Lifetime of a selector prompt
    pub selection_ttl: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            handler_timeout: Duration::from_secs(30),
            selection_ttl: Duration::from_secs(900),
        }
    }
}

/// Single entry point for inbound events.
///
/// Every event gets exactly one [`RenderableResult`]: handler errors, panics
/// and timeouts are all converted here.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn DirectoryStore>,
    selections: PendingSelections,
    names: Arc<dyn IdentityResolver>,
    config: DispatcherConfig,
}

impl Dispatcher {
    pub fn new(
        store: Arc<dyn DirectoryStore>,
        names: Arc<dyn IdentityResolver>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            store,
            selections: PendingSelections::new(config.selection_ttl),
            names,
            config,
        }
    }

    pub fn selections(&self) -> &PendingSelections {
        &self.selections
    }

    /// Definitions for the transport to register once at startup
    pub fn command_definitions(&self) -> Vec<CommandDefinition> {
        command_definitions()
    }

    pub async fn dispatch(&self, event: InboundEvent) -> RenderableResult {
        let request_ctx = RequestContext::new(&event.caller().identity, event.correlation_id());
        let handler_name = event.handler_name();

        log_handler_entry!(request_ctx, handler_name);
        self.remember_names(&event).await;

        let ctx = HandlerContext::new(
            self.store.clone(),
            self.selections.clone(),
            self.names.clone(),
            request_ctx.clone(),
        );
        let timeout = self.config.handler_timeout;
        let name = handler_name.clone();

        // The timeout runs inside the isolated task so a timed-out handler is
        // dropped rather than left running.
        let response = with_error_boundary(&request_ctx, &handler_name, move || async move {
            let log_prefix = ctx.log_prefix();
            match tokio::time::timeout(timeout, dispatch_inner(event, ctx)).await {
                Ok(response) => response,
                Err(_elapsed) => {
                    error!(
                        "{} Handler {} timed out after {}s",
                        log_prefix,
                        name,
                        timeout.as_secs()
                    );
                    build_failure_result()
                }
            }
        })
        .await;

        info!(
            "{} <- {} completed in {}ms",
            request_ctx.log_prefix(),
            handler_name,
            request_ctx.elapsed_ms()
        );

        response
    }

    async fn remember_names(&self, event: &InboundEvent) {
        let caller = event.caller();
        if let Some(name) = caller.display_name.as_deref() {
            self.names.remember(&caller.identity, name).await;
        }

        if let InboundEvent::Command(cmd) = event {
            for user in cmd.arguments.values().filter_map(|arg| match arg {
                ArgumentValue::User(user) => Some(user),
                ArgumentValue::Text(_) => None,
            }) {
                if let Some(name) = user.display_name.as_deref() {
                    self.names.remember(&user.identity, name).await;
                }
            }
        }
    }
}

async fn dispatch_inner(event: InboundEvent, ctx: HandlerContext) -> RenderableResult {
    let handler_name = event.handler_name();
    let log_prefix = ctx.log_prefix();
    let request_ctx = ctx.request_ctx.clone();

    let result = match event {
        InboundEvent::Command(cmd) => route_command(cmd, ctx).await,
        InboundEvent::Selection(sel) => handle_selection_response(sel, ctx).await,
    };

    log_handler_exit!(request_ctx, handler_name, result);

    match result {
        Ok(response) => response,
        Err(e) => {
            warn!(
                "{} Handler {} failed: {} (code: {})",
                log_prefix,
                handler_name,
                e,
                e.error_code()
            );
            build_error_result(&e)
        }
    }
}

async fn route_command(cmd: Command, ctx: HandlerContext) -> BotErrorResult<RenderableResult> {
    let name: CommandName = cmd.name.parse()?;

    // Checked before any handler runs, so a denied caller never reaches the store
    if name.requires_operator() {
        require_operator(&cmd)?;
    }

    match name {
        CommandName::SetTimezone => handle_set_timezone(cmd, ctx).await,
        CommandName::SetLanguage => handle_set_language(cmd, ctx).await,
        CommandName::Profile => handle_profile(cmd, ctx).await,
        CommandName::ListModsByTimezone => handle_list_mods_by_timezone(cmd, ctx).await,
        CommandName::ListUsersByLanguage => handle_list_users_by_language(cmd, ctx).await,
        CommandName::SetMod => handle_set_mod(cmd, ctx).await,
        CommandName::RemoveMod => handle_remove_mod(cmd, ctx).await,
    }
}
