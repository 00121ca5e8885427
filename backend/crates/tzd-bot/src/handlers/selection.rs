use crate::handlers::response_builder::{
    build_language_prompt_result, build_languages_updated_result, build_timezone_prompt_result,
    build_timezone_updated_result,
};
use crate::{
    BotError, Command, HandlerContext, RenderableResult, Result as BotErrorResult,
    SelectionResponse,
};

use tzd_core::{LanguageCatalog, SelectorKind, TimezoneCatalog, UserUpdate, join_languages};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};

/// Handle `set-timezone`: issue a timezone prompt. Nothing is written.
pub async fn handle_set_timezone(
    cmd: Command,
    ctx: HandlerContext,
) -> BotErrorResult<RenderableResult> {
    let token = ctx
        .selections
        .register(&cmd.caller.identity, SelectorKind::Timezone)
        .await;
    debug!("{} Timezone prompt issued", ctx.log_prefix());

    Ok(build_timezone_prompt_result(token))
}

/// Handle `set-language`: issue a language prompt. Nothing is written.
pub async fn handle_set_language(
    cmd: Command,
    ctx: HandlerContext,
) -> BotErrorResult<RenderableResult> {
    let token = ctx
        .selections
        .register(&cmd.caller.identity, SelectorKind::Languages)
        .await;
    debug!("{} Language prompt issued", ctx.log_prefix());

    Ok(build_language_prompt_result(token))
}

/// Resolve a prompt with the caller's choice.
///
/// The token is consumed whether or not the values validate. One upsert on
/// success, none otherwise.
pub async fn handle_selection_response(
    sel: SelectionResponse,
    ctx: HandlerContext,
) -> BotErrorResult<RenderableResult> {
    let identity = sel.caller.identity.as_str();

    let pending = ctx
        .selections
        .take(&sel.correlation_token, identity)
        .await
        .ok_or_else(|| BotError::SelectionExpired {
            location: ErrorLocation::from(Location::caller()),
        })?;

    match pending.kind {
        SelectorKind::Timezone => {
            let timezone = match sel.selected_values.as_slice() {
                [value] => TimezoneCatalog::validate(value)?,
                [] => return Err(BotError::validation("Select a timezone", "values")),
                _ => return Err(BotError::validation("Select exactly one timezone", "values")),
            };

            ctx.store
                .upsert(identity, &UserUpdate::new().timezone(timezone))
                .await?;
            info!("{} Timezone set to {}", ctx.log_prefix(), timezone);

            Ok(build_timezone_updated_result(timezone))
        }
        SelectorKind::Languages => {
            let selected = LanguageCatalog::validate_selection(&sel.selected_values)?;
            let languages = join_languages(&selected);

            ctx.store
                .upsert(identity, &UserUpdate::new().languages(languages.as_str()))
                .await?;
            info!("{} Languages set to {}", ctx.log_prefix(), languages);

            Ok(build_languages_updated_result(&languages))
        }
    }
}
