use crate::handlers::response_builder::{
    build_moderator_added_result, build_moderator_removed_result, build_not_a_moderator_result,
};
use crate::{
    BotError, Command, HandlerContext, RenderableResult, Result as BotErrorResult, UserRef,
};

use tzd_core::{TimezoneCatalog, UserUpdate};

use log::{debug, info};

fn target_user(cmd: &Command) -> BotErrorResult<UserRef> {
    cmd.user("user")
        .ok_or_else(|| BotError::validation("A user is required", "user"))
}

/// Handle `set-mod`
///
/// Grants the operator flag and applies whichever of timezone and languages
/// were supplied. Languages here are free text and not checked against the
/// catalog.
pub async fn handle_set_mod(cmd: Command, ctx: HandlerContext) -> BotErrorResult<RenderableResult> {
    let target = target_user(&cmd)?;

    let mut update = UserUpdate::new().operator(true);
    if let Some(timezone) = cmd.text("timezone") {
        update = update.timezone(TimezoneCatalog::validate(timezone)?);
    }
    if let Some(languages) = cmd.text("languages") {
        update = update.languages(languages);
    }

    debug!(
        "{} SetMod target={} timezone={:?} languages={:?}",
        ctx.log_prefix(),
        target.identity,
        update.timezone,
        update.languages
    );

    let record = ctx.store.upsert(&target.identity, &update).await?;
    info!(
        "{} {} granted moderator status",
        ctx.log_prefix(),
        target.identity
    );

    let label = ctx.user_label(&target).await;
    Ok(build_moderator_added_result(&label, &record))
}

/// Handle `remove-mod`
///
/// Revoking someone who is not an operator (or has no record) is reported,
/// not written.
pub async fn handle_remove_mod(
    cmd: Command,
    ctx: HandlerContext,
) -> BotErrorResult<RenderableResult> {
    let target = target_user(&cmd)?;
    let label = ctx.user_label(&target).await;

    let previous = match ctx.store.get(&target.identity).await? {
        Some(record) if record.is_operator => record,
        _ => {
            debug!(
                "{} RemoveMod {} is not a moderator",
                ctx.log_prefix(),
                target.identity
            );
            return Ok(build_not_a_moderator_result(&label));
        }
    };

    ctx.store
        .set_operator_flag(&target.identity, false)
        .await?;
    info!(
        "{} {} moderator status revoked",
        ctx.log_prefix(),
        target.identity
    );

    Ok(build_moderator_removed_result(&label, &previous))
}
