use crate::handlers::response_builder::{
    build_moderators_result, build_no_moderators_result, build_no_users_result,
    build_users_by_language_result,
};
use crate::{Command, HandlerContext, RenderableResult, Result as BotErrorResult};

use tzd_core::UserRecord;

use log::debug;

/// Handle `list-mods-by-timezone`
pub async fn handle_list_mods_by_timezone(
    cmd: Command,
    ctx: HandlerContext,
) -> BotErrorResult<RenderableResult> {
    let timezone_filter = cmd.text("timezone");
    debug!(
        "{} ListModsByTimezone filter={:?}",
        ctx.log_prefix(),
        timezone_filter
    );

    let groups = ctx.queries.list_operators(timezone_filter).await?;
    if groups.is_empty() {
        return Ok(build_no_moderators_result(timezone_filter));
    }

    let mut rendered = Vec::with_capacity(groups.len());
    for group in groups {
        let mut names = Vec::with_capacity(group.members.len());
        for member in &group.members {
            names.push(ctx.label(&member.identity).await);
        }
        rendered.push((group.label, names));
    }

    Ok(build_moderators_result(timezone_filter, &rendered))
}

/// Handle `list-users-by-language`
pub async fn handle_list_users_by_language(
    cmd: Command,
    ctx: HandlerContext,
) -> BotErrorResult<RenderableResult> {
    let language = cmd.text("language");
    debug!(
        "{} ListUsersByLanguage language={:?}",
        ctx.log_prefix(),
        language
    );

    let listing = ctx.queries.list_by_language(language).await?;
    // list_by_language rejects a missing filter before this point
    let language = language.unwrap_or_default();

    if listing.is_empty() {
        return Ok(build_no_users_result(language));
    }

    let operators = name_timezone_pairs(&ctx, &listing.operators).await;
    let members = name_timezone_pairs(&ctx, &listing.members).await;

    Ok(build_users_by_language_result(language, &operators, &members))
}

async fn name_timezone_pairs(ctx: &HandlerContext, records: &[UserRecord]) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(records.len());
    for record in records {
        pairs.push((
            ctx.label(&record.identity).await,
            record.timezone_or_not_set().to_string(),
        ));
    }
    pairs
}
