use crate::handlers::response_builder::{build_profile_result, build_profile_setup_required_result};
use crate::{Command, HandlerContext, RenderableResult, Result as BotErrorResult};

use log::debug;

/// Handle `profile`: the caller's own record.
pub async fn handle_profile(cmd: Command, ctx: HandlerContext) -> BotErrorResult<RenderableResult> {
    debug!("{} Profile starting", ctx.log_prefix());

    let Some(record) = ctx.store.get(&cmd.caller.identity).await? else {
        return Ok(build_profile_setup_required_result());
    };

    let label = ctx.user_label(&cmd.caller).await;
    Ok(build_profile_result(&label, &record))
}
