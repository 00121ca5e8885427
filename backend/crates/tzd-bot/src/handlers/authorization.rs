use crate::{BotError, Command, Result as BotErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Operator gate.
///
/// Decided from the marker the transport put on the command, so a denied
/// caller never reaches the store.
#[track_caller]
pub fn require_operator(cmd: &Command) -> BotErrorResult<()> {
    if cmd.caller_has_operator_role {
        Ok(())
    } else {
        Err(BotError::PermissionDenied {
            command: cmd.name.clone(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
