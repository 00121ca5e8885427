pub mod command_name;
pub mod command_schema;
pub mod error;
pub mod event;
pub mod handlers;
pub mod identity_resolver;
pub mod pending_selections;
pub mod renderable;
pub mod request_context;
pub mod request_logging;

pub use command_name::CommandName;
pub use command_schema::{
    CommandDefinition, CommandOption, OptionChoice, OptionKind, command_definitions,
};
pub use error::{BotError, Result};
pub use event::{ArgumentValue, Command, InboundEvent, SelectionResponse, UserRef};
pub use handlers::authorization::require_operator;
pub use handlers::context::HandlerContext;
pub use handlers::dispatcher::{Dispatcher, DispatcherConfig};
pub use handlers::error_boundary::with_error_boundary;
pub use handlers::listing::{handle_list_mods_by_timezone, handle_list_users_by_language};
pub use handlers::moderator::{handle_remove_mod, handle_set_mod};
pub use handlers::profile::handle_profile;
pub use handlers::response_builder::{
    GENERIC_FAILURE, build_error_result, build_failure_result, build_language_prompt_result,
    build_timezone_prompt_result,
};
pub use handlers::selection::{
    handle_selection_response, handle_set_language, handle_set_timezone,
};
pub use identity_resolver::{DisplayNameCache, IdentityResolver, UNKNOWN_USER};
pub use pending_selections::{PendingSelection, PendingSelections};
pub use renderable::{ColorTag, Field, PromptOption, RenderableResult, SelectionPrompt};
pub use request_context::RequestContext;
