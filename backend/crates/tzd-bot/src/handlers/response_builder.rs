use crate::{BotError, ColorTag, PromptOption, RenderableResult, SelectionPrompt};

use tzd_core::{
    LanguageCatalog, MAX_SELECTED_LANGUAGES, NOT_SET, SelectorKind, TimezoneCatalog, UserRecord,
};

/// Reply for panics, timeouts and anything else without a specific message
pub const GENERIC_FAILURE: &str = "Error executing command";

/// Map a handler error to the caller-private reply for it.
///
/// Storage details stay in the logs.
pub fn build_error_result(err: &BotError) -> RenderableResult {
    match err {
        BotError::PermissionDenied { .. } => {
            RenderableResult::new("Permission Denied", ColorTag::Error)
                .description("You need the moderator role to use this command.")
        }
        BotError::MissingFilter { filter, .. } => {
            RenderableResult::new("Missing Filter", ColorTag::Error)
                .description(format!("Please specify a {filter} to filter by."))
        }
        BotError::Storage { .. } => RenderableResult::new("Database Error", ColorTag::Error)
            .description("Error accessing the directory. Please try again later."),
        BotError::Validation { message, .. } => {
            RenderableResult::new("Invalid Input", ColorTag::Error).description(message.clone())
        }
        BotError::SelectionExpired { .. } => {
            RenderableResult::new("Selection Expired", ColorTag::Warning)
                .description("This selection is no longer active. Run the command again.")
        }
        BotError::UnknownCommand { name, .. } => {
            RenderableResult::new("Unknown Command", ColorTag::Error)
                .description(format!("Unknown command: {name}"))
        }
    }
}

pub fn build_failure_result() -> RenderableResult {
    RenderableResult::new("Error", ColorTag::Error).description(GENERIC_FAILURE)
}

// =========================================================================
// Profile
// =========================================================================

pub fn build_profile_setup_required_result() -> RenderableResult {
    RenderableResult::new("Profile Setup Required", ColorTag::Warning)
        .description("Use /set-timezone and /set-language to set your profile.")
}

pub fn build_profile_result(user_label: &str, record: &UserRecord) -> RenderableResult {
    let languages = match record.language_list() {
        list if list.is_empty() => NOT_SET.to_string(),
        list => list
            .iter()
            .map(|lang| format!("* {lang}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    RenderableResult::new("Your Profile", ColorTag::Profile)
        .field("User", user_label, true)
        .field("Role", record.role_label(), true)
        .field("Timezone", record.timezone_or_not_set(), true)
        .field("Languages", languages, false)
}

// =========================================================================
// Selectors
// =========================================================================

pub fn build_timezone_prompt_result(token: String) -> RenderableResult {
    let options = TimezoneCatalog::options()
        .iter()
        .map(|tz| PromptOption {
            label: tz.label.to_string(),
            value: tz.value.to_string(),
        })
        .collect();

    RenderableResult::new("Set Your Timezone", ColorTag::Info)
        .description("Select your timezone from the dropdown below:")
        .prompt(SelectionPrompt {
            token,
            kind: SelectorKind::Timezone,
            placeholder: "Choose your timezone...".to_string(),
            min_values: 1,
            max_values: 1,
            options,
        })
}

pub fn build_language_prompt_result(token: String) -> RenderableResult {
    let options = LanguageCatalog::options()
        .iter()
        .map(|lang| PromptOption {
            label: lang.to_string(),
            value: lang.to_string(),
        })
        .collect();

    RenderableResult::new("Set Your Languages", ColorTag::Warning)
        .description(format!(
            "Select the languages you speak (choose up to {MAX_SELECTED_LANGUAGES}):"
        ))
        .prompt(SelectionPrompt {
            token,
            kind: SelectorKind::Languages,
            placeholder: "Select your languages...".to_string(),
            min_values: 1,
            max_values: MAX_SELECTED_LANGUAGES,
            options,
        })
}

pub fn build_timezone_updated_result(timezone: &str) -> RenderableResult {
    RenderableResult::new("Timezone Updated", ColorTag::Success)
        .description(format!("Your timezone has been set to: {timezone}"))
}

pub fn build_languages_updated_result(languages: &str) -> RenderableResult {
    RenderableResult::new("Languages Updated", ColorTag::Success)
        .description(format!("Your languages have been set to: {languages}"))
}

// =========================================================================
// Listings
// =========================================================================

pub fn build_no_moderators_result(timezone_filter: Option<&str>) -> RenderableResult {
    let description = match timezone_filter {
        Some(tz) => format!("No moderators found in timezone: {tz}"),
        None => "No moderators have been set up yet.".to_string(),
    };
    RenderableResult::new("No Moderators Found", ColorTag::Warning).description(description)
}

/// `groups` are `(timezone label, member names)` in display order.
pub fn build_moderators_result(
    timezone_filter: Option<&str>,
    groups: &[(String, Vec<String>)],
) -> RenderableResult {
    let total: usize = groups.iter().map(|(_, names)| names.len()).sum();
    let description = match timezone_filter {
        Some(tz) => format!("Showing moderators in timezone: {tz}"),
        None => format!(
            "Found {} moderator(s) across {} timezone(s)",
            total,
            groups.len()
        ),
    };

    groups.iter().fold(
        RenderableResult::new("Moderators by Timezone", ColorTag::Info)
            .description(description)
            .broadcast(),
        |result, (label, names)| result.field(label.clone(), bullet_list(names), false),
    )
}

pub fn build_no_users_result(language: &str) -> RenderableResult {
    RenderableResult::new("No Users Found", ColorTag::Warning)
        .description(format!("No users found who speak: {language}"))
}

/// Entries are `(name, timezone label)`.
pub fn build_users_by_language_result(
    language: &str,
    operators: &[(String, String)],
    members: &[(String, String)],
) -> RenderableResult {
    let mut result = RenderableResult::new("Users by Language", ColorTag::Success)
        .description(format!(
            "Found {} user(s) who speak: {}",
            operators.len() + members.len(),
            language
        ))
        .broadcast();

    if !operators.is_empty() {
        result = result.field(
            format!("Moderators ({})", operators.len()),
            name_timezone_list(operators),
            false,
        );
    }
    if !members.is_empty() {
        result = result.field(
            format!("Members ({})", members.len()),
            name_timezone_list(members),
            false,
        );
    }
    result
}

// =========================================================================
// Moderator management
// =========================================================================

pub fn build_moderator_added_result(user_label: &str, record: &UserRecord) -> RenderableResult {
    RenderableResult::new("Moderator Added", ColorTag::Success)
        .description(format!("{user_label} has been set as a moderator"))
        .field("User", user_label, true)
        .field("Timezone", record.timezone_or_not_set(), true)
        .field("Languages", record.languages_or_not_set(), true)
}

pub fn build_not_a_moderator_result(user_label: &str) -> RenderableResult {
    RenderableResult::new("User Not Found", ColorTag::Warning)
        .description(format!("{user_label} is not a moderator."))
}

/// `previous` is the record as it was before the flag was cleared.
pub fn build_moderator_removed_result(user_label: &str, previous: &UserRecord) -> RenderableResult {
    RenderableResult::new("Moderator Removed", ColorTag::Success)
        .description(format!("{user_label} has been removed as a moderator"))
        .field("User", user_label, true)
        .field("Timezone", previous.timezone_or_not_set(), true)
        .field("Languages", previous.languages_or_not_set(), true)
}

fn bullet_list(names: &[String]) -> String {
    names.iter().map(|name| format!("* {name}\n")).collect()
}

fn name_timezone_list(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(name, timezone)| format!("* {name} - {timezone}\n"))
        .collect()
}
