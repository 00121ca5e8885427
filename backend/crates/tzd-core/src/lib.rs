pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::language::{
    LANGUAGE_SEPARATOR, LANGUAGES, LanguageCatalog, MAX_SELECTED_LANGUAGES, join_languages,
    split_languages,
};
pub use models::language_listing::LanguageListing;
pub use models::selector_kind::SelectorKind;
pub use models::timezone::{TIMEZONES, TimezoneCatalog, TimezoneOption, parse_utc_offset};
pub use models::timezone_group::{NOT_SET_BUCKET, TimezoneGroup, TimezoneKey, group_by_timezone};
pub use models::user_record::{NOT_SET, UserRecord};
pub use models::user_update::UserUpdate;
