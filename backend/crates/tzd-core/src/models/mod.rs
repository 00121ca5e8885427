pub mod language;
pub mod language_listing;
pub mod selector_kind;
pub mod timezone;
pub mod timezone_group;
pub mod user_record;
pub mod user_update;
