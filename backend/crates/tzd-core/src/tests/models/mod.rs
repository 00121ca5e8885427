mod language;
mod language_listing;
mod selector_kind;
mod timezone;
mod timezone_group;
mod user_record;
mod user_update;
