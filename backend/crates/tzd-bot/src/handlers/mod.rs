pub mod authorization;
pub mod context;
pub mod dispatcher;
pub mod error_boundary;
pub mod listing;
pub mod moderator;
pub mod profile;
pub mod response_builder;
pub mod selection;
