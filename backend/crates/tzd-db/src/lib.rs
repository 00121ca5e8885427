pub mod connection;
pub mod error;
pub mod queries;
pub mod repositories;
pub mod store;

pub use connection::connection_manager::ConnectionManager;
pub use error::{DbError, Result};
pub use queries::query_engine::QueryEngine;
pub use repositories::user_repository::UserRepository;
pub use store::DirectoryStore;
