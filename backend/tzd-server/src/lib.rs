pub mod config;
pub mod error;
pub mod logger;
pub mod transport;


pub use error::{Result, ServerError};
pub use transport::stdio::{TransportConfig, run};
pub use transport::wire::{WireInbound, WireOutbound};
