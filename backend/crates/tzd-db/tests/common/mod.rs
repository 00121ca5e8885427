#![allow(dead_code)]

pub mod counting_store;
pub mod fixtures;
pub mod test_db;

pub use counting_store::*;
pub use fixtures::*;
pub use test_db::*;
