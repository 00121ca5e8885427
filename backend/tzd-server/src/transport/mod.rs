//! Newline-delimited JSON transport over a reader/writer pair.

pub mod stdio;
pub mod wire;
