//! CLI command implementations.

pub mod clean;
pub mod preview;
pub mod profile;
pub mod sample;
pub mod serve;
