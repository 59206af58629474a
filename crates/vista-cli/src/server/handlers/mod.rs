//! API request handlers.

mod data;
mod preprocess;

pub use data::*;
pub use preprocess::*;
