//! HTTP API for uploading, previewing and cleaning one dataset.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
