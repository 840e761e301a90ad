//! Confluence library: application logic for the `confluence` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod fixtures;
