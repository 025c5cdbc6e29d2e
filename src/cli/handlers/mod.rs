//! CLI command handlers.

pub mod space;
