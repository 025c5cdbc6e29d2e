//! Handler integration tests for the `dynamic_space` tool.
//!
//! Collaborators are stubbed; these tests cover routing, validation and the
//! MCP translation layer only.

pub mod properties;
pub mod router_handler;
pub mod server_handler;
