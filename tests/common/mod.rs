pub mod harness;

// Re-export commonly used test utilities
pub use harness::{discover_router, standard_router, StubSpaces};
