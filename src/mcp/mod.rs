pub mod progress;
pub mod server;
pub mod tools;
pub mod types;

pub use server::SpaceServer;
pub use tools::*;
pub use types::*;
