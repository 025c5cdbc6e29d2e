pub mod result;
pub mod space;

pub use result::{InvokeOutput, SpaceResult, ToolSummary};
pub use space::SpaceEntry;
