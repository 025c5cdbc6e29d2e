pub mod space;

pub use space::{Mode, Operation, SpaceRouter, SpaceServices};
