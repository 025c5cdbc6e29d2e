pub mod discover;
pub mod hub;
pub mod invoke;
pub mod progress;
pub mod remote;
pub mod schema;
pub mod search;

pub use discover::{CsvDiscoveryService, SpaceDiscoveryService};
pub use hub::{HubClient, SpaceInfo, SpaceSearchHit};
pub use invoke::{McpInvokeService, SpaceInvokeService};
pub use progress::{noop_progress, NoopProgressReporter, ProgressReporter};
pub use remote::{SpaceConnector, SpaceSession};
pub use schema::{McpSchemaService, SpaceSchemaService};
pub use search::{HubSearchService, SpaceSearchService};
