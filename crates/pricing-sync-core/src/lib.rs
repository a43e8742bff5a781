pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod pricing;
pub mod sync;
pub mod verify;
pub mod write;

pub use config::SyncConfig;
pub use error::{ErrorKind, SyncError};
pub use extract::extract_pricing;
pub use pricing::{PricingList, PricingRecord};
pub use sync::{sync_pricing, SyncOutcome};
pub use verify::{verify_artifact, ArtifactStatus};
pub use write::{write_pricing, WriteSummary};
