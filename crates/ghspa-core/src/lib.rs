pub mod config;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub mod location;
pub mod payload;
pub mod redirect;
pub mod resolve;
pub mod role;
pub mod shim;
#[cfg(feature = "web")]
pub mod web;

pub use config::ShimConfig;
pub use error::ShimError;
pub use location::{Location, RepoPrefix};
pub use role::DocumentRole;
pub use shim::{HistoryCall, HistoryHost, Outcome, RecordingHistory, Shim};
