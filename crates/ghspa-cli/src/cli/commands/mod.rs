//! CLI command handlers, one per file.

mod completions;
mod redirect;
mod resolve;
mod roundtrip;
mod simulate;

pub use completions::run_completions;
pub use redirect::run_redirect;
pub use resolve::run_resolve;
pub use roundtrip::run_roundtrip;
pub use simulate::run_simulate;
