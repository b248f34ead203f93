//! One page load: classify the document, then redirect or resolve.
//!
//! The browser side effects go through [`HistoryHost`], so the same dispatch
//! runs against `window.history` in the browser adapter and against
//! [`RecordingHistory`] in the CLI and tests.

mod memory;

pub use memory::{HistoryCall, RecordingHistory};

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::location::{Location, RepoPrefix};
use crate::redirect::redirect_target;
use crate::resolve::resolve_target;
use crate::role::DocumentRole;

/// History operations the shim needs from its host.
pub trait HistoryHost {
    /// Full navigation that replaces the current history entry.
    fn replace_location(&mut self, url: &str) -> Result<(), ShimError>;

    /// Replaces the current entry's URL without navigating or reloading.
    fn replace_state(&mut self, url: &str) -> Result<(), ShimError>;
}

/// What a load did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fallback document navigated to this absolute URL.
    Redirected(String),
    /// Real document rewrote its visible URL to this root-relative URL.
    Resolved(String),
    /// Real document with nothing to restore; the host was not called.
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct Shim {
    config: ShimConfig,
}

impl Shim {
    pub fn new(config: ShimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    /// Runs the shim once for a load of `location` in the given role.
    pub fn run<H: HistoryHost + ?Sized>(
        &self,
        role: DocumentRole,
        location: &Location,
        host: &mut H,
    ) -> Result<Outcome, ShimError> {
        let prefix = RepoPrefix::resolve(self.config.project_pages, &location.path);
        tracing::debug!(?role, prefix = %prefix, location = %location, "shim load");

        match role {
            DocumentRole::Fallback => {
                let target = redirect_target(location, &prefix);
                tracing::info!(target = %target, "redirecting fallback document");
                host.replace_location(&target)?;
                Ok(Outcome::Redirected(target))
            }
            DocumentRole::Real => match resolve_target(location, &prefix) {
                Some(target) => {
                    tracing::info!(target = %target, "restoring original url");
                    host.replace_state(&target)?;
                    Ok(Outcome::Resolved(target))
                }
                None => Ok(Outcome::Unchanged),
            },
        }
    }
}
