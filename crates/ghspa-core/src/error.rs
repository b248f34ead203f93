//! Error type for location parsing and history host side effects.
//!
//! The transform itself cannot fail; only turning an href into a [`Location`]
//! and handing the result to the host can.
//!
//! [`Location`]: crate::location::Location

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShimError {
    /// The href could not be parsed as an absolute URL.
    #[error("invalid location {href}: {source}")]
    InvalidLocation {
        href: String,
        #[source]
        source: url::ParseError,
    },
    /// The href parsed but carries no host (e.g. `data:` or `file:` URLs).
    #[error("location has no host: {0}")]
    MissingHost(String),
    /// The history host rejected a navigation or URL replacement.
    #[error("history host: {0}")]
    Host(String),
}
