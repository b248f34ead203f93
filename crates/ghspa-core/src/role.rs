//! Document role classification.

/// Title the host gives the fallback (not-found) document.
pub const FALLBACK_TITLE: &str = "404";

/// Which of the two documents is currently loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// Served for unknown paths; re-encodes the request and redirects.
    Fallback,
    /// The single real document; restores the original URL in place.
    Real,
}

impl DocumentRole {
    /// Classifies by document title. Only a title of exactly `404` marks the
    /// fallback document; anything else, including no title, is the real one.
    pub fn from_title(title: Option<&str>) -> Self {
        match title {
            Some(FALLBACK_TITLE) => DocumentRole::Fallback,
            _ => DocumentRole::Real,
        }
    }
}
