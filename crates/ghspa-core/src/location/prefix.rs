//! Repository prefix for project-pages hosting.

use std::fmt;

/// Base path of a project hosted under a shared domain (`/my-repo`), or
/// empty when the site is served from the domain root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoPrefix(String);

impl RepoPrefix {
    /// Resolves the prefix for the current load.
    ///
    /// In project-pages mode this is `/` followed by the first path segment,
    /// so a document at `/` yields the prefix `/`.
    pub fn resolve(project_pages: bool, path: &str) -> Self {
        if !project_pages {
            return Self::default();
        }
        let first = path.split('/').nth(1).unwrap_or("");
        Self(format!("/{first}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RepoPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
