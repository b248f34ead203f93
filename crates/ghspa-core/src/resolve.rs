//! Reverse decoder: run on the real document.
//!
//! Recovers the original path and query from the `p` / `q` keys written by
//! the fallback document.

use crate::location::{Location, RepoPrefix};
use crate::payload::{QueryMap, PATH_KEY, QUERY_KEY};

/// Computes the root-relative URL to show in place of the current one.
///
/// Returns `None` when there is nothing to restore: no query string, or no
/// `p` key in it. An empty `p` still counts as present. Keys other than `p`
/// and `q` are dropped.
pub fn resolve_target(location: &Location, prefix: &RepoPrefix) -> Option<String> {
    let raw = location.query.as_deref().filter(|q| !q.is_empty())?;
    let params = QueryMap::parse(raw);
    let path = params.get(PATH_KEY)?;

    let mut target = format!("{prefix}{path}");
    if let Some(query) = params.get(QUERY_KEY).filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    target.push_str(&location.hash());

    tracing::debug!(from = %location, to = %target, prefix = %prefix, "computed resolve target");
    Some(target)
}
