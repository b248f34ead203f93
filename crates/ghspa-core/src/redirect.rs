//! Forward encoder: run on the fallback document.
//!
//! Builds the real document's URL with the requested path and query moved
//! into the `p` / `q` keys.

use crate::location::{Location, RepoPrefix};
use crate::payload::{escape_amp, PATH_KEY, QUERY_KEY};

/// Computes the URL the fallback document navigates to.
///
/// `scheme://host[:port]<prefix>/?p=<path>[&q=<query>][#fragment]`
///
/// The path has `&` escaped first and then the first occurrence of the
/// prefix removed (not anchored to the start). The fragment is copied as is.
pub fn redirect_target(location: &Location, prefix: &RepoPrefix) -> String {
    let mut target = format!("{}{}/?", location.origin_prefix(), prefix);

    if !location.path.is_empty() {
        let escaped = escape_amp(&location.path);
        let path = if prefix.is_empty() {
            escaped
        } else {
            escaped.replacen(prefix.as_str(), "", 1)
        };
        target.push_str(PATH_KEY);
        target.push('=');
        target.push_str(&path);
    }

    if let Some(query) = location.query.as_deref().filter(|q| !q.is_empty()) {
        target.push('&');
        target.push_str(QUERY_KEY);
        target.push('=');
        target.push_str(&escape_amp(query));
    }

    target.push_str(&location.hash());
    tracing::debug!(from = %location, to = %target, prefix = %prefix, "computed redirect target");
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(href: &str, project_pages: bool) -> String {
        let loc = Location::parse(href).unwrap();
        let prefix = RepoPrefix::resolve(project_pages, &loc.path);
        redirect_target(&loc, &prefix)
    }

    #[test]
    fn project_pages_moves_path_and_query() {
        assert_eq!(
            target("https://user.github.io/my-repo/docs/intro?x=1#top", true),
            "https://user.github.io/my-repo/?p=/docs/intro&q=x=1#top"
        );
    }

    #[test]
    fn user_pages_keeps_full_path() {
        assert_eq!(
            target("https://user.github.io/docs/intro", false),
            "https://user.github.io/?p=/docs/intro"
        );
    }

    #[test]
    fn port_is_preserved() {
        assert_eq!(
            target("http://localhost:8080/my-repo/about", true),
            "http://localhost:8080/my-repo/?p=/about"
        );
    }

    #[test]
    fn ampersands_are_escaped_in_path_and_query() {
        let out = target("https://h.io/repo/tom&jerry?a=1&b=2", true);
        assert_eq!(out, "https://h.io/repo/?p=/tom~and~jerry&q=a=1~and~b=2");
        let query = out.split_once('?').unwrap().1;
        assert_eq!(query.matches('&').count(), 1);
    }

    #[test]
    fn prefix_removal_is_first_occurrence_only() {
        assert_eq!(
            target("https://h.io/app/app/settings", true),
            "https://h.io/app/?p=/app/settings"
        );
    }

    #[test]
    fn root_path_in_project_mode() {
        // Prefix "/" strips the only slash, leaving an empty `p`.
        assert_eq!(target("https://h.io/", true), "https://h.io//?p=");
    }

    #[test]
    fn fragment_copied_verbatim() {
        assert_eq!(
            target("https://h.io/repo/page#section2", true),
            "https://h.io/repo/?p=/page#section2"
        );
    }
}
