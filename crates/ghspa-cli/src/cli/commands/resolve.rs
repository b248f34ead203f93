//! `ghspa resolve <url>` – decode the payload on a real-document URL.

use anyhow::Result;
use ghspa_core::resolve::resolve_target;
use ghspa_core::{Location, RepoPrefix, ShimConfig};

/// Absolute URL the real document would display, or `None` if it keeps its own.
pub fn resolve_url(url: &str, cfg: &ShimConfig) -> Result<Option<String>> {
    let location = Location::parse(url)?;
    let prefix = RepoPrefix::resolve(cfg.project_pages, &location.path);
    match resolve_target(&location, &prefix) {
        Some(relative) => Ok(Some(location.with_relative(&relative)?.href())),
        None => Ok(None),
    }
}

pub fn run_resolve(url: &str, cfg: &ShimConfig) -> Result<()> {
    match resolve_url(url, cfg)? {
        Some(restored) => println!("{restored}"),
        None => println!("unchanged"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_absolute_url() {
        assert_eq!(
            resolve_url(
                "https://user.github.io/my-repo/?p=/docs/intro&q=x=1#top",
                &ShimConfig::default()
            )
            .unwrap()
            .as_deref(),
            Some("https://user.github.io/my-repo/docs/intro?x=1#top")
        );
    }

    #[test]
    fn no_payload_is_unchanged() {
        assert_eq!(
            resolve_url("https://user.github.io/my-repo/?foo=bar", &ShimConfig::default())
                .unwrap(),
            None
        );
    }
}
