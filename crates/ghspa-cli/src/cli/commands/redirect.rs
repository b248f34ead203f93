//! `ghspa redirect <url>` – forward-encode a requested URL.

use anyhow::Result;
use ghspa_core::redirect::redirect_target;
use ghspa_core::{Location, RepoPrefix, ShimConfig};

pub fn redirect_url(url: &str, cfg: &ShimConfig) -> Result<String> {
    let location = Location::parse(url)?;
    let prefix = RepoPrefix::resolve(cfg.project_pages, &location.path);
    Ok(redirect_target(&location, &prefix))
}

pub fn run_redirect(url: &str, cfg: &ShimConfig) -> Result<()> {
    println!("{}", redirect_url(url, cfg)?);
    Ok(())
}
