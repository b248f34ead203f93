//! `ghspa roundtrip <url>` – fallback load, then real load, then compare.

use anyhow::{bail, Result};
use ghspa_core::{DocumentRole, Location, Outcome, RecordingHistory, Shim, ShimConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    pub redirected_to: String,
    pub visible: String,
}

pub fn round_trip(url: &str, cfg: &ShimConfig) -> Result<RoundTrip> {
    let shim = Shim::new(cfg.clone());
    let mut history = RecordingHistory::default();

    let requested = Location::parse(url)?;
    let redirected_to = match shim.run(DocumentRole::Fallback, &requested, &mut history)? {
        Outcome::Redirected(target) => target,
        other => bail!("fallback load did not redirect: {other:?}"),
    };

    let landed = Location::parse(&redirected_to)?;
    let visible = match shim.run(DocumentRole::Real, &landed, &mut history)? {
        Outcome::Resolved(relative) => landed.with_relative(&relative)?.href(),
        _ => landed.href(),
    };

    Ok(RoundTrip {
        redirected_to,
        visible,
    })
}

pub fn run_roundtrip(url: &str, cfg: &ShimConfig) -> Result<()> {
    let requested = Location::parse(url)?.href();
    let trip = round_trip(url, cfg)?;
    println!("requested:  {requested}");
    println!("redirected: {}", trip.redirected_to);
    println!("visible:    {}", trip.visible);
    println!("match:      {}", trip.visible == requested);
    Ok(())
}
