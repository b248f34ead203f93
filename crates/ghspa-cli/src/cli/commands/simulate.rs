//! `ghspa simulate <url> [--title 404]` – run one page load.

use anyhow::Result;
use ghspa_core::{
    DocumentRole, HistoryCall, Location, Outcome, RecordingHistory, Shim, ShimConfig,
};

pub fn simulate(
    url: &str,
    title: Option<&str>,
    cfg: &ShimConfig,
) -> Result<(DocumentRole, Outcome, RecordingHistory)> {
    let location = Location::parse(url)?;
    let role = DocumentRole::from_title(title);
    let mut history = RecordingHistory::default();
    let outcome = Shim::new(cfg.clone()).run(role, &location, &mut history)?;
    Ok((role, outcome, history))
}

pub fn run_simulate(url: &str, title: Option<&str>, cfg: &ShimConfig) -> Result<()> {
    let (role, _, history) = simulate(url, title, cfg)?;
    println!("role: {role:?}");
    match history.last() {
        Some(HistoryCall::Navigate(target)) => println!("location.replace({target})"),
        Some(HistoryCall::ReplaceState(target)) => println!("history.replaceState({target})"),
        None => println!("no history update"),
    }
    Ok(())
}
