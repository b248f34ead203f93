//! Browser adapter: runs the shim against `window.location` and
//! `window.history`.
//!
//! Load the wasm module from both the fallback (`404.html`, titled `404`)
//! and the real document, then call `runShim()` before the router starts:
//!
//! ```javascript,ignore
//! import init, { runShim } from './ghspa_core.js';
//! await init();
//! runShim(); // or runShim(false) for user/organization pages
//! ```

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::location::Location;
use crate::role::DocumentRole;
use crate::shim::{HistoryHost, Outcome, Shim};
use wasm_bindgen::prelude::*;

fn host_error(op: &str, err: JsValue) -> ShimError {
    ShimError::Host(format!("{op}: {err:?}"))
}

fn window() -> Result<web_sys::Window, ShimError> {
    web_sys::window().ok_or_else(|| ShimError::Host("no global window".to_string()))
}

/// [`HistoryHost`] backed by the page's `location` and `history` objects.
pub struct BrowserHistory {
    location: web_sys::Location,
    history: web_sys::History,
}

impl BrowserHistory {
    pub fn from_window() -> Result<Self, ShimError> {
        let window = window()?;
        let history = window.history().map_err(|e| host_error("history", e))?;
        Ok(Self {
            location: window.location(),
            history,
        })
    }
}

impl HistoryHost for BrowserHistory {
    fn replace_location(&mut self, url: &str) -> Result<(), ShimError> {
        self.location
            .replace(url)
            .map_err(|e| host_error("location.replace", e))
    }

    fn replace_state(&mut self, url: &str) -> Result<(), ShimError> {
        self.history
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|e| host_error("history.replaceState", e))
    }
}

/// The loaded document's location.
pub fn current_location() -> Result<Location, ShimError> {
    let href = window()?
        .location()
        .href()
        .map_err(|e| host_error("location.href", e))?;
    Location::parse(&href)
}

/// Role of the loaded document, from its title.
pub fn current_role() -> DocumentRole {
    let title = web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.title());
    DocumentRole::from_title(title.as_deref())
}

/// Runs the shim once for the current page load.
pub fn run_in_browser(config: ShimConfig) -> Result<Outcome, ShimError> {
    let location = current_location()?;
    let mut history = BrowserHistory::from_window()?;
    Shim::new(config).run(current_role(), &location, &mut history)
}

/// JavaScript entry point. `projectPages` defaults to `true`.
///
/// Never throws: a failed shim leaves the page as loaded.
#[wasm_bindgen(js_name = runShim)]
pub fn run_shim(project_pages: Option<bool>) {
    let config = ShimConfig {
        project_pages: project_pages.unwrap_or(true),
    };
    if let Err(err) = run_in_browser(config) {
        tracing::warn!(error = %err, "ghspa shim did not run");
    }
}
