//! In-memory history host.

use super::HistoryHost;
use crate::error::ShimError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCall {
    /// `location.replace(url)`
    Navigate(String),
    /// `history.replaceState(null, "", url)`
    ReplaceState(String),
}

/// Records every history operation instead of performing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingHistory {
    calls: Vec<HistoryCall>,
}

impl RecordingHistory {
    pub fn calls(&self) -> &[HistoryCall] {
        &self.calls
    }

    pub fn last(&self) -> Option<&HistoryCall> {
        self.calls.last()
    }
}

impl HistoryHost for RecordingHistory {
    fn replace_location(&mut self, url: &str) -> Result<(), ShimError> {
        self.calls.push(HistoryCall::Navigate(url.to_string()));
        Ok(())
    }

    fn replace_state(&mut self, url: &str) -> Result<(), ShimError> {
        self.calls.push(HistoryCall::ReplaceState(url.to_string()));
        Ok(())
    }
}
