use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single connectivity check.
///
/// `Unconnected -> Probing -> Connected | Failed`, with no way back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Unconnected,
    Probing,
    Connected,
    Failed,
}

impl CheckState {
    pub fn can_transition_to(self, next: CheckState) -> bool {
        matches!(
            (self, next),
            (CheckState::Unconnected, CheckState::Probing)
                | (CheckState::Probing, CheckState::Connected)
                | (CheckState::Probing, CheckState::Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, CheckState::Connected | CheckState::Failed)
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckState::Unconnected => "unconnected",
            CheckState::Probing => "probing",
            CheckState::Connected => "connected",
            CheckState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    pub target: String,
    pub state: CheckState,
    pub response_time_ms: u64,
    pub checked_at: DateTime<Utc>,
}

impl ProbeReport {
    pub fn connected(target: String, response_time_ms: u64) -> Self {
        Self {
            target,
            state: CheckState::Connected,
            response_time_ms,
            checked_at: Utc::now(),
        }
    }
}
