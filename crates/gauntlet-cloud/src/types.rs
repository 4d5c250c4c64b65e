use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-side server identifier
pub type ServerId = String;

/// Lifecycle status of a compute instance, reduced to the states the
/// harness cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerStatus {
    /// Running normally
    Active,
    /// Suspended to disk
    Suspended,
    /// Paused in memory
    Paused,
    /// Shut down
    Stopped,
    /// Provider reported an error state
    Error,
    /// Status could not be determined
    Unknown,
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServerStatus::Active => "ACTIVE",
            ServerStatus::Suspended => "SUSPENDED",
            ServerStatus::Paused => "PAUSED",
            ServerStatus::Stopped => "STOPPED",
            ServerStatus::Error => "ERROR",
            ServerStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// A compute instance as seen through [`crate::CloudPlatform`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Provider-side ID
    pub id: ServerId,
    /// Human-readable name
    pub name: String,
    /// Last observed status
    pub status: ServerStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_provider_wire_form() {
        assert_eq!(ServerStatus::Active.to_string(), "ACTIVE");
        assert_eq!(ServerStatus::Suspended.to_string(), "SUSPENDED");
    }
}
