//! Error types for the core harness

use crate::metrics::MetricError;
use crate::record::RecordId;
use gauntlet_cloud::CloudError;
use thiserror::Error;

/// Core harness error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A definition references a record ID that is not in the inventory
    #[error("{kind} not found: ID {id}")]
    RecordNotFound {
        /// Record kind (e.g. "test definition")
        kind: &'static str,
        /// Missing ID
        id: RecordId,
    },

    /// A definition names a strategy key with no registered handler
    #[error("Unknown {kind} strategy: {key}")]
    UnknownStrategy {
        /// Strategy kind ("challenge action" or "monitor")
        kind: &'static str,
        /// The unresolved key
        key: String,
    },

    /// The catalog has no metric definition of the required formula
    #[error("No {0} metric definition in the catalog")]
    MissingMetric(&'static str),

    /// A definition is missing data a strategy needs to act on
    #[error("Definition {id} is unusable: {reason}")]
    UnusableDefinition {
        /// Offending definition ID
        id: RecordId,
        /// What was missing
        reason: String,
    },

    /// Restoration was not observed within the configured window
    #[error("Restoration not detected within {0:?}")]
    RestorationTimeout(std::time::Duration),

    /// Metric formula precondition violation
    #[error(transparent)]
    Metric(#[from] MetricError),

    /// Cloud platform failure
    #[error("Cloud platform failure: {0}")]
    Cloud(#[from] CloudError),

    /// Report serialization or I/O failure
    #[error("Report error: {0}")]
    Report(String),
}

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        CoreError::Report(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Report(err.to_string())
    }
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
