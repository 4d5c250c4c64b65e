use crate::record::{Record, RecordId};
use crate::types::pad;
use serde::{Deserialize, Serialize};

/// A test case: the "what are we proving" side of the catalog, with a
/// pointer into the issue tracker where the case is designed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: RecordId,
    pub name: String,
    /// Tracker URL for the test case design (JIRA or similar)
    pub tracking_url: String,
}

impl TestCase {
    pub fn new(id: RecordId, name: impl Into<String>, tracking_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tracking_url: tracking_url.into(),
        }
    }

    /// Indented rendering of all fields.
    pub fn describe(&self, indent: usize) -> String {
        let p = pad(indent);
        format!(
            "{p}Test Case ID: {}\n{p}|-name: {}\n{p}|-tracking URL: {}\n",
            self.id, self.name, self.tracking_url
        )
    }
}

impl Record for TestCase {
    fn id(&self) -> RecordId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}
