use crate::inventory::Inventory;
use crate::record::{Record, RecordId};
use crate::types::pad;
use serde::{Deserialize, Serialize};

/// A runnable test: one challenge, one test case, the services being
/// watched, the metrics to evaluate, and the named `monitor` strategy
/// that decides when the service has been restored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDefinition {
    pub id: RecordId,
    pub name: String,
    /// Challenge to inject
    pub challenge_def_id: RecordId,
    /// Test case this definition realizes
    pub test_case_id: RecordId,
    /// VNFs/services under observation
    pub vnf_ids: Vec<RecordId>,
    /// Metric definitions evaluated during the run
    pub metric_ids: Vec<RecordId>,
    /// Recipients the test commands are sent to
    pub recipient_ids: Vec<RecordId>,
    /// Shell commands sent during the test, for the record
    pub cli_commands: Vec<String>,
    /// API payloads sent during the test, as plain strings
    pub api_commands: Vec<String>,
    /// Monitor strategy key resolved through the [`crate::StrategyRegistry`]
    pub monitor: String,
}

impl TestDefinition {
    pub fn describe(&self, inventory: &Inventory, indent: usize) -> String {
        let p = pad(indent);
        let mut out = String::new();
        out.push_str(&format!("{p}Test Definition ID: {}\n", self.id));
        out.push_str(&format!("{p}|-name: {}\n", self.name));
        out.push_str(&format!("{p}|-monitor strategy: {}\n", self.monitor));

        out.push_str(&format!("{p}|-test case ID: {}\n", self.test_case_id));
        if let Some(test_case) = inventory.test_case(self.test_case_id) {
            out.push_str(&test_case.describe(indent + 1));
        }

        out.push_str(&format!(
            "{p}|-challenge definition ID: {}\n",
            self.challenge_def_id
        ));
        if let Some(challenge) = inventory.challenge_definition(self.challenge_def_id) {
            out.push_str(&challenge.describe(inventory, indent + 1));
        }

        if !self.vnf_ids.is_empty() {
            out.push_str(&format!("{p}|-associated VNFs/services:\n"));
            for id in &self.vnf_ids {
                if let Some(vnf) = inventory.vnf_service(*id) {
                    out.push_str(&vnf.describe(inventory, indent + 1));
                }
            }
        }

        if !self.metric_ids.is_empty() {
            out.push_str(&format!("{p}|-associated metrics:\n"));
            for id in &self.metric_ids {
                if let Some(metric) = inventory.metric_definition(*id) {
                    out.push_str(&metric.describe(indent + 1));
                }
            }
        }

        if !self.recipient_ids.is_empty() {
            out.push_str(&format!("{p}|-associated recipients:\n"));
            for id in &self.recipient_ids {
                if let Some(recipient) = inventory.recipient(*id) {
                    out.push_str(&recipient.describe(indent + 1));
                }
            }
        }

        if !self.cli_commands.is_empty() {
            out.push_str(&format!("{p}|-associated CLI commands:\n"));
            for command in &self.cli_commands {
                out.push_str(&format!("{}|- {}\n", pad(indent + 1), command));
            }
        }

        out
    }
}

impl Record for TestDefinition {
    fn id(&self) -> RecordId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}
