use crate::inventory::Inventory;
use crate::record::{Record, RecordId};
use crate::types::pad;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Challenge categorization. The numeric codes group failures by
/// layer: physical 1xx, cloud 2xx, security 3xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeType {
    ComputeHostFailure,
    DiskFailure,
    LinkFailure,
    NicFailure,
    CloudComputeFailure,
    SdnControllerFailure,
    OvsBridgeFailure,
    CloudStorageFailure,
    CloudNetworkFailure,
    HostTampering,
    HostIntrusion,
    NetworkIntrusion,
}

impl ChallengeType {
    /// Stable numeric code for reports and external tooling.
    pub fn code(&self) -> u16 {
        match self {
            ChallengeType::ComputeHostFailure => 100,
            ChallengeType::DiskFailure => 101,
            ChallengeType::LinkFailure => 102,
            ChallengeType::NicFailure => 103,
            ChallengeType::CloudComputeFailure => 200,
            ChallengeType::SdnControllerFailure => 201,
            ChallengeType::OvsBridgeFailure => 202,
            ChallengeType::CloudStorageFailure => 203,
            ChallengeType::CloudNetworkFailure => 204,
            ChallengeType::HostTampering => 300,
            ChallengeType::HostIntrusion => 301,
            ChallengeType::NetworkIntrusion => 302,
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}

/// A failure to inject: what breaks, where, and which named strategy
/// (`action`) starts and stops the breakage.
///
/// Challenges are reusable across test definitions; exactly one stop
/// exists for each start, both provided by the same strategy key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeDefinition {
    pub id: RecordId,
    pub name: String,
    pub challenge_type: ChallengeType,
    /// Recipient the challenge commands are sent to
    pub recipient_id: RecordId,
    /// Free-form note on the impacted cloud resources
    pub impacted_cloud_info: String,
    /// Impacted cloud virtual resources (usually one)
    pub impacted_cloud_resource_ids: Vec<RecordId>,
    /// Free-form note on the impacted physical resources
    pub impacted_physical_info: String,
    /// Impacted physical resources (usually one)
    pub impacted_physical_resource_ids: Vec<RecordId>,
    /// Shell command that would start the challenge, for the record
    pub start_cli_command: String,
    /// Shell command that would restore normal operation
    pub stop_cli_command: String,
    /// API payloads sent on start, as plain strings
    pub start_api_commands: Vec<String>,
    /// API payloads sent on stop, as plain strings
    pub stop_api_commands: Vec<String>,
    /// Strategy key resolved through the [`crate::StrategyRegistry`]
    pub action: String,
}

impl ChallengeDefinition {
    /// First impacted cloud resource, the usual strategy target.
    pub fn primary_cloud_resource<'a>(
        &self,
        inventory: &'a Inventory,
    ) -> Option<&'a crate::types::CloudVirtualResource> {
        self.impacted_cloud_resource_ids
            .first()
            .and_then(|id| inventory.cloud_resource(*id))
    }

    pub fn describe(&self, inventory: &Inventory, indent: usize) -> String {
        let p = pad(indent);
        let mut out = String::new();
        out.push_str(&format!("{p}Challenge Definition ID: {}\n", self.id));
        out.push_str(&format!("{p}|-name: {}\n", self.name));
        out.push_str(&format!("{p}|-challenge type: {}\n", self.challenge_type));
        out.push_str(&format!("{p}|-action strategy: {}\n", self.action));

        out.push_str(&format!("{p}|-recipient ID: {}\n", self.recipient_id));
        if let Some(recipient) = inventory.recipient(self.recipient_id) {
            out.push_str(&recipient.describe(indent + 1));
        }

        out.push_str(&format!(
            "{p}|-impacted cloud resource info: {}\n",
            self.impacted_cloud_info
        ));
        if !self.impacted_cloud_resource_ids.is_empty() {
            out.push_str(&format!("{p}|-impacted cloud resource(s):\n"));
            for id in &self.impacted_cloud_resource_ids {
                if let Some(resource) = inventory.cloud_resource(*id) {
                    out.push_str(&resource.describe(inventory, indent + 1));
                }
            }
        }

        out.push_str(&format!(
            "{p}|-impacted physical resource info: {}\n",
            self.impacted_physical_info
        ));
        if !self.impacted_physical_resource_ids.is_empty() {
            out.push_str(&format!("{p}|-impacted physical resource(s):\n"));
            for id in &self.impacted_physical_resource_ids {
                if let Some(resource) = inventory.physical_resource(*id) {
                    out.push_str(&resource.describe(indent + 1));
                }
            }
        }

        out.push_str(&format!(
            "{p}|-CLI command to start challenge: {}\n",
            self.start_cli_command
        ));
        out.push_str(&format!(
            "{p}|-CLI command to stop challenge: {}\n",
            self.stop_cli_command
        ));
        out
    }
}

impl Record for ChallengeDefinition {
    fn id(&self) -> RecordId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_group_by_layer() {
        assert_eq!(ChallengeType::ComputeHostFailure.code(), 100);
        assert_eq!(ChallengeType::CloudComputeFailure.code(), 200);
        assert_eq!(ChallengeType::NetworkIntrusion.code(), 302);
    }

    #[test]
    fn display_includes_code() {
        let s = ChallengeType::CloudComputeFailure.to_string();
        assert!(s.contains("CloudComputeFailure"));
        assert!(s.contains("200"));
    }
}
