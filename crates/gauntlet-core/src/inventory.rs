//! In-memory view of the whole catalog.
//!
//! One `Inventory` is loaded per process and passed explicitly to
//! whatever needs cross-record lookups (description rendering, the
//! runner, strategy handlers).

use crate::error::{CoreError, CoreResult};
use crate::metrics::{MetricDefinition, MetricFormula};
use crate::record::{find_by_id, RecordId};
use crate::strategy::StrategyRegistry;
use crate::types::{
    ChallengeDefinition, CloudVirtualResource, PhysicalResource, Recipient, TestCase,
    TestDefinition, VnfService,
};

/// All loaded record collections.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub test_cases: Vec<TestCase>,
    pub test_definitions: Vec<TestDefinition>,
    pub recipients: Vec<Recipient>,
    pub challenge_definitions: Vec<ChallengeDefinition>,
    pub metric_definitions: Vec<MetricDefinition>,
    pub physical_resources: Vec<PhysicalResource>,
    pub cloud_resources: Vec<CloudVirtualResource>,
    pub vnf_services: Vec<VnfService>,
}

impl Inventory {
    pub fn test_case(&self, id: RecordId) -> Option<&TestCase> {
        find_by_id(id, &self.test_cases)
    }

    pub fn test_definition(&self, id: RecordId) -> Option<&TestDefinition> {
        find_by_id(id, &self.test_definitions)
    }

    pub fn recipient(&self, id: RecordId) -> Option<&Recipient> {
        find_by_id(id, &self.recipients)
    }

    pub fn challenge_definition(&self, id: RecordId) -> Option<&ChallengeDefinition> {
        find_by_id(id, &self.challenge_definitions)
    }

    pub fn metric_definition(&self, id: RecordId) -> Option<&MetricDefinition> {
        find_by_id(id, &self.metric_definitions)
    }

    pub fn physical_resource(&self, id: RecordId) -> Option<&PhysicalResource> {
        find_by_id(id, &self.physical_resources)
    }

    pub fn cloud_resource(&self, id: RecordId) -> Option<&CloudVirtualResource> {
        find_by_id(id, &self.cloud_resources)
    }

    pub fn vnf_service(&self, id: RecordId) -> Option<&VnfService> {
        find_by_id(id, &self.vnf_services)
    }

    /// Lookup that treats absence as a hard error, for references the
    /// runner cannot proceed without.
    pub fn require_test_definition(&self, id: RecordId) -> CoreResult<&TestDefinition> {
        self.test_definition(id).ok_or(CoreError::RecordNotFound {
            kind: "test definition",
            id,
        })
    }

    pub fn require_challenge_definition(&self, id: RecordId) -> CoreResult<&ChallengeDefinition> {
        self.challenge_definition(id)
            .ok_or(CoreError::RecordNotFound {
                kind: "challenge definition",
                id,
            })
    }

    /// The catalog's recovery-time metric definition. Located by
    /// formula kind so a reordered catalog still works.
    pub fn recovery_time_metric(&self) -> CoreResult<&MetricDefinition> {
        self.metric_definitions
            .iter()
            .find(|m| m.formula == MetricFormula::RecoveryTime)
            .ok_or(CoreError::MissingMetric("recovery time"))
    }

    /// Verify every definition's strategy key resolves in `registry`.
    /// An unresolvable key makes the whole catalog unusable.
    pub fn validate(&self, registry: &StrategyRegistry) -> CoreResult<()> {
        for challenge in &self.challenge_definitions {
            registry.challenge_action(&challenge.action)?;
        }
        for test in &self.test_definitions {
            registry.monitor(&test.monitor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChallengeType;

    fn challenge(action: &str) -> ChallengeDefinition {
        ChallengeDefinition {
            id: 5,
            name: "VM failure".into(),
            challenge_type: ChallengeType::CloudComputeFailure,
            recipient_id: 1,
            impacted_cloud_info: String::new(),
            impacted_cloud_resource_ids: vec![],
            impacted_physical_info: String::new(),
            impacted_physical_resource_ids: vec![],
            start_cli_command: String::new(),
            stop_cli_command: String::new(),
            start_api_commands: vec![],
            stop_api_commands: vec![],
            action: action.into(),
        }
    }

    #[test]
    fn missing_recovery_metric_is_an_error() {
        let inventory = Inventory::default();
        assert!(matches!(
            inventory.recovery_time_metric(),
            Err(CoreError::MissingMetric(_))
        ));
    }

    #[test]
    fn recovery_metric_found_by_formula_not_position() {
        let mut inventory = Inventory::default();
        inventory.metric_definitions.push(MetricDefinition::new(
            7,
            "Uptime Percentage",
            "",
            MetricFormula::UptimePercentage,
        ));
        inventory.metric_definitions.push(MetricDefinition::new(
            9,
            "Recovery Time",
            "",
            MetricFormula::RecoveryTime,
        ));
        assert_eq!(inventory.recovery_time_metric().unwrap().id, 9);
    }

    #[test]
    fn validate_rejects_unknown_action_key() {
        let mut inventory = Inventory::default();
        inventory.challenge_definitions.push(challenge("no-such-action"));
        let registry = StrategyRegistry::with_builtins();
        assert!(matches!(
            inventory.validate(&registry),
            Err(CoreError::UnknownStrategy { .. })
        ));
    }

    #[test]
    fn validate_accepts_builtin_keys() {
        let mut inventory = Inventory::default();
        inventory.challenge_definitions.push(challenge("noop"));
        let registry = StrategyRegistry::with_builtins();
        assert!(inventory.validate(&registry).is_ok());
    }
}
