//! Sample catalog initialization.
//!
//! Definition data is authored in code and written to the blob files,
//! not entered interactively: record shapes are still settling, and
//! regenerating from code beats migrating hand-entered data. IDs are
//! arbitrary but stable; cross references use them directly.

use crate::error::StoreResult;
use crate::store::{collection_files, RecordStore};
use gauntlet_core::{
    strategy, ChallengeDefinition, ChallengeType, CloudVirtualResource, Inventory,
    MetricDefinition, MetricFormula, PhysicalResource, Recipient, TestCase, TestDefinition,
    VnfService,
};
use tracing::info;

/// Seed the test case collection.
pub fn seed_test_cases(store: &RecordStore) -> StoreResult<Vec<TestCase>> {
    let cases: Vec<TestCase> = [
        (1, "resiliency-pif-001", "AUTO-9"),
        (2, "resiliency-pif-002", "AUTO-10"),
        (3, "resiliency-pif-003", "AUTO-11"),
        (4, "resiliency-pif-004", "AUTO-12"),
        (5, "resiliency-vif-001", "AUTO-13"),
        (6, "resiliency-vif-002", "AUTO-14"),
        (7, "resiliency-vif-003", "AUTO-15"),
        (8, "resiliency-sec-001", "AUTO-16"),
        (9, "resiliency-sec-002", "AUTO-17"),
        (10, "resiliency-sec-003", "AUTO-18"),
    ]
    .into_iter()
    .map(|(id, name, ticket)| {
        TestCase::new(id, name, format!("https://jira.opnfv.org/browse/{ticket}"))
    })
    .collect();
    store.save(collection_files::TEST_CASES, &cases)?;
    Ok(cases)
}

/// Seed the test definition collection.
pub fn seed_test_definitions(store: &RecordStore) -> StoreResult<Vec<TestDefinition>> {
    let definitions = vec![TestDefinition {
        id: 5,
        name: "VM failure impact on virtual firewall (vFW VNF)".into(),
        challenge_def_id: 5,
        test_case_id: 5,
        vnf_ids: vec![1],
        metric_ids: vec![1, 2],
        recipient_ids: vec![2],
        cli_commands: vec![
            "pwd".into(),
            "kubectl describe pods --include-uninitialized=false".into(),
        ],
        api_commands: vec!["data1".into(), "data2".into()],
        monitor: strategy::SERVER_RECOVERY.into(),
    }];
    store.save(collection_files::TEST_DEFINITIONS, &definitions)?;
    Ok(definitions)
}

/// Seed the challenge definition collection.
pub fn seed_challenge_definitions(store: &RecordStore) -> StoreResult<Vec<ChallengeDefinition>> {
    let definitions = vec![ChallengeDefinition {
        id: 5,
        name: "VM failure".into(),
        challenge_type: ChallengeType::CloudComputeFailure,
        recipient_id: 1,
        impacted_cloud_info: "VM on ctl02 in the Arm pod".into(),
        impacted_cloud_resource_ids: vec![2],
        impacted_physical_info: "physical server hosting the VM".into(),
        impacted_physical_resource_ids: vec![1],
        // suspend stores VM state on disk, pause keeps it in RAM;
        // the action goes through the platform API, the CLI commands
        // are recorded for the report only
        start_cli_command: "service nova-compute stop".into(),
        stop_cli_command: "service nova-compute restart".into(),
        start_api_commands: vec![],
        stop_api_commands: vec![],
        action: strategy::VM_SUSPEND.into(),
    }];
    store.save(collection_files::CHALLENGE_DEFINITIONS, &definitions)?;
    Ok(definitions)
}

/// Seed the recipient collection.
pub fn seed_recipients(store: &RecordStore) -> StoreResult<Vec<Recipient>> {
    let recipients = vec![
        Recipient {
            id: 1,
            name: "OpenStack on Arm pod".into(),
            info: "controller resolves to one of the CTL VMs".into(),
            version_info: String::new(),
            access_ip_address: "172.16.10.10".into(),
            access_url: String::new(),
            username: "admin".into(),
            password: "sample-password".into(),
            key: "ssh-rsa AAAAB3NzaC1yc2E-sample".into(),
            network_info: "lab network 172.16.0.0/22".into(),
        },
        Recipient {
            id: 2,
            name: "Kubernetes on x86 pod".into(),
            info: "bare metal".into(),
            version_info: "v1.9".into(),
            access_ip_address: "10.10.30.157".into(),
            access_url: String::new(),
            username: "kube".into(),
            password: "sample-password".into(),
            key: "ssh-rsa AAAAB3NzaC1yc2E-sample2".into(),
            network_info: "lab network 10.10.30.0/22".into(),
        },
    ];
    store.save(collection_files::RECIPIENTS, &recipients)?;
    Ok(recipients)
}

/// Seed the metric definition collection.
pub fn seed_metric_definitions(store: &RecordStore) -> StoreResult<Vec<MetricDefinition>> {
    let metrics = vec![
        MetricDefinition::new(
            1,
            "Recovery Time",
            "time for the orchestrator to restore a VNF after a challenge",
            MetricFormula::RecoveryTime,
        ),
        MetricDefinition::new(
            2,
            "Uptime Percentage",
            "ratio of uptime to reference time, discounting planned downtime",
            MetricFormula::UptimePercentage,
        ),
    ];
    store.save(collection_files::METRIC_DEFINITIONS, &metrics)?;
    Ok(metrics)
}

/// Seed the physical resource collection.
pub fn seed_physical_resources(store: &RecordStore) -> StoreResult<Vec<PhysicalResource>> {
    let resources = vec![
        PhysicalResource {
            id: 1,
            name: "small-cavium-1".into(),
            info: "jump server in Arm pod, 48 cores, 64G RAM, aarch64".into(),
            ip_address: "10.10.50.12".into(),
            mac_address: "00-14-22-01-23-45".into(),
        },
        PhysicalResource {
            id: 2,
            name: "medium-cavium-1".into(),
            info: "jump server in New York pod, 96 cores, 64G RAM, aarch64".into(),
            ip_address: "30.31.32.33".into(),
            mac_address: "b3-22-05-c1-aa-82".into(),
        },
        PhysicalResource {
            id: 3,
            name: "mega-cavium-666".into(),
            info: "jump server in Las Vegas pod, 1024 cores, 1024G RAM, aarch64".into(),
            ip_address: "54.53.52.51".into(),
            mac_address: "01-23-45-67-89-ab".into(),
        },
    ];
    store.save(collection_files::PHYSICAL_RESOURCES, &resources)?;
    Ok(resources)
}

/// Seed the cloud virtual resource collection.
pub fn seed_cloud_resources(store: &RecordStore) -> StoreResult<Vec<CloudVirtualResource>> {
    let resources = vec![
        CloudVirtualResource {
            id: 1,
            name: "nova-compute-1".into(),
            info: "nova VM in Arm pod".into(),
            ip_address: "50.60.70.80".into(),
            url: "http://50.60.70.80:8080".into(),
            related_physical_resource_ids: vec![1, 3],
        },
        CloudVirtualResource {
            id: 2,
            name: "nova-compute-2".into(),
            info: "nova VM in LaaS".into(),
            ip_address: "50.60.70.81".into(),
            url: "http://50.60.70.81:8080".into(),
            related_physical_resource_ids: vec![2, 3],
        },
        CloudVirtualResource {
            id: 3,
            name: "nova-compute-3".into(),
            info: "nova VM in x86 pod".into(),
            ip_address: "50.60.70.82".into(),
            url: "http://50.60.70.82:8080".into(),
            related_physical_resource_ids: vec![1],
        },
    ];
    store.save(collection_files::CLOUD_RESOURCES, &resources)?;
    Ok(resources)
}

/// Seed the VNF/service collection.
pub fn seed_vnf_services(store: &RecordStore) -> StoreResult<Vec<VnfService>> {
    let services = vec![
        VnfService {
            id: 1,
            name: "vCPE-1".into(),
            info: "virtual CPE in Arm pod".into(),
            ip_address: "5.4.3.2".into(),
            url: "http://5.4.3.2:8080".into(),
            related_physical_resource_ids: vec![1, 2],
            related_cloud_resource_ids: vec![1],
        },
        VnfService {
            id: 2,
            name: "vFW-1".into(),
            info: "virtual firewall in x86 pod".into(),
            ip_address: "6.7.8.9".into(),
            url: "http://6.7.8.9:8080".into(),
            related_physical_resource_ids: vec![3],
            related_cloud_resource_ids: vec![2, 3],
        },
    ];
    store.save(collection_files::VNF_SERVICES, &services)?;
    Ok(services)
}

/// Seed every collection and return the assembled inventory.
pub fn seed_all(store: &RecordStore) -> StoreResult<Inventory> {
    let inventory = Inventory {
        test_cases: seed_test_cases(store)?,
        test_definitions: seed_test_definitions(store)?,
        recipients: seed_recipients(store)?,
        challenge_definitions: seed_challenge_definitions(store)?,
        metric_definitions: seed_metric_definitions(store)?,
        physical_resources: seed_physical_resources(store)?,
        cloud_resources: seed_cloud_resources(store)?,
        vnf_services: seed_vnf_services(store)?,
    };
    info!(data_dir = %store.data_dir().display(), "sample catalog seeded");
    Ok(inventory)
}

/// Load every collection from disk into an inventory.
pub fn load_inventory(store: &RecordStore) -> StoreResult<Inventory> {
    Ok(Inventory {
        test_cases: store.load(collection_files::TEST_CASES)?,
        test_definitions: store.load(collection_files::TEST_DEFINITIONS)?,
        recipients: store.load(collection_files::RECIPIENTS)?,
        challenge_definitions: store.load(collection_files::CHALLENGE_DEFINITIONS)?,
        metric_definitions: store.load(collection_files::METRIC_DEFINITIONS)?,
        physical_resources: store.load(collection_files::PHYSICAL_RESOURCES)?,
        cloud_resources: store.load(collection_files::CLOUD_RESOURCES)?,
        vnf_services: store.load(collection_files::VNF_SERVICES)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_core::StrategyRegistry;

    #[test]
    fn seeded_catalog_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());

        let seeded = seed_all(&store).unwrap();
        let loaded = load_inventory(&store).unwrap();

        assert_eq!(loaded.test_cases, seeded.test_cases);
        assert_eq!(loaded.test_definitions, seeded.test_definitions);
        assert_eq!(loaded.challenge_definitions, seeded.challenge_definitions);
        assert_eq!(loaded.metric_definitions, seeded.metric_definitions);
    }

    #[test]
    fn seeded_strategy_keys_resolve_against_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        let inventory = seed_all(&store).unwrap();
        inventory.validate(&StrategyRegistry::with_builtins()).unwrap();
    }

    #[test]
    fn seeded_references_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        let inventory = seed_all(&store).unwrap();

        let test_def = inventory.test_definition(5).unwrap();
        assert!(inventory.test_case(test_def.test_case_id).is_some());
        let challenge = inventory
            .challenge_definition(test_def.challenge_def_id)
            .unwrap();
        assert!(challenge.primary_cloud_resource(&inventory).is_some());
        assert!(inventory.recovery_time_metric().is_ok());
    }
}
