//! End-to-end runner tests against the in-memory cloud platform.

use gauntlet_cloud::InMemoryPlatform;
use gauntlet_core::{
    ChallengeDefinition, ChallengeType, CloudVirtualResource, CoreError, Inventory,
    MetricDefinition, MetricFormula, RunnerConfig, StrategyRegistry, TestCase, TestDefinition,
    TestRunner,
};
use std::sync::Arc;
use std::time::Duration;

fn fixture_inventory(action: &str, monitor: &str) -> Inventory {
    let mut inventory = Inventory::default();
    inventory
        .test_cases
        .push(TestCase::new(5, "resiliency-vif-001", "https://tracker.example/CASE-13"));
    inventory.cloud_resources.push(CloudVirtualResource {
        id: 2,
        name: "nova-compute-1".into(),
        info: "VM under test".into(),
        ip_address: "50.60.70.80".into(),
        url: String::new(),
        related_physical_resource_ids: vec![],
    });
    inventory.challenge_definitions.push(ChallengeDefinition {
        id: 5,
        name: "VM failure".into(),
        challenge_type: ChallengeType::CloudComputeFailure,
        recipient_id: 1,
        impacted_cloud_info: "VM on compute node".into(),
        impacted_cloud_resource_ids: vec![2],
        impacted_physical_info: String::new(),
        impacted_physical_resource_ids: vec![],
        start_cli_command: String::new(),
        stop_cli_command: String::new(),
        start_api_commands: vec![],
        stop_api_commands: vec![],
        action: action.into(),
    });
    inventory.test_definitions.push(TestDefinition {
        id: 5,
        name: "VM failure impact on virtual firewall".into(),
        challenge_def_id: 5,
        test_case_id: 5,
        vnf_ids: vec![],
        metric_ids: vec![1],
        recipient_ids: vec![],
        cli_commands: vec![],
        api_commands: vec![],
        monitor: monitor.into(),
    });
    inventory.metric_definitions.push(MetricDefinition::new(
        1,
        "Recovery Time",
        "challenge start to restoration detection",
        MetricFormula::RecoveryTime,
    ));
    inventory
}

fn platform_with_server() -> InMemoryPlatform {
    let platform = InMemoryPlatform::new().with_auto_recovery(Duration::from_millis(20));
    platform.add_server("vm-1", "nova-compute-1");
    platform
}

fn config(dir: &tempfile::TempDir) -> RunnerConfig {
    RunnerConfig {
        report_dir: dir.path().to_path_buf(),
        user: "operator".into(),
        poll_interval: Duration::from_millis(5),
        timeout: Duration::from_secs(2),
    }
}

#[tokio::test]
async fn full_run_suspends_monitors_and_reports() {
    let inventory = fixture_inventory("vm-suspend", "server-recovery");
    let registry = StrategyRegistry::with_builtins();
    inventory.validate(&registry).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let runner = TestRunner::new(
        &inventory,
        &registry,
        Arc::new(platform_with_server()),
        config(&dir),
    );

    let outcome = runner.run(5).await.unwrap();
    assert!(outcome.recovery_time >= chrono::Duration::zero());

    let challenge_csv = std::fs::read_to_string(&outcome.challenge_report).unwrap();
    assert!(challenge_csv.contains("challenge definition name,VM failure"));
    assert!(challenge_csv.contains("challenge execution finished"));

    let test_csv = std::fs::read_to_string(&outcome.test_report).unwrap();
    assert!(test_csv.contains("test definition name,VM failure impact on virtual firewall"));
    assert!(test_csv.contains("MEASURED RECOVERY TIME (s)"));
    assert!(test_csv.contains("restoration detected"));
}

#[tokio::test]
async fn noop_run_completes_without_platform_servers() {
    let inventory = fixture_inventory("noop", "noop");
    let registry = StrategyRegistry::with_builtins();

    let dir = tempfile::tempdir().unwrap();
    let runner = TestRunner::new(
        &inventory,
        &registry,
        Arc::new(InMemoryPlatform::new()),
        config(&dir),
    );

    let outcome = runner.run(5).await.unwrap();
    assert!(outcome.challenge_report.exists());
    assert!(outcome.test_report.exists());
}

#[tokio::test]
async fn unknown_test_definition_aborts() {
    let inventory = fixture_inventory("noop", "noop");
    let registry = StrategyRegistry::with_builtins();
    let dir = tempfile::tempdir().unwrap();
    let runner = TestRunner::new(
        &inventory,
        &registry,
        Arc::new(InMemoryPlatform::new()),
        config(&dir),
    );

    let err = runner.run(404).await.unwrap_err();
    assert!(matches!(err, CoreError::RecordNotFound { kind: "test definition", id: 404 }));
}

#[tokio::test]
async fn restoration_timeout_aborts_run() {
    let inventory = fixture_inventory("vm-suspend", "server-recovery");
    let registry = StrategyRegistry::with_builtins();

    // no auto recovery: the suspended server never comes back
    let platform = InMemoryPlatform::new();
    platform.add_server("vm-1", "nova-compute-1");

    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(&dir);
    cfg.timeout = Duration::from_millis(30);
    let runner = TestRunner::new(&inventory, &registry, Arc::new(platform), cfg);

    let err = runner.run(5).await.unwrap_err();
    assert!(matches!(err, CoreError::RestorationTimeout(_)));

    // the run aborted before any report was written
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
