use crate::config::CliConfig;
use anyhow::Result;
use colored::Colorize;
use gauntlet_cloud::InMemoryPlatform;
use gauntlet_core::{Inventory, RecordId, RunnerConfig, StrategyRegistry, TestRunner};
use std::sync::Arc;
use std::time::Duration;

/// How long the simulated platform keeps a suspended server down
/// before flipping it back to ACTIVE, standing in for the
/// orchestrator's own restoration.
const SIMULATED_RECOVERY: Duration = Duration::from_secs(2);

pub async fn execute(config: &CliConfig, id: RecordId) -> Result<()> {
    let store = gauntlet_store::RecordStore::new(&config.data_dir);
    let inventory = gauntlet_store::seed::load_inventory(&store)?;
    run_with_inventory(config, &inventory, id).await
}

/// Run one test definition against the in-memory platform. Split out
/// so the menu can reuse an already-loaded inventory.
pub async fn run_with_inventory(
    config: &CliConfig,
    inventory: &Inventory,
    id: RecordId,
) -> Result<()> {
    let registry = StrategyRegistry::with_builtins();
    inventory.validate(&registry)?;

    let platform = InMemoryPlatform::new().with_auto_recovery(SIMULATED_RECOVERY);
    for resource in &inventory.cloud_resources {
        platform.add_server(format!("server-{}", resource.id), &resource.name);
    }

    std::fs::create_dir_all(&config.report_dir)?;
    let runner_config = RunnerConfig {
        report_dir: config.report_dir.clone(),
        user: config.user.clone(),
        poll_interval: config.poll_interval(),
        timeout: config.timeout(),
    };
    let runner = TestRunner::new(inventory, &registry, Arc::new(platform), runner_config);

    let outcome = runner.run(id).await?;

    println!(
        "{} Test definition {} executed.",
        "Success:".green().bold(),
        id
    );
    println!(
        "  Recovery time: {}.{:06} s",
        outcome.recovery_time.num_seconds(),
        outcome.recovery_time.subsec_nanos() / 1_000
    );
    println!("  Challenge report: {}", outcome.challenge_report.display());
    println!("  Test report:      {}", outcome.test_report.display());
    Ok(())
}
