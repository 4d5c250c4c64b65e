//! One-shot test orchestration.
//!
//! The runner drives a single test execution as a strictly linear
//! sequence: start the challenge, wait for restoration, compute the
//! recovery time, stop the challenge, write the reports. The first
//! error aborts the run; there is no retry and no partial-result
//! recovery. This is an operator-run diagnostic, not a service.

use crate::error::CoreResult;
use crate::execution::{ChallengeExecution, TestExecution};
use crate::inventory::Inventory;
use crate::record::RecordId;
use crate::strategy::{ActionContext, MonitorContext, StrategyRegistry};
use chrono::{Duration as ChronoDuration, Utc};
use gauntlet_cloud::CloudPlatform;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Runner settings that are not part of the catalog.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory the CSV reports are written to
    pub report_dir: PathBuf,
    /// Operator name recorded on the test execution
    pub user: String,
    /// Delay between restoration probes
    pub poll_interval: Duration,
    /// Overall restoration deadline
    pub timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from("."),
            user: String::new(),
            poll_interval: Duration::from_secs(5),
            timeout: Duration::from_secs(300),
        }
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Challenge start to restoration detection
    pub recovery_time: ChronoDuration,
    /// Written challenge execution report
    pub challenge_report: PathBuf,
    /// Written test execution report
    pub test_report: PathBuf,
}

/// Drives one execution of a test definition.
pub struct TestRunner<'a> {
    inventory: &'a Inventory,
    registry: &'a StrategyRegistry,
    platform: Arc<dyn CloudPlatform>,
    config: RunnerConfig,
}

impl<'a> TestRunner<'a> {
    pub fn new(
        inventory: &'a Inventory,
        registry: &'a StrategyRegistry,
        platform: Arc<dyn CloudPlatform>,
        config: RunnerConfig,
    ) -> Self {
        Self {
            inventory,
            registry,
            platform,
            config,
        }
    }

    /// Execute the test definition once, end to end.
    pub async fn run(&self, test_def_id: RecordId) -> CoreResult<RunOutcome> {
        // T0 before anything else, so setup time is counted
        let t0 = Utc::now();

        let test_def = self.inventory.require_test_definition(test_def_id)?;
        let challenge_def = self
            .inventory
            .require_challenge_definition(test_def.challenge_def_id)?;
        let action = self.registry.challenge_action(&challenge_def.action)?;
        let monitor = self.registry.monitor(&test_def.monitor)?;

        info!(test = test_def.id, challenge = challenge_def.id, "starting test execution");

        // Execution records are per-run; a fixed ID of 1 is fine since
        // the CSV file name (definition ID + start time) is the key.
        let mut chall_exec = ChallengeExecution::new(1, "challenge execution", challenge_def.id);
        chall_exec.log.record("challenge execution created");

        let mut test_exec =
            TestExecution::new(1, "test execution", test_def.id, chall_exec.id, &self.config.user);
        test_exec.log.record("test execution created");
        test_exec.start_time = Some(t0);

        let action_cx = ActionContext {
            platform: self.platform.as_ref(),
            challenge: challenge_def,
            inventory: self.inventory,
        };
        action.start(&action_cx).await?;

        let challenge_start = Utc::now();
        chall_exec.start_time = Some(challenge_start);
        test_exec.challenge_start_time = Some(challenge_start);
        chall_exec.log.record("challenge started");

        let monitor_cx = MonitorContext {
            platform: self.platform.as_ref(),
            test: test_def,
            inventory: self.inventory,
            poll_interval: self.config.poll_interval,
            timeout: self.config.timeout,
        };
        monitor.wait_for_restoration(&monitor_cx).await?;

        let detected = Utc::now();
        test_exec.restoration_detection_time = Some(detected);
        test_exec.log.record("restoration detected");

        let recovery_def = self.inventory.recovery_time_metric()?;
        let recovery = recovery_def.recovery_time(challenge_start, detected)?;
        test_exec.metric_values.record(recovery.clone());
        test_exec.recovery_time = Some(recovery.clone());

        action.stop(&action_cx).await?;
        chall_exec.stop_time = Some(Utc::now());
        chall_exec.log.record("challenge execution finished");

        let challenge_report =
            chall_exec.write_report(&self.config.report_dir, self.inventory)?;

        test_exec.finish_time = Some(Utc::now());
        test_exec.log.record("test execution finished");
        let test_report = test_exec.write_report(&self.config.report_dir, self.inventory)?;

        let recovery_time = match recovery.measured {
            crate::metrics::Measured::Duration(d) => d,
            // recovery_time() always yields a duration
            crate::metrics::Measured::Percent(_) => ChronoDuration::zero(),
        };
        info!(
            test = test_def.id,
            recovery_seconds = recovery_time.num_milliseconds() as f64 / 1000.0,
            "test execution finished"
        );

        Ok(RunOutcome {
            recovery_time,
            challenge_report,
            test_report,
        })
    }
}
