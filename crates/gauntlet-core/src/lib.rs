//! Core model of the Gauntlet resiliency harness.
//!
//! This crate holds the definition records (test cases, challenge and
//! test definitions, metrics, recipients, resource inventory), the
//! execution records produced by a run, the named strategy registry
//! that maps a definition's `action`/`monitor` key to executable
//! behavior, and the [`runner::TestRunner`] that drives one test
//! execution end to end.

pub mod error;
pub mod execution;
pub mod inventory;
pub mod metrics;
pub mod record;
pub mod report;
pub mod runner;
pub mod strategy;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use execution::{ChallengeExecution, EventLog, MetricLog, TestExecution};
pub use inventory::Inventory;
pub use metrics::{Measured, MetricDefinition, MetricError, MetricFormula, MetricValue};
pub use record::{find_by_id, id_exists, Record, RecordId};
pub use runner::{RunOutcome, RunnerConfig, TestRunner};
pub use strategy::{
    ActionContext, ChallengeAction, MonitorContext, RestorationMonitor, StrategyRegistry,
};
pub use types::{
    ChallengeDefinition, ChallengeType, CloudVirtualResource, PhysicalResource, Recipient,
    TestCase, TestDefinition, VnfService,
};
