//! Execution records: the mutable logs of a single test run.
//!
//! Definition records never change during a run; these do. Both
//! execution types accumulate timestamped events and flatten to
//! label/value rows for the CSV reports. They are created fresh per
//! run and never enter the binary record store.

use crate::inventory::Inventory;
use crate::metrics::{Measured, MetricValue, TIMESTAMP_FORMAT};
use crate::record::RecordId;
use chrono::{DateTime, Utc};

/// Append-only list of strings, each stamped at append time.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<(DateTime<Utc>, String)>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, stamped now.
    pub fn record(&mut self, text: impl Into<String>) {
        self.entries.push((Utc::now(), text.into()));
    }

    /// Entries rendered as `"<timestamp> <text>"` lines, seconds precision.
    pub fn timestamped_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(at, text)| format!("{} {}", at.format(TIMESTAMP_FORMAT), text))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Append-only list of measured metric values. Values carry their own
/// computation timestamp.
#[derive(Debug, Clone, Default)]
pub struct MetricLog {
    values: Vec<MetricValue>,
}

impl MetricLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: MetricValue) {
        self.values.push(value);
    }

    pub fn rendered_lines(&self) -> Vec<String> {
        self.values.iter().map(MetricValue::rendered).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn push_section(rows: &mut Vec<Vec<String>>, title: &str, lines: Vec<String>) {
    if !lines.is_empty() {
        rows.push(vec![title.to_string()]);
        for line in lines {
            rows.push(vec![line]);
        }
    }
}

fn format_time(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Execution log of one challenge injection.
#[derive(Debug, Clone)]
pub struct ChallengeExecution {
    pub id: RecordId,
    pub name: String,
    /// Challenge definition this run executes
    pub challenge_def_id: RecordId,
    /// When the challenge was started
    pub start_time: Option<DateTime<Utc>>,
    /// When normal operation was restored
    pub stop_time: Option<DateTime<Utc>>,
    /// Significant events during the challenge
    pub log: EventLog,
    /// Responses to CLI commands
    pub cli_responses: EventLog,
    /// Responses to API commands, stringified
    pub api_responses: EventLog,
}

impl ChallengeExecution {
    pub fn new(id: RecordId, name: impl Into<String>, challenge_def_id: RecordId) -> Self {
        Self {
            id,
            name: name.into(),
            challenge_def_id,
            start_time: None,
            stop_time: None,
            log: EventLog::new(),
            cli_responses: EventLog::new(),
            api_responses: EventLog::new(),
        }
    }

    /// Flatten to label/value rows for the CSV report.
    pub fn report_rows(&self, inventory: &Inventory) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        rows.push(vec!["challenge execution ID".into(), self.id.to_string()]);
        rows.push(vec!["challenge execution name".into(), self.name.clone()]);
        rows.push(vec![
            "challenge definition ID".into(),
            self.challenge_def_id.to_string(),
        ]);
        let def_name = inventory
            .challenge_definition(self.challenge_def_id)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        rows.push(vec!["challenge definition name".into(), def_name]);

        if let Some(at) = self.start_time {
            rows.push(vec!["challenge start time".into(), format_time(at)]);
        }
        if let Some(at) = self.stop_time {
            rows.push(vec!["challenge stop time".into(), format_time(at)]);
        }

        push_section(&mut rows, "Log:", self.log.timestamped_lines());
        push_section(&mut rows, "CLI responses:", self.cli_responses.timestamped_lines());
        push_section(&mut rows, "API responses:", self.api_responses.timestamped_lines());
        rows
    }
}

/// Execution log of one full test run.
#[derive(Debug, Clone)]
pub struct TestExecution {
    pub id: RecordId,
    pub name: String,
    /// Test definition this run executes
    pub test_def_id: RecordId,
    /// Challenge execution belonging to this run
    pub challenge_exec_id: RecordId,
    /// Operator who started the run
    pub user: String,
    /// When the run started (setup time counts)
    pub start_time: Option<DateTime<Utc>>,
    /// When the run finished
    pub finish_time: Option<DateTime<Utc>>,
    /// Copy of the challenge execution's start time
    pub challenge_start_time: Option<DateTime<Utc>>,
    /// When the monitor observed restoration
    pub restoration_detection_time: Option<DateTime<Utc>>,
    /// Key metric: challenge start to restoration detection
    pub recovery_time: Option<MetricValue>,
    /// All metric values measured during the run
    pub metric_values: MetricLog,
    /// Significant events during the run
    pub log: EventLog,
    /// Responses to CLI commands
    pub cli_responses: EventLog,
    /// Responses to API commands, stringified
    pub api_responses: EventLog,
}

impl TestExecution {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        test_def_id: RecordId,
        challenge_exec_id: RecordId,
        user: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            test_def_id,
            challenge_exec_id,
            user: user.into(),
            start_time: None,
            finish_time: None,
            challenge_start_time: None,
            restoration_detection_time: None,
            recovery_time: None,
            metric_values: MetricLog::new(),
            log: EventLog::new(),
            cli_responses: EventLog::new(),
            api_responses: EventLog::new(),
        }
    }

    /// Flatten to label/value rows for the CSV report.
    pub fn report_rows(&self, inventory: &Inventory) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        rows.push(vec!["test execution ID".into(), self.id.to_string()]);
        rows.push(vec!["test execution name".into(), self.name.clone()]);
        rows.push(vec!["test definition ID".into(), self.test_def_id.to_string()]);
        let def_name = inventory
            .test_definition(self.test_def_id)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        rows.push(vec!["test definition name".into(), def_name]);
        rows.push(vec![
            "associated challenge execution ID".into(),
            self.challenge_exec_id.to_string(),
        ]);
        rows.push(vec!["user".into(), self.user.clone()]);

        if let Some(at) = self.start_time {
            rows.push(vec!["test start time".into(), format_time(at)]);
        }
        if let Some(at) = self.finish_time {
            rows.push(vec!["test finish time".into(), format_time(at)]);
        }
        if let Some(at) = self.challenge_start_time {
            rows.push(vec!["challenge start time".into(), format_time(at)]);
        }
        if let Some(at) = self.restoration_detection_time {
            rows.push(vec!["restoration detection time".into(), format_time(at)]);
        }

        if let Some(value) = &self.recovery_time {
            if let Measured::Duration(d) = value.measured {
                let total_seconds = d.num_milliseconds() as f64 / 1000.0;
                rows.push(vec![
                    "MEASURED RECOVERY TIME (s)".into(),
                    total_seconds.to_string(),
                ]);
                let secs = d.num_seconds();
                let micros = d
                    .checked_sub(&chrono::Duration::seconds(secs))
                    .and_then(|rest| rest.num_microseconds())
                    .unwrap_or(0);
                rows.push(vec![
                    "MEASURED RECOVERY TIME (days, hours, mins, seconds, microseconds)".into(),
                    (secs / 86_400).to_string(),
                    ((secs % 86_400) / 3_600).to_string(),
                    ((secs % 3_600) / 60).to_string(),
                    (secs % 60).to_string(),
                    micros.to_string(),
                ]);
            }
        }

        push_section(&mut rows, "Metric Values:", self.metric_values.rendered_lines());
        push_section(&mut rows, "Log:", self.log.timestamped_lines());
        push_section(&mut rows, "CLI responses:", self.cli_responses.timestamped_lines());
        push_section(&mut rows, "API responses:", self.api_responses.timestamped_lines());
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MetricDefinition, MetricFormula};
    use chrono::Duration;

    #[test]
    fn event_log_renders_in_append_order() {
        let mut log = EventLog::new();
        log.record("first");
        log.record("second");
        let lines = log.timestamped_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn challenge_rows_skip_unset_times() {
        let exec = ChallengeExecution::new(1, "challenge execution", 5);
        let rows = exec.report_rows(&Inventory::default());
        assert!(rows.iter().all(|r| r[0] != "challenge start time"));
        assert!(rows.iter().all(|r| r[0] != "Log:"));
    }

    #[test]
    fn test_rows_include_recovery_breakdown() {
        let def = MetricDefinition::new(1, "Recovery Time", "", MetricFormula::RecoveryTime);
        let start = Utc::now();
        let detected = start + Duration::seconds(3_725) + Duration::milliseconds(250);

        let mut exec = TestExecution::new(1, "test execution", 5, 1, "operator");
        exec.start_time = Some(start);
        exec.challenge_start_time = Some(start);
        exec.restoration_detection_time = Some(detected);
        exec.recovery_time = Some(def.recovery_time(start, detected).unwrap());

        let rows = exec.report_rows(&Inventory::default());
        let seconds_row = rows
            .iter()
            .find(|r| r[0] == "MEASURED RECOVERY TIME (s)")
            .expect("seconds row present");
        assert_eq!(seconds_row[1], "3725.25");

        let breakdown = rows
            .iter()
            .find(|r| r[0].starts_with("MEASURED RECOVERY TIME (days"))
            .expect("breakdown row present");
        // 0 days, 1 hour, 2 minutes, 5 seconds, 250000 microseconds
        assert_eq!(&breakdown[1..], &["0", "1", "2", "5", "250000"]);
    }

    #[test]
    fn test_rows_sections_only_when_populated() {
        let mut exec = TestExecution::new(1, "test execution", 5, 1, "operator");
        exec.log.record("test execution created");
        let rows = exec.report_rows(&Inventory::default());
        assert!(rows.iter().any(|r| r[0] == "Log:"));
        assert!(rows.iter().all(|r| r[0] != "CLI responses:"));
    }
}
