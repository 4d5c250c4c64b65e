//! CSV report writing.
//!
//! Each execution record flattens to label/value rows of varying
//! width, written verbatim with a flexible CSV writer. File names are
//! keyed by definition ID and start time, so repeated runs of the
//! same definition never collide.

use crate::error::{CoreError, CoreResult};
use crate::execution::{ChallengeExecution, TestExecution};
use crate::inventory::Inventory;
use crate::record::Record;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

const FILE_TIME_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Write rows of varying width to `path`.
pub fn write_rows(path: &Path, rows: &[Vec<String>]) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

impl ChallengeExecution {
    /// Report file: `challDefExec{challenge_def_id:03}-{start}.csv`.
    pub fn report_path(&self, dir: &Path) -> CoreResult<PathBuf> {
        let start = self.start_time.ok_or_else(|| {
            CoreError::Report("challenge execution has no start time".into())
        })?;
        Ok(dir.join(format!(
            "challDefExec{:03}-{}.csv",
            self.challenge_def_id,
            start.format(FILE_TIME_FORMAT)
        )))
    }

    /// Dump all execution data to its CSV report under `dir`.
    pub fn write_report(&self, dir: &Path, inventory: &Inventory) -> CoreResult<PathBuf> {
        let path = self.report_path(dir)?;
        write_rows(&path, &self.report_rows(inventory))?;
        info!(path = %path.display(), "challenge execution report written");
        Ok(path)
    }
}

impl TestExecution {
    /// Report file: `testDefExec{test_def_id:03}-{start}.csv`.
    pub fn report_path(&self, dir: &Path) -> CoreResult<PathBuf> {
        let start = self
            .start_time
            .ok_or_else(|| CoreError::Report("test execution has no start time".into()))?;
        Ok(dir.join(format!(
            "testDefExec{:03}-{}.csv",
            self.test_def_id,
            start.format(FILE_TIME_FORMAT)
        )))
    }

    /// Dump all execution data to its CSV report under `dir`.
    pub fn write_report(&self, dir: &Path, inventory: &Inventory) -> CoreResult<PathBuf> {
        let path = self.report_path(dir)?;
        write_rows(&path, &self.report_rows(inventory))?;
        info!(path = %path.display(), "test execution report written");
        Ok(path)
    }
}

fn push_collection<T: Record>(rows: &mut Vec<Vec<String>>, title: &str, items: &[T]) {
    rows.push(vec![title.to_string()]);
    for item in items {
        rows.push(vec![item.id().to_string(), item.name().to_string()]);
    }
}

/// Snapshot of every definition collection in one timestamped CSV,
/// for archiving the catalog alongside the run reports.
pub fn write_definition_snapshot(
    dir: &Path,
    inventory: &Inventory,
    at: DateTime<Utc>,
) -> CoreResult<PathBuf> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    push_collection(&mut rows, "Test Cases:", &inventory.test_cases);
    push_collection(&mut rows, "Test Definitions:", &inventory.test_definitions);
    push_collection(&mut rows, "Challenge Definitions:", &inventory.challenge_definitions);
    push_collection(&mut rows, "Metric Definitions:", &inventory.metric_definitions);
    push_collection(&mut rows, "Recipients:", &inventory.recipients);
    push_collection(&mut rows, "Physical Resources:", &inventory.physical_resources);
    push_collection(&mut rows, "Cloud Virtual Resources:", &inventory.cloud_resources);
    push_collection(&mut rows, "VNFs/Services:", &inventory.vnf_services);

    let path = dir.join(format!(
        "definitionsSnapshot-{}.csv",
        at.format(FILE_TIME_FORMAT)
    ));
    write_rows(&path, &rows)?;
    info!(path = %path.display(), "definition snapshot written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TestCase;
    use chrono::TimeZone;

    #[test]
    fn challenge_report_name_has_padded_id_and_start_time() {
        let mut exec = ChallengeExecution::new(1, "challenge execution", 5);
        exec.start_time = Some(Utc.with_ymd_and_hms(2018, 7, 1, 15, 10, 12).unwrap());
        let path = exec.report_path(Path::new("/tmp/reports")).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "challDefExec005-2018-07-01-15-10-12.csv"
        );
    }

    #[test]
    fn report_path_requires_start_time() {
        let exec = ChallengeExecution::new(1, "challenge execution", 5);
        assert!(exec.report_path(Path::new("/tmp")).is_err());
    }

    #[test]
    fn writes_flexible_width_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![
            vec!["only one".to_string()],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        ];
        write_rows(&path, &rows).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("only one"));
        assert!(content.contains("a,b,c"));
    }

    #[test]
    fn snapshot_lists_every_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut inventory = Inventory::default();
        inventory
            .test_cases
            .push(TestCase::new(1, "resiliency-pif-001", "https://tracker.example/CASE-1"));

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let path = write_definition_snapshot(dir.path(), &inventory, at).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Test Cases:"));
        assert!(content.contains("1,resiliency-pif-001"));
        assert!(content.contains("VNFs/Services:"));
        assert!(path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("definitionsSnapshot-2024-03-01"));
    }
}
