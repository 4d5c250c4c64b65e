//! Metric definitions and their formulas.
//!
//! Formulas validate their inputs strictly: a precondition violation
//! means the measurement pipeline fed the formula garbage, which is a
//! programming error, not a recoverable condition. Violations surface
//! as [`MetricError`] and abort the run.

use crate::record::{Record, RecordId};
use crate::types::pad;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rendered-timestamp format shared with the execution logs.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Metric formula precondition violation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Restoration was detected before the challenge started
    #[error("challenge start must be <= restoration detection (start={start}, detected={detected})")]
    NegativeRecoveryWindow {
        /// Challenge start time
        start: DateTime<Utc>,
        /// Restoration detection time
        detected: DateTime<Utc>,
    },

    /// measured_uptime < 0
    #[error("measured uptime must be >= 0 (uptime={uptime}, reference={reference}, planned={planned})")]
    NegativeUptime { uptime: f64, reference: f64, planned: f64 },

    /// reference_time <= 0
    #[error("reference time must be > 0 (uptime={uptime}, reference={reference}, planned={planned})")]
    NonPositiveReference { uptime: f64, reference: f64, planned: f64 },

    /// planned_downtime < 0
    #[error("planned downtime must be >= 0 (uptime={uptime}, reference={reference}, planned={planned})")]
    NegativeDowntime { uptime: f64, reference: f64, planned: f64 },

    /// reference_time < planned_downtime
    #[error("reference time must be >= planned downtime (uptime={uptime}, reference={reference}, planned={planned})")]
    DowntimeExceedsReference { uptime: f64, reference: f64, planned: f64 },

    /// measured_uptime > reference_time
    #[error("measured uptime must be <= reference time (uptime={uptime}, reference={reference}, planned={planned})")]
    UptimeExceedsReference { uptime: f64, reference: f64, planned: f64 },

    /// measured_uptime > reference_time - planned_downtime
    #[error("measured uptime must be <= reference time minus planned downtime (uptime={uptime}, reference={reference}, planned={planned})")]
    UptimeExceedsWindow { uptime: f64, reference: f64, planned: f64 },

    /// Formula invoked with the wrong argument set
    #[error("metric {id} uses formula {formula:?}, not {requested}")]
    WrongFormula {
        /// Metric definition ID
        id: RecordId,
        /// Formula the definition carries
        formula: MetricFormula,
        /// Formula that was invoked
        requested: &'static str,
    },
}

/// Which calculation a metric definition performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricFormula {
    /// Duration between challenge start and restoration detection
    RecoveryTime,
    /// 100 * uptime / (reference_time - planned_downtime)
    UptimePercentage,
}

/// A metric the harness can evaluate during a test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub id: RecordId,
    pub name: String,
    /// Free-form description of the formula and its intent
    pub info: String,
    pub formula: MetricFormula,
}

impl MetricDefinition {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        info: impl Into<String>,
        formula: MetricFormula,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            info: info.into(),
            formula,
        }
    }

    /// Recovery time: duration between challenge start and restoration
    /// detection. Fails if detection precedes the start.
    pub fn recovery_time(
        &self,
        start: DateTime<Utc>,
        detected: DateTime<Utc>,
    ) -> Result<MetricValue, MetricError> {
        if self.formula != MetricFormula::RecoveryTime {
            return Err(MetricError::WrongFormula {
                id: self.id,
                formula: self.formula,
                requested: "RecoveryTime",
            });
        }
        if start > detected {
            return Err(MetricError::NegativeRecoveryWindow { start, detected });
        }
        Ok(MetricValue {
            metric_def_id: self.id,
            measured: Measured::Duration(detected - start),
            at: Utc::now(),
        })
    }

    /// Uptime percentage over a reference window, discounting planned
    /// downtime. All three inputs must use the same unit.
    ///
    /// The six precondition checks are applied in the documented order
    /// and deliberately kept exactly as specified, boundary quirks
    /// included: `uptime == reference - planned` passes and yields 100.
    pub fn uptime_percentage(
        &self,
        uptime: f64,
        reference: f64,
        planned: f64,
    ) -> Result<MetricValue, MetricError> {
        if self.formula != MetricFormula::UptimePercentage {
            return Err(MetricError::WrongFormula {
                id: self.id,
                formula: self.formula,
                requested: "UptimePercentage",
            });
        }
        if uptime < 0.0 {
            return Err(MetricError::NegativeUptime { uptime, reference, planned });
        }
        if reference <= 0.0 {
            return Err(MetricError::NonPositiveReference { uptime, reference, planned });
        }
        if planned < 0.0 {
            return Err(MetricError::NegativeDowntime { uptime, reference, planned });
        }
        if reference < planned {
            return Err(MetricError::DowntimeExceedsReference { uptime, reference, planned });
        }
        if uptime > reference {
            return Err(MetricError::UptimeExceedsReference { uptime, reference, planned });
        }
        if uptime > reference - planned {
            return Err(MetricError::UptimeExceedsWindow { uptime, reference, planned });
        }
        Ok(MetricValue {
            metric_def_id: self.id,
            measured: Measured::Percent(100.0 * uptime / (reference - planned)),
            at: Utc::now(),
        })
    }

    pub fn describe(&self, indent: usize) -> String {
        let p = pad(indent);
        format!(
            "{p}Metric Definition ID: {}\n{p}|-name: {}\n{p}|-info: {}\n{p}|-formula: {:?}\n",
            self.id, self.name, self.info, self.formula
        )
    }
}

impl Record for MetricDefinition {
    fn id(&self) -> RecordId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// A measured value, typed by formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measured {
    /// Recovery time result
    Duration(Duration),
    /// Uptime percentage result, in [0, 100]
    Percent(f64),
}

impl fmt::Display for Measured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measured::Duration(d) => {
                let secs = d.num_milliseconds() as f64 / 1000.0;
                write!(f, "{}s", secs)
            }
            Measured::Percent(p) => write!(f, "{}", p),
        }
    }
}

/// One measurement of a metric definition, stamped at computation time.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValue {
    /// Metric definition this value was computed from
    pub metric_def_id: RecordId,
    /// The measured value
    pub measured: Measured,
    /// When the value was computed
    pub at: DateTime<Utc>,
}

impl MetricValue {
    /// Rendered form used in execution logs and reports:
    /// `"<timestamp> <value>(<metric_def_id>)"`.
    pub fn rendered(&self) -> String {
        format!(
            "{} {}({})",
            self.at.format(TIMESTAMP_FORMAT),
            self.measured,
            self.metric_def_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    fn recovery_def() -> MetricDefinition {
        MetricDefinition::new(1, "Recovery Time", "restoration delay", MetricFormula::RecoveryTime)
    }

    fn uptime_def() -> MetricDefinition {
        MetricDefinition::new(
            2,
            "Uptime Percentage",
            "uptime over reference window",
            MetricFormula::UptimePercentage,
        )
    }

    #[test]
    fn recovery_time_is_end_minus_start() {
        let t1 = Utc.with_ymd_and_hms(2018, 7, 1, 15, 10, 12).unwrap();
        let t2 = Utc.with_ymd_and_hms(2018, 7, 1, 15, 13, 43).unwrap();
        let value = recovery_def().recovery_time(t1, t2).unwrap();
        assert_eq!(value.metric_def_id, 1);
        assert_eq!(value.measured, Measured::Duration(Duration::seconds(211)));
    }

    #[test]
    fn recovery_time_zero_window_is_valid() {
        let t = Utc::now();
        let value = recovery_def().recovery_time(t, t).unwrap();
        assert_eq!(value.measured, Measured::Duration(Duration::zero()));
    }

    #[test]
    fn recovery_time_rejects_reversed_window() {
        let t1 = Utc::now();
        let t2 = t1 - Duration::seconds(1);
        let err = recovery_def().recovery_time(t1, t2).unwrap_err();
        assert!(matches!(err, MetricError::NegativeRecoveryWindow { .. }));
    }

    #[test_case(735.0, 1000.0, 20.0 => 75.0; "nominal")]
    #[test_case(920.0, 1000.0, 0.0 => 92.0; "no planned downtime")]
    #[test_case(920.0, 1500.0, 500.0 => 92.0; "large planned downtime")]
    #[test_case(980.0, 1000.0, 20.0 => 100.0; "uptime equals available window")]
    fn uptime_percentage_values(uptime: f64, reference: f64, planned: f64) -> f64 {
        match uptime_def()
            .uptime_percentage(uptime, reference, planned)
            .unwrap()
            .measured
        {
            Measured::Percent(p) => p,
            other => panic!("unexpected measurement: {:?}", other),
        }
    }

    #[test_case(-1.0, 1000.0, 20.0; "negative uptime")]
    #[test_case(735.0, 0.0, 0.0; "zero reference")]
    #[test_case(735.0, -10.0, 0.0; "negative reference")]
    #[test_case(735.0, 1000.0, -5.0; "negative planned downtime")]
    #[test_case(10.0, 100.0, 200.0; "planned downtime exceeds reference")]
    #[test_case(1100.0, 1000.0, 20.0; "uptime exceeds reference")]
    #[test_case(990.0, 1000.0, 20.0; "uptime exceeds available window")]
    fn uptime_percentage_violations(uptime: f64, reference: f64, planned: f64) {
        assert!(uptime_def().uptime_percentage(uptime, reference, planned).is_err());
    }

    #[test]
    fn formula_mismatch_is_rejected() {
        let err = uptime_def().recovery_time(Utc::now(), Utc::now()).unwrap_err();
        assert!(matches!(err, MetricError::WrongFormula { .. }));
        let err = recovery_def().uptime_percentage(1.0, 2.0, 0.0).unwrap_err();
        assert!(matches!(err, MetricError::WrongFormula { .. }));
    }

    #[test]
    fn rendered_value_includes_definition_id() {
        let value = uptime_def().uptime_percentage(735.0, 1000.0, 20.0).unwrap();
        let line = value.rendered();
        assert!(line.ends_with("75(2)"), "unexpected rendering: {}", line);
    }
}
