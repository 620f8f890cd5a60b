//! Operation history tracking.
//!
//! Provides immutable tracking of transmission operations over time,
//! following functional programming principles.

use super::operation::Operation;
use super::state::TransmissionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied operation.
///
/// Rejected operations are recorded too; their `to` state only differs from
/// `from` in its status.
///
/// # Example
///
/// ```rust
/// use gearbox::core::{Operation, ShiftRecord, Status, TransmissionState};
/// use chrono::Utc;
///
/// let from = TransmissionState::initial();
/// let record = ShiftRecord {
///     operation: Operation::DecreaseGear,
///     from,
///     to: TransmissionState { status: Status::MinimumGear, ..from },
///     timestamp: Utc::now(),
/// };
///
/// assert!(record.was_rejected());
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub operation: Operation,
    /// State before the operation
    pub from: TransmissionState,
    /// State after the operation
    pub to: TransmissionState,
    /// When the operation was applied
    pub timestamp: DateTime<Utc>,
}

impl ShiftRecord {
    pub fn was_rejected(&self) -> bool {
        self.to.status.is_rejection()
    }

    /// True when the gear changed.
    pub fn is_shift(&self) -> bool {
        self.from.gear != self.to.gear
    }
}

/// Ordered history of applied operations.
///
/// History is immutable - the `record` method returns a new history
/// with the record added.
///
/// # Example
///
/// ```rust
/// use gearbox::core::{Operation, ShiftRecord, TransmissionHistory, TransmissionState};
/// use chrono::Utc;
///
/// let start = TransmissionState::initial();
/// let moving = TransmissionState { speed: 1, ..start };
///
/// let history = TransmissionHistory::new().record(ShiftRecord {
///     operation: Operation::IncreaseSpeed,
///     from: start,
///     to: moving,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[1].speed, 1);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TransmissionHistory {
    records: Vec<ShiftRecord>,
}

impl TransmissionHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an operation, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, record: ShiftRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// States traversed: the first `from`, then each `to`.
    pub fn path(&self) -> Vec<&TransmissionState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Gears engaged, in order, without repeats for consecutive records.
    pub fn gear_path(&self) -> Vec<usize> {
        let mut gears: Vec<usize> = self.path().iter().map(|state| state.gear).collect();
        gears.dedup();
        gears
    }

    /// Records whose operation was refused.
    pub fn rejections(&self) -> impl Iterator<Item = &ShiftRecord> {
        self.records.iter().filter(|record| record.was_rejected())
    }

    /// Number of gear changes.
    pub fn shift_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_shift()).count()
    }

    /// Time between the first and last record.
    ///
    /// Returns `None` without records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
