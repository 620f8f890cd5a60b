//! Imperative shell around the pure transmission.
//!
//! A [`Drive`] owns one [`Transmission`], replaces it with the result of each
//! operation and keeps a [`TransmissionHistory`] of everything applied.
//! This is the only place in the crate where state is reassigned in place.

use crate::core::{Operation, ShiftRecord, Status, TransmissionHistory};
use crate::transmission::Transmission;
use chrono::Utc;
use tracing::{debug, trace};

/// Single owner of a transmission and its history.
///
/// # Example
///
/// ```rust
/// use gearbox::{Drive, Operation, Status, Transmission};
///
/// let transmission = Transmission::new(&[0, 10, 5, 20, 15, 30, 25, 40, 35, 50]).unwrap();
/// let mut drive = Drive::new(transmission);
///
/// let status = drive.run(std::iter::repeat(Operation::IncreaseSpeed).take(5));
/// assert_eq!(status, Status::MayIncreaseGear);
///
/// assert_eq!(drive.apply(Operation::IncreaseGear), Status::Ok);
/// assert_eq!(drive.transmission().gear(), 2);
/// assert_eq!(drive.history().len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Drive {
    transmission: Transmission,
    history: TransmissionHistory,
}

impl Drive {
    pub fn new(transmission: Transmission) -> Self {
        Self {
            transmission,
            history: TransmissionHistory::new(),
        }
    }

    /// Apply one operation, record it and return the resulting status.
    pub fn apply(&mut self, operation: Operation) -> Status {
        let next = self.transmission.apply(operation);
        let record = ShiftRecord {
            operation,
            from: *self.transmission.state(),
            to: *next.state(),
            timestamp: Utc::now(),
        };

        if record.was_rejected() {
            debug!(
                %operation,
                speed = next.speed(),
                gear = next.gear(),
                status = %next.status(),
                "operation refused"
            );
        } else {
            trace!(
                %operation,
                speed = next.speed(),
                gear = next.gear(),
                status = %next.status(),
                "operation applied"
            );
        }

        self.history = self.history.record(record);
        self.transmission = next;
        self.transmission.status()
    }

    /// Apply operations in order and return the final status.
    ///
    /// Refused operations do not stop the run.
    pub fn run(&mut self, operations: impl IntoIterator<Item = Operation>) -> Status {
        for operation in operations {
            self.apply(operation);
        }
        self.transmission.status()
    }

    pub fn transmission(&self) -> &Transmission {
        &self.transmission
    }

    pub fn history(&self) -> &TransmissionHistory {
        &self.history
    }

    /// Give up ownership of the transmission and its history.
    pub fn into_parts(self) -> (Transmission, TransmissionHistory) {
        (self.transmission, self.history)
    }
}

impl From<Transmission> for Drive {
    fn from(transmission: Transmission) -> Self {
        Self::new(transmission)
    }
}
