//! Mutable part of a transmission as an immutable value.

use super::status::Status;
use serde::{Deserialize, Serialize};

/// Speed, engaged gear and the status of the last operation.
///
/// States are plain values. Operations never modify a state in place; they
/// return the next one.
///
/// # Example
///
/// ```rust
/// use gearbox::core::{Status, TransmissionState};
///
/// let state = TransmissionState::initial();
/// assert_eq!(state.speed, 0);
/// assert_eq!(state.gear, 1);
/// assert_eq!(state.status, Status::Ok);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct TransmissionState {
    pub speed: u32,
    /// 1-based gear number
    pub gear: usize,
    pub status: Status,
}

impl TransmissionState {
    /// Standing still in first gear.
    pub const fn initial() -> Self {
        Self {
            speed: 0,
            gear: 1,
            status: Status::Ok,
        }
    }

    pub(crate) const fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Check whether speed and gear match, ignoring the status.
    pub fn same_position(&self, other: &Self) -> bool {
        self.speed == other.speed && self.gear == other.gear
    }
}

impl Default for TransmissionState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initial() {
        assert_eq!(TransmissionState::default(), TransmissionState::initial());
    }

    #[test]
    fn with_status_keeps_position() {
        let state = TransmissionState {
            speed: 12,
            gear: 2,
            status: Status::Ok,
        };

        let rejected = state.with_status(Status::MaximumGear);

        assert!(rejected.same_position(&state));
        assert_eq!(rejected.status, Status::MaximumGear);
        assert_ne!(rejected, state);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TransmissionState {
            speed: 7,
            gear: 1,
            status: Status::MayIncreaseGear,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TransmissionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
