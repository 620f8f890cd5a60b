//! The four transmission operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single transition request.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operation {
    IncreaseSpeed,
    DecreaseSpeed,
    IncreaseGear,
    DecreaseGear,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Self::IncreaseSpeed,
        Self::DecreaseSpeed,
        Self::IncreaseGear,
        Self::DecreaseGear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::IncreaseSpeed => "IncreaseSpeed",
            Self::DecreaseSpeed => "DecreaseSpeed",
            Self::IncreaseGear => "IncreaseGear",
            Self::DecreaseGear => "DecreaseGear",
        }
    }

    /// The operation that undoes this one when both succeed.
    pub fn inverse(&self) -> Self {
        match self {
            Self::IncreaseSpeed => Self::DecreaseSpeed,
            Self::DecreaseSpeed => Self::IncreaseSpeed,
            Self::IncreaseGear => Self::DecreaseGear,
            Self::DecreaseGear => Self::IncreaseGear,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_an_involution() {
        for operation in Operation::ALL {
            assert_ne!(operation.inverse(), operation);
            assert_eq!(operation.inverse().inverse(), operation);
        }
    }

    #[test]
    fn name_matches_display() {
        assert_eq!(Operation::IncreaseGear.to_string(), "IncreaseGear");
    }
}
