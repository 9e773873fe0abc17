use crate::physics::math::Scalar;
use std::fmt;

/// Errors raised when a simulation is set up with invalid inputs
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A universe needs at least one galaxy
    InvalidGalaxyCount(usize),
    /// A physics parameter is out of its valid range
    InvalidParameter { name: &'static str, value: Scalar },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidGalaxyCount(count) => {
                write!(f, "Galaxy count must be at least 1, got {count}")
            }
            SimulationError::InvalidParameter { name, value } => {
                write!(f, "Invalid value for {name}: {value}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SimulationError::InvalidGalaxyCount(0).to_string(),
            "Galaxy count must be at least 1, got 0"
        );
        assert_eq!(
            SimulationError::InvalidParameter {
                name: "time_step",
                value: -1.0
            }
            .to_string(),
            "Invalid value for time_step: -1"
        );
    }
}
