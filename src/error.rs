//! Error taxonomy
//!
//! Every fallible operation of the crate returns [`Result`], whose error side
//! is [`MhdError`]. Validation failures are raised where they are detected
//! (construction or call entry) and never deferred into the numerics.

use thiserror::Error;

/// Errors raised by particle configuration, solvers and output.
#[derive(Debug, Error)]
pub enum MhdError {
    /// Malformed input shape or value, naming the offending field
    #[error("Invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: String, reason: String },

    /// A time grid needs at least two samples to take one step
    #[error("Invalid grid size: {0} samples (at least 2 required)")]
    InvalidGridSize(usize),

    /// A derived quantity divides by a zero magnitude, charge or mass
    #[error("Division by zero while computing {quantity}")]
    DivisionByZero { quantity: String },

    /// Unknown plane / axis selector
    #[error("Invalid axis selector `{0}` (expected one of xy, xz, yz, xyz)")]
    InvalidAxisSelector(String),

    /// Export or plot requested before any solver populated the trajectory
    #[error("Trajectory has not been computed yet; call compute_trajectory() first")]
    UncomputedTrajectoryAccess,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Plotting error: {0}")]
    Plot(String),
}

impl MhdError {
    /// Shorthand for [`MhdError::InvalidParameter`]
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`MhdError::DivisionByZero`]
    pub fn division_by_zero(quantity: impl Into<String>) -> Self {
        Self::DivisionByZero { quantity: quantity.into() }
    }

    /// Name of the offending field, for parameter errors
    pub fn field(&self) -> Option<&str> {
        match self {
            MhdError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MhdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_names_field() {
        let error = MhdError::invalid("magnetic_field", "expected 3 components, got 2");
        assert_eq!(error.field(), Some("magnetic_field"));
        assert!(error.to_string().contains("magnetic_field"));
        assert!(error.to_string().contains("got 2"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: MhdError = io.into();
        assert!(matches!(error, MhdError::Io(_)));
        assert_eq!(error.field(), None);
    }
}
