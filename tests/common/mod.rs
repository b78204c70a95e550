//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{FreeFlight, UniformRotation};
pub use test_helpers::{
    crossed_field_config,
    cyclotron_config,
    max_abs_difference,
    relative_error,
    CROSSED_DRIFT_SPEED,
};
