//! Simulation scenario definition
//!
//! A scenario combines an equation of motion with the particle's initial state.

use crate::error::{MhdError, Result};
use crate::physics::{PhysicalModel, PhysicalState};

/// Simulation scenario
///
/// Defines a specific case to integrate:
/// - Physical model (equations)
/// - Initial state (position and velocity at the first grid time)
///
/// The same scenario can be solved with different grids or solvers.
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// State at the first grid point
    pub initial: PhysicalState,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, initial: PhysicalState) -> Self {
        Self { model, initial }
    }

    /// Reject non-finite initial states
    pub fn validate(&self) -> Result<()> {
        if !self.initial.is_finite() {
            return Err(MhdError::invalid(
                "initial_state",
                format!("non-finite component in {:?}", self.initial.components()),
            ));
        }
        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("initial", &self.initial)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
