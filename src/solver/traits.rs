//! Solver trait and solver selection
//!
//! - `Solver`: numerical integration of a [`Scenario`] over a [`TimeGrid`]
//! - `SolverType`: which trajectory computation a particle uses, selectable
//!   from configuration files

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::solver::{Scenario, TimeGrid, Trajectory};

// =================================================================================================
// Solver Type
// =================================================================================================

/// Trajectory computation method
///
/// Serialized as `"rk4"` or `"guiding_center"`.
///
/// # Example
///
/// ```rust
/// use mhd_rs::solver::SolverType;
///
/// assert_eq!(SolverType::default(), SolverType::RungeKutta4);
/// assert_eq!(SolverType::GuidingCenter.name(), "guiding_center");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolverType {
    /// Fourth-order Runge-Kutta integration of the Lorentz force
    #[default]
    #[serde(rename = "rk4")]
    RungeKutta4,

    /// Closed-form gyration plus drift
    #[serde(rename = "guiding_center")]
    GuidingCenter,
}

impl SolverType {
    /// Configuration identifier
    pub fn name(&self) -> &'static str {
        match self {
            SolverType::RungeKutta4 => "rk4",
            SolverType::GuidingCenter => "guiding_center",
        }
    }

    /// True for the time-stepping path
    pub fn is_numeric(&self) -> bool {
        matches!(self, SolverType::RungeKutta4)
    }
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Numerical integrator for a scenario
///
/// Implementations sample the solution on every point of the grid, starting
/// from the scenario's initial state at `grid.start()`, and return a complete
/// [`Trajectory`]. Solvers hold no state between calls, so solving the same
/// scenario twice yields identical results.
pub trait Solver {
    fn solve(&self, scenario: &Scenario, grid: &TimeGrid) -> Result<Trajectory>;

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        method: SolverType,
    }

    #[test]
    fn test_solver_type_names() {
        assert_eq!(SolverType::RungeKutta4.to_string(), "rk4");
        assert_eq!(SolverType::GuidingCenter.to_string(), "guiding_center");
        assert!(SolverType::RungeKutta4.is_numeric());
        assert!(!SolverType::GuidingCenter.is_numeric());
    }

    #[test]
    fn test_solver_type_deserialize() {
        let wrapper: Wrapper = toml::from_str("method = \"guiding_center\"").unwrap();
        assert_eq!(wrapper.method, SolverType::GuidingCenter);

        let wrapper: Wrapper = toml::from_str("method = \"rk4\"").unwrap();
        assert_eq!(wrapper.method, SolverType::RungeKutta4);

        assert!(toml::from_str::<Wrapper>("method = \"euler\"").is_err());
    }
}
