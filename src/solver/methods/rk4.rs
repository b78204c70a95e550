//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method integrates
//!
//! ```text
//! ds/dt = f(t, s),    s = (x, vx, y, vy, z, vz)
//! ```
//!
//! with a weighted average of four slope estimates:
//!
//! ```text
//! k₁ = f(tₙ,        sₙ)
//! k₂ = f(tₙ + h/2,  sₙ + h/2 · k₁)
//! k₃ = f(tₙ + h/2,  sₙ + h/2 · k₂)
//! k₄ = f(tₙ + h,    sₙ + h · k₃)
//!
//! sₙ₊₁ = sₙ + h/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! Each stage evaluates the model on the full intermediate state, so the
//! three axes coupled by the v×B term advance together.
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(h⁴))
//! - **Step**: Fixed, h = (t₁ - t₀) / (n - 1); no adaptive refinement
//! - **Cost**: 4 model evaluations per step
//!
//! Halving h divides the error by roughly 16.
//!
//! # Example
//!
//! ```rust
//! use mhd_rs::models::{LorentzForce, LorentzParameters};
//! use mhd_rs::physics::PhysicalState;
//! use mhd_rs::solver::{RK4Solver, Scenario, Solver, TimeGrid};
//! use nalgebra::Vector3;
//!
//! let parameters = LorentzParameters::new(1.0, 1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
//! let model = LorentzForce::new(parameters).unwrap();
//! let initial = PhysicalState::new(Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0));
//!
//! let scenario = Scenario::new(Box::new(model), initial);
//! let grid = TimeGrid::new(0.0, 1.0, 101).unwrap();
//!
//! let trajectory = RK4Solver::new().solve(&scenario, &grid).unwrap();
//! assert_eq!(trajectory.len(), 101);
//! ```

use log::{debug, warn};

use crate::error::{MhdError, Result};
use crate::physics::PhysicalState;
use crate::solver::{Scenario, Solver, TimeGrid, Trajectory};

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// Stateless: every call starts from the scenario's initial state and
/// rebuilds the whole trajectory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    ///
    /// ```rust
    /// use mhd_rs::solver::{RK4Solver, Solver};
    ///
    /// assert_eq!(RK4Solver::new().name(), "Runge Kutta (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Advance `state` by one step of size `h` from `time`
    pub fn step(scenario: &Scenario, time: f64, state: &PhysicalState, h: f64) -> PhysicalState {
        let model = &scenario.model;
        let half = h / 2.0;

        let k1 = model.compute_physics(time, state);
        let k2 = model.compute_physics(time + half, &(*state + k1 * half));
        let k3 = model.compute_physics(time + half, &(*state + k2 * half));
        let k4 = model.compute_physics(time + h, &(*state + k3 * h));

        // Simpson weights 1/6, 2/6, 2/6, 1/6
        let weighted_slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;

        *state + weighted_slope * (h / 6.0)
    }
}

impl Solver for RK4Solver {
    fn solve(&self, scenario: &Scenario, grid: &TimeGrid) -> Result<Trajectory> {
        // ====== Step 1: Validation ======

        scenario.validate()?;

        let samples = grid.samples();
        let h = grid.step();

        if grid.is_degenerate() {
            warn!(
                "Degenerate time grid [{}, {}]: trajectory stays at the initial state",
                grid.start(),
                grid.end()
            );
        }

        debug!(
            "RK4: integrating '{}' over [{}, {}] with {} samples (h = {:e})",
            scenario.get_model_name(),
            grid.start(),
            grid.end(),
            samples,
            h
        );

        // ====== Step 2: Time Integration ======

        let time_points = grid.points();
        let mut states = Vec::with_capacity(samples);
        let mut state = scenario.initial;
        states.push(state);

        for step in 0..samples - 1 {
            state = Self::step(scenario, time_points[step], &state, h);

            // Finite inputs only turn non-finite through a singular derivative
            if !state.is_finite() {
                return Err(MhdError::division_by_zero(format!(
                    "derivative of '{}' at step {} (t = {})",
                    scenario.get_model_name(),
                    step + 1,
                    time_points[step + 1]
                )));
            }

            states.push(state);
        }

        // ====== Step 3: Build Result ======

        let mut trajectory = Trajectory::from_states(time_points, &states);

        trajectory.add_metadata("solver", self.name());
        trajectory.add_metadata("model", scenario.get_model_name());
        trajectory.add_metadata("samples", &samples.to_string());
        trajectory.add_metadata("h", &h.to_string());
        trajectory.add_metadata("function evaluations", &(4 * (samples - 1)).to_string());

        Ok(trajectory)
    }

    fn name(&self) -> &str {
        "Runge Kutta (RK4)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
