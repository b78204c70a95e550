//! Trajectory solvers
//!
//! A solver applies a numerical or closed-form method to the equations
//! provided by a physical model and returns the sampled [`Trajectory`].
//!
//! # Core Concepts
//!
//! The solver side separates concerns into three layers:
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (equations)
//!    - Initial state
//!
//! 2. **Time grid** (`TimeGrid`) - WHERE to sample
//!    - Interval [t0, t1] and sample count n, endpoints inclusive
//!
//! 3. **Solver** - HOW to solve
//!    - `RK4Solver`: fixed-step fourth-order Runge-Kutta (`Solver` trait)
//!    - `GuidingCenterSolver`: analytic drift + gyration for crossed fields
//!
//! Solvers are stateless: each call builds a fresh trajectory.
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐   ┌───────────────┐
//! │ Physical Model  │ + │ Initial State │
//! └────────┬────────┘   └───────┬───────┘
//!          └──────────┬─────────┘
//!            ┌────────▼────────┐   ┌──────────┐
//!            │    Scenario     │ + │ TimeGrid │
//!            └────────┬────────┘   └────┬─────┘
//!                     └───────┬─────────┘
//!                    ┌────────▼────────┐
//!                    │    RK4Solver    │
//!                    └────────┬────────┘
//!                    ┌────────▼────────┐
//!                    │   Trajectory    │ → export / plot
//!                    └─────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use mhd_rs::models::{LorentzForce, LorentzParameters};
//! use mhd_rs::physics::PhysicalState;
//! use mhd_rs::solver::{RK4Solver, Scenario, Solver, TimeGrid};
//! use nalgebra::Vector3;
//!
//! // Electric field only: uniform acceleration along z
//! let parameters = LorentzParameters::new(1.0, 2.0, [0.0, 0.0, 4.0], [0.0, 0.0, 0.0]);
//! let model = LorentzForce::new(parameters).unwrap();
//! let scenario = Scenario::new(Box::new(model), PhysicalState::default());
//!
//! let grid = TimeGrid::new(0.0, 1.0, 11).unwrap();
//! let trajectory = RK4Solver::new().solve(&scenario, &grid).unwrap();
//!
//! // z = a t² / 2 with a = 2
//! assert!((trajectory.z()[10] - 1.0).abs() < 1e-12);
//! ```

mod methods;
mod scenario;
mod time_grid;
mod traits;
mod trajectory;

pub use methods::{GuidingCenterSolver, RK4Solver};
pub use scenario::Scenario;
pub use time_grid::TimeGrid;
pub use traits::{Solver, SolverType};
pub use trajectory::{Axis, Trajectory, VelocitySeries};
