//! mhd-rs: Charged Particle Trajectories in Uniform Fields
//!
//! Computes and visualizes the motion of a charged particle through uniform,
//! externally imposed electric and magnetic fields, by integrating the
//! Lorentz force law dv/dt = (q/m)(E + v × B).
//!
//! # Architecture
//!
//! mhd-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Solvers provide methods (how to solve)
//!
//! 2. **Two distinct trajectory paths**
//!    - `RK4Solver`: fixed-step fourth-order Runge-Kutta for arbitrary fields
//!      and initial conditions
//!    - `GuidingCenterSolver`: closed-form drift + gyration, valid only for
//!      the crossed-field configuration it assumes
//!
//! Data flows one way: configuration → solver → trajectory → export / plot.
//!
//! # Quick Start
//!
//! ```rust
//! use mhd_rs::prelude::*;
//!
//! # fn main() -> mhd_rs::error::Result<()> {
//! // 1. Configure the particle (defaults: q = 1.6e-19, m = 9.11e-22, t in [0, 1])
//! let config = ParticleConfig::new(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]).with_samples(500);
//! let mut particle = ParticleModel::new(&config)?;
//!
//! // 2. Integrate
//! let trajectory = particle.compute_trajectory()?;
//!
//! // 3. Access results
//! assert_eq!(trajectory.len(), 500);
//! assert!(trajectory.is_finite());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: State, field vectors and the model trait
//! - [`models`]: Lorentz force, drift quantities, `ParticleModel`
//! - [`solver`]: Time grid, trajectories and solvers
//! - [`config`]: Particle configuration (TOML)
//! - [`output`]: `.mhd` / CSV export, plots and animations
//! - [`error`]: Error taxonomy
//!
//! # Features
//!
//! - `parallel`: compute batches of particles on the rayon thread pool

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod config;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use mhd_rs::prelude::*;
    //! ```
    pub use crate::config::ParticleConfig;
    pub use crate::error::{MhdError, Result};
    pub use crate::models::{DriftParameters, LorentzForce, LorentzParameters, ParticleModel};
    pub use crate::physics::{FieldVector, PhysicalModel, PhysicalState};
    pub use crate::solver::{
        GuidingCenterSolver, RK4Solver, Scenario, Solver, SolverType, TimeGrid, Trajectory,
    };
}
