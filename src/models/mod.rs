//! Physical models for charged-particle motion
//!
//! # Available Models
//!
//! ## [`LorentzForce`]: equation of motion
//!
//! Implements [`PhysicalModel`](crate::physics::PhysicalModel) with
//! dv/dt = (q/m)(E + v × B). Integrated by
//! [`RK4Solver`](crate::solver::RK4Solver).
//!
//! ## [`DriftParameters`]: guiding-center decomposition
//!
//! Drift speed, cyclotron frequency and drift radius of uniform crossed
//! fields, consumed by [`GuidingCenterSolver`](crate::solver::GuidingCenterSolver).
//!
//! ## [`ParticleModel`]: one configured particle
//!
//! Validates a [`ParticleConfig`](crate::config::ParticleConfig), owns the
//! trajectory and dispatches to either solver. [`batch::compute_all`] runs
//! many particles at once.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod batch;
pub mod drift;
pub mod lorentz;
pub mod particle;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use drift::DriftParameters;
pub use lorentz::{LorentzForce, LorentzParameters};
pub use particle::ParticleModel;
