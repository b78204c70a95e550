//! Physical models
//!
//! This module provides the physics side of the crate: the state of a charged
//! particle, the field vectors it moves through, and the trait every equation
//! of motion implements.
//!
//! # Core Concepts
//!
//! - **Physical Model**: Evaluates the right-hand side of ds/dt = f(t, s)
//! - **Physical State**: Position and velocity of the particle, s = (x, vx, y, vy, z, vz)
//! - **Field Vector**: A validated 3-component vector used for both E and B
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to integrate them (numerics)
//!
//! # Example
//!
//! ```rust
//! use mhd_rs::physics::{PhysicalModel, PhysicalState};
//! use nalgebra::Vector3;
//!
//! /// Free particle: constant velocity, no acceleration
//! struct FreeParticle;
//!
//! impl PhysicalModel for FreeParticle {
//!     fn compute_physics(&self, _time: f64, state: &PhysicalState) -> PhysicalState {
//!         PhysicalState::new(*state.velocity(), Vector3::zeros())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Free particle"
//!     }
//! }
//!
//! let state = PhysicalState::new(Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0));
//! let derivative = FreeParticle.compute_physics(0.0, &state);
//! assert_eq!(derivative.position().x, 1.0);
//! ```

pub mod traits;
pub mod vector;

pub use traits::{PhysicalModel, PhysicalState};
pub use vector::FieldVector;
