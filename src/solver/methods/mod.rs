//! Trajectory computation methods
//!
//! - **[`RK4Solver`]**: classical fourth-order Runge-Kutta, fixed step, for
//!   any [`PhysicalModel`](crate::physics::PhysicalModel). Implements
//!   [`Solver`](crate::solver::Solver).
//! - **[`GuidingCenterSolver`]**: closed-form drift + gyration for uniform
//!   crossed fields. Takes [`DriftParameters`](crate::models::DriftParameters)
//!   directly since it does not integrate an equation of motion.

pub mod guiding_center;
pub mod rk4;

pub use guiding_center::GuidingCenterSolver;
pub use rk4::RK4Solver;
