//! Mock physical models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating numerical solver accuracy.

use mhd_rs::physics::{PhysicalModel, PhysicalState};
use nalgebra::Vector3;

// =================================================================================================
// Free flight: dv/dt = 0
// =================================================================================================

/// Force-free motion
///
/// Analytical solution: x(t) = x₀ + v₀·t
///
/// RK4 is exact for this problem up to rounding.
pub struct FreeFlight;

impl PhysicalModel for FreeFlight {
    fn compute_physics(&self, _time: f64, state: &PhysicalState) -> PhysicalState {
        PhysicalState::new(*state.velocity(), Vector3::zeros())
    }

    fn name(&self) -> &str {
        "Free flight"
    }
}

// =================================================================================================
// Uniform rotation: dv/dt = w ẑ × v
// =================================================================================================

/// Rotation of the velocity about z at angular frequency `w`
///
/// Same equations as a unit charge in B = -ẑ·w with no electric field.
pub struct UniformRotation {
    pub frequency: f64,
}

impl UniformRotation {
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }

    /// Exact position at time t for x₀ = 0 and v₀ = (v, 0, 0)
    pub fn position(&self, t: f64, speed: f64) -> Vector3<f64> {
        let w = self.frequency;
        Vector3::new(
            speed * (w * t).sin() / w,
            speed * (1.0 - (w * t).cos()) / w,
            0.0,
        )
    }
}

impl PhysicalModel for UniformRotation {
    fn compute_physics(&self, _time: f64, state: &PhysicalState) -> PhysicalState {
        let v = state.velocity();
        let acceleration = Vector3::new(-self.frequency * v.y, self.frequency * v.x, 0.0);
        PhysicalState::new(*v, acceleration)
    }

    fn name(&self) -> &str {
        "Uniform rotation"
    }
}
