//! Physical model trait and particle state
//!
//! - `PhysicalModel`: trait for every equation of motion
//! - `PhysicalState`: position + velocity of one particle, with the vector
//!   arithmetic the Runge-Kutta stages need

use nalgebra::Vector3;

// =================================================================================================
// Physical State
// =================================================================================================

/// Kinematic state of a particle
///
/// The same type carries both a state s = (x, vx, y, vy, z, vz) and its time
/// derivative ds/dt. For a derivative, the `position` slot holds dx/dt and the
/// `velocity` slot holds the acceleration.
///
/// # Example
/// ```
/// use mhd_rs::physics::PhysicalState;
/// use nalgebra::Vector3;
///
/// let state = PhysicalState::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
/// let half_step = state + state * 0.5;
/// assert_eq!(half_step.position().x, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalState {
    position: Vector3<f64>,
    velocity: Vector3<f64>,
}

impl PhysicalState {
    /// Create a state from position and velocity
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self { position, velocity }
    }

    /// Particle at rest at the given position
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self::new(position, Vector3::zeros())
    }

    /// Build from the interleaved layout (x, vx, y, vy, z, vz)
    pub fn from_components(components: [f64; 6]) -> Self {
        let [x, vx, y, vy, z, vz] = components;
        Self::new(Vector3::new(x, y, z), Vector3::new(vx, vy, vz))
    }

    /// Interleaved layout (x, vx, y, vy, z, vz)
    pub fn components(&self) -> [f64; 6] {
        [
            self.position.x,
            self.velocity.x,
            self.position.y,
            self.velocity.y,
            self.position.z,
            self.velocity.z,
        ]
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn velocity(&self) -> &Vector3<f64> {
        &self.velocity
    }

    /// Euclidean norm of the velocity
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|c| c.is_finite())
    }
}

impl Default for PhysicalState {
    fn default() -> Self {
        Self::at_rest(Vector3::zeros())
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for PhysicalState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.position + rhs.position, self.velocity + rhs.velocity)
    }
}

impl std::ops::Mul<f64> for PhysicalState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self::new(self.position * scalar, self.velocity * scalar)
    }
}

impl std::ops::Mul<PhysicalState> for f64 {
    type Output = PhysicalState;

    fn mul(self, rhs: PhysicalState) -> Self::Output {
        rhs * self
    }
}

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for equations of motion
///
/// # Responsibility
/// Evaluates the right-hand side f(t, s) of ds/dt = f(t, s).
/// Does NOT integrate it (that's the Solver's job).
///
/// The whole state goes in and the whole derivative comes out: every
/// component of a Runge-Kutta stage is computed from the same intermediate
/// state, which matters when the force couples the axes (v × B).
pub trait PhysicalModel: Send + Sync {
    /// Computes the time derivative of `state` at `time`
    ///
    /// The returned state holds (dx/dt, dy/dt, dz/dt) in its position slot
    /// and the acceleration in its velocity slot.
    fn compute_physics(&self, time: f64, state: &PhysicalState) -> PhysicalState;

    /// Name of the model (used for display and logging)
    fn name(&self) -> &str;

    /// Description of the model (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}
