//! Lorentz force equation of motion
//!
//! Non-relativistic motion of a point charge in uniform, externally imposed
//! fields:
//!
//! ```text
//! dx/dt = v
//! dv/dt = (q/m) · (E + v × B)
//! ```
//!
//! which expands per component to
//!
//! ```text
//! dvx/dt = (q/m)·(Ex + vy·Bz − vz·By)
//! dvy/dt = (q/m)·(Ey + vz·Bx − vx·Bz)
//! dvz/dt = (q/m)·(Ez + vx·By − vy·Bx)
//! ```
//!
//! The force is a single vector-valued function of the full state: the three
//! axes are coupled through the cross product and always advance together.

use nalgebra::Vector3;

use crate::error::{MhdError, Result};
use crate::physics::{FieldVector, PhysicalModel, PhysicalState};

/// Charge, mass and fields of a Lorentz force problem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorentzParameters {
    /// Charge q \[C\]
    pub charge: f64,
    /// Mass m \[kg\]
    pub mass: f64,
    /// Electric field E \[V/m\]
    pub electric: FieldVector,
    /// Magnetic field B \[T\]
    pub magnetic: FieldVector,
}

impl LorentzParameters {
    pub fn new(
        charge: f64,
        mass: f64,
        electric: impl Into<FieldVector>,
        magnetic: impl Into<FieldVector>,
    ) -> Self {
        Self {
            charge,
            mass,
            electric: electric.into(),
            magnetic: magnetic.into(),
        }
    }
}

/// Lorentz force model
///
/// # Example
///
/// ```rust
/// use mhd_rs::models::{LorentzForce, LorentzParameters};
/// use nalgebra::Vector3;
///
/// // Unit charge and mass, B along z: a particle moving along x is pushed towards -y
/// let parameters = LorentzParameters::new(1.0, 1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
/// let force = LorentzForce::new(parameters).unwrap();
///
/// let acceleration = force.acceleration(&Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(acceleration, Vector3::new(0.0, -1.0, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct LorentzForce {
    parameters: LorentzParameters,
    /// Charge-to-mass ratio q/m, checked finite at construction
    charge_to_mass: f64,
}

impl LorentzForce {
    /// Bind the force law to its parameters
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when q/m is not finite (m = 0, or non-finite q or m).
    pub fn new(parameters: LorentzParameters) -> Result<Self> {
        let charge_to_mass = parameters.charge / parameters.mass;
        if parameters.mass == 0.0 || !charge_to_mass.is_finite() {
            return Err(MhdError::division_by_zero("charge-to-mass ratio q/m"));
        }

        Ok(Self {
            parameters,
            charge_to_mass,
        })
    }

    pub fn parameters(&self) -> &LorentzParameters {
        &self.parameters
    }

    pub fn charge_to_mass(&self) -> f64 {
        self.charge_to_mass
    }

    /// Acceleration (q/m)·(E + v × B) for velocity `v`
    pub fn acceleration(&self, velocity: &Vector3<f64>) -> Vector3<f64> {
        let electric = self.parameters.electric.as_vector();
        let magnetic = self.parameters.magnetic.as_vector();

        (electric + velocity.cross(magnetic)) * self.charge_to_mass
    }
}

impl PhysicalModel for LorentzForce {
    fn compute_physics(&self, _time: f64, state: &PhysicalState) -> PhysicalState {
        PhysicalState::new(*state.velocity(), self.acceleration(state.velocity()))
    }

    fn name(&self) -> &str {
        "Lorentz force"
    }

    fn description(&self) -> Option<&str> {
        Some("Charged particle in uniform E and B fields, dv/dt = (q/m)(E + v x B)")
    }
}
