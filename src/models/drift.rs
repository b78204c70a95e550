//! Guiding-center drift quantities
//!
//! In uniform crossed fields the motion decomposes into a gyration of
//! angular frequency w around a guiding center that drifts at speed vD:
//!
//! | Quantity            | Formula          |
//! |---------------------|------------------|
//! | Electric magnitude  | mE = ‖E‖         |
//! | Magnetic magnitude  | mB = ‖B‖         |
//! | Drift speed         | vD = mE / mB     |
//! | Cyclotron frequency | w = q·mB / m     |
//! | Drift radius        | r = m·vD / (q·mB)|
//!
//! Every division is checked: a zero divisor is reported as
//! [`MhdError::DivisionByZero`] instead of producing an infinity or NaN.

use crate::error::{MhdError, Result};
use crate::physics::FieldVector;

fn checked_ratio(numerator: f64, denominator: f64, quantity: &str) -> Result<f64> {
    let ratio = numerator / denominator;
    if denominator == 0.0 || !ratio.is_finite() {
        return Err(MhdError::division_by_zero(quantity));
    }
    Ok(ratio)
}

/// vD = mE / mB
pub fn drift_speed(electric_magnitude: f64, magnetic_magnitude: f64) -> Result<f64> {
    checked_ratio(electric_magnitude, magnetic_magnitude, "drift speed vD = |E| / |B|")
}

/// w = q·mB / m
pub fn cyclotron_frequency(charge: f64, magnetic_magnitude: f64, mass: f64) -> Result<f64> {
    checked_ratio(charge * magnetic_magnitude, mass, "cyclotron frequency w = q|B| / m")
}

/// r = m·vD / (q·mB)
pub fn drift_radius(mass: f64, drift_speed: f64, charge: f64, magnetic_magnitude: f64) -> Result<f64> {
    checked_ratio(
        mass * drift_speed,
        charge * magnetic_magnitude,
        "drift radius r = m vD / (q |B|)",
    )
}

/// Inputs of the closed-form guiding-center solution
///
/// All derived quantities are computed and checked once, at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftParameters {
    charge: f64,
    mass: f64,
    electric_magnitude: f64,
    magnetic_magnitude: f64,
    drift_speed: f64,
    cyclotron_frequency: f64,
    drift_radius: f64,
    /// Initial speed along the field, vi
    parallel_speed: f64,
}

impl DriftParameters {
    /// # Errors
    ///
    /// `DivisionByZero` when ‖B‖, q or m is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mhd_rs::models::DriftParameters;
    /// use mhd_rs::physics::FieldVector;
    ///
    /// let e = FieldVector::new(0.0, -0.5, 0.0);
    /// let b = FieldVector::new(0.0, 0.0, -1.0);
    /// let drift = DriftParameters::new(1.0, 1.0, &e, &b, 0.0).unwrap();
    ///
    /// assert_eq!(drift.drift_speed(), 0.5);
    /// assert_eq!(drift.cyclotron_frequency(), 1.0);
    /// assert_eq!(drift.drift_radius(), 0.5);
    /// ```
    pub fn new(
        charge: f64,
        mass: f64,
        electric: &FieldVector,
        magnetic: &FieldVector,
        parallel_speed: f64,
    ) -> Result<Self> {
        let electric_magnitude = electric.magnitude();
        let magnetic_magnitude = magnetic.magnitude();

        let drift_speed = drift_speed(electric_magnitude, magnetic_magnitude)?;
        let cyclotron_frequency = cyclotron_frequency(charge, magnetic_magnitude, mass)?;
        let drift_radius = drift_radius(mass, drift_speed, charge, magnetic_magnitude)?;

        Ok(Self {
            charge,
            mass,
            electric_magnitude,
            magnetic_magnitude,
            drift_speed,
            cyclotron_frequency,
            drift_radius,
            parallel_speed,
        })
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn electric_magnitude(&self) -> f64 {
        self.electric_magnitude
    }

    pub fn magnetic_magnitude(&self) -> f64 {
        self.magnetic_magnitude
    }

    pub fn drift_speed(&self) -> f64 {
        self.drift_speed
    }

    pub fn cyclotron_frequency(&self) -> f64 {
        self.cyclotron_frequency
    }

    pub fn drift_radius(&self) -> f64 {
        self.drift_radius
    }

    pub fn parallel_speed(&self) -> f64 {
        self.parallel_speed
    }

    /// Speed along the field at time t: q·mE·t/m + vi
    pub fn parallel_velocity(&self, time: f64) -> f64 {
        self.charge * self.electric_magnitude * time / self.mass + self.parallel_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_quantities() {
        let e = FieldVector::new(3.0, 4.0, 0.0);
        let b = FieldVector::new(0.0, 0.0, 2.0);
        let drift = DriftParameters::new(2.0, 4.0, &e, &b, 1.5).unwrap();

        assert_eq!(drift.electric_magnitude(), 5.0);
        assert_eq!(drift.magnetic_magnitude(), 2.0);
        assert_eq!(drift.drift_speed(), 2.5);
        assert_eq!(drift.cyclotron_frequency(), 1.0);
        assert_relative_eq!(drift.drift_radius(), 4.0 * 2.5 / (2.0 * 2.0));
        assert_relative_eq!(drift.parallel_velocity(2.0), 2.0 * 5.0 * 2.0 / 4.0 + 1.5);
    }

    #[test]
    fn test_radius_times_frequency_is_drift_speed() {
        let e = FieldVector::new(0.0, 0.0, 1.0);
        let b = FieldVector::new(0.0, 1.0, 0.0);
        let drift = DriftParameters::new(1.6e-19, 9.11e-22, &e, &b, 0.0).unwrap();

        assert_relative_eq!(
            drift.drift_radius() * drift.cyclotron_frequency(),
            drift.drift_speed(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_magnetic_field() {
        let e = FieldVector::new(0.0, 0.0, 1.0);
        let result = DriftParameters::new(1.0, 1.0, &e, &FieldVector::zeros(), 0.0);

        match result {
            Err(MhdError::DivisionByZero { quantity }) => assert!(quantity.contains("vD")),
            other => panic!("expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_charge_and_mass() {
        let e = FieldVector::new(0.0, 0.0, 1.0);
        let b = FieldVector::new(0.0, 1.0, 0.0);

        assert!(matches!(
            DriftParameters::new(1.0, 0.0, &e, &b, 0.0),
            Err(MhdError::DivisionByZero { .. })
        ));
        assert!(matches!(
            DriftParameters::new(0.0, 1.0, &e, &b, 0.0),
            Err(MhdError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(drift_speed(1.0, 4.0).unwrap(), 0.25);
        assert!(drift_speed(1.0, 0.0).is_err());
        assert_eq!(cyclotron_frequency(2.0, 3.0, 6.0).unwrap(), 1.0);
        assert!(drift_radius(1.0, 1.0, 0.0, 1.0).is_err());
    }
}
