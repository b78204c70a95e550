//! Field vectors
//!
//! Electric and magnetic fields are uniform 3-component vectors. They usually
//! arrive from configuration as plain slices, so construction checks the
//! shape and names the offending field on failure.

use nalgebra::Vector3;
use std::fmt;

use crate::error::{MhdError, Result};

/// Uniform 3-component field (E in V/m, B in T)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldVector(Vector3<f64>);

impl FieldVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self(Vector3::zeros())
    }

    /// Build from a slice, requiring exactly 3 finite components
    ///
    /// `field` names the parameter in the error message.
    ///
    /// # Example
    /// ```
    /// use mhd_rs::physics::FieldVector;
    ///
    /// let b = FieldVector::from_slice("magnetic_field", &[0.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(b.magnitude(), 1.0);
    ///
    /// let error = FieldVector::from_slice("magnetic_field", &[0.0, 1.0]).unwrap_err();
    /// assert_eq!(error.field(), Some("magnetic_field"));
    /// ```
    pub fn from_slice(field: &str, values: &[f64]) -> Result<Self> {
        if values.len() != 3 {
            return Err(MhdError::invalid(
                field,
                format!("expected exactly 3 components, got {}", values.len()),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MhdError::invalid(field, "components must be finite"));
        }
        Ok(Self::new(values[0], values[1], values[2]))
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == 0.0)
    }

    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.0
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }
}

impl From<Vector3<f64>> for FieldVector {
    fn from(vector: Vector3<f64>) -> Self {
        Self(vector)
    }
}

impl From<[f64; 3]> for FieldVector {
    fn from(components: [f64; 3]) -> Self {
        Self::new(components[0], components[1], components[2])
    }
}

impl fmt::Display for FieldVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0.x, self.0.y, self.0.z)
    }
}
