//! Particle configuration
//!
//! [`ParticleConfig`] is the construction surface of a
//! [`ParticleModel`](crate::models::ParticleModel). It is plain data: shape
//! checks (three field components, two interval endpoints) happen when the
//! model is built, so a config deserialized from a file can carry any shape
//! and still be reported against the right field.
//!
//! ```toml
//! magnetic_field = [0.0, 1.0, 0.0]
//! electric_field = [0.0, 0.0, 1.0]
//! samples = 1000
//! interval = [0.0, 1.0]
//! method = "rk4"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

pub use crate::solver::SolverType;

/// Default number of time samples
pub const DEFAULT_SAMPLES: usize = 1000;
/// Default charge q \[C\]
pub const DEFAULT_CHARGE: f64 = 1.6e-19;
/// Default mass m \[kg\]
pub const DEFAULT_MASS: f64 = 9.11e-22;

/// Physical parameters and sampling of one particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Magnetic field B (3 components)
    pub magnetic_field: Vec<f64>,
    /// Electric field E (3 components)
    pub electric_field: Vec<f64>,
    /// Number of time samples n (at least 2)
    pub samples: usize,
    /// Time interval [t0, t1]
    pub interval: Vec<f64>,
    /// Charge q
    pub charge: f64,
    /// Mass m
    pub mass: f64,
    /// Initial velocity (3 components), used by the numeric solver
    pub initial_velocity: Vec<f64>,
    /// Initial position (3 components), used by the numeric solver
    pub initial_position: Vec<f64>,
    /// Initial speed along B, used by the guiding-center solver
    pub parallel_speed: f64,
    /// Solver used by `compute_trajectory`
    pub method: SolverType,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            magnetic_field: vec![0.0; 3],
            electric_field: vec![0.0; 3],
            samples: DEFAULT_SAMPLES,
            interval: vec![0.0, 1.0],
            charge: DEFAULT_CHARGE,
            mass: DEFAULT_MASS,
            initial_velocity: vec![0.0; 3],
            initial_position: vec![0.0; 3],
            parallel_speed: 0.0,
            method: SolverType::default(),
        }
    }
}

impl ParticleConfig {
    /// Defaults with the given fields
    pub fn new(magnetic_field: &[f64], electric_field: &[f64]) -> Self {
        Self::default().with_fields(magnetic_field, electric_field)
    }

    pub fn with_fields(mut self, magnetic_field: &[f64], electric_field: &[f64]) -> Self {
        self.magnetic_field = magnetic_field.to_vec();
        self.electric_field = electric_field.to_vec();
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_interval(mut self, start: f64, end: f64) -> Self {
        self.interval = vec![start, end];
        self
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_initial_velocity(mut self, velocity: &[f64]) -> Self {
        self.initial_velocity = velocity.to_vec();
        self
    }

    pub fn with_initial_position(mut self, position: &[f64]) -> Self {
        self.initial_position = position.to_vec();
        self
    }

    pub fn with_parallel_speed(mut self, parallel_speed: f64) -> Self {
        self.parallel_speed = parallel_speed;
        self
    }

    pub fn with_method(mut self, method: SolverType) -> Self {
        self.method = method;
        self
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
