//! Computed trajectories
//!
//! A [`Trajectory`] holds the ordered position samples X, Y, Z (and, for the
//! numeric path, the velocity samples Vx, Vy, Vz) of one particle, all indexed
//! by the same time grid. Solvers always build a complete trajectory; nothing
//! appends to or patches an existing one.

use nalgebra::Vector3;
use std::collections::HashMap;

use crate::error::{MhdError, Result};
use crate::physics::PhysicalState;
use crate::solver::TimeGrid;

/// Cartesian axis of a sample series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Velocity samples (Vx, Vy, Vz)
#[derive(Debug, Clone, PartialEq)]
pub struct VelocitySeries {
    pub vx: Vec<f64>,
    pub vy: Vec<f64>,
    pub vz: Vec<f64>,
}

impl VelocitySeries {
    pub fn component(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.vx,
            Axis::Y => &self.vy,
            Axis::Z => &self.vz,
        }
    }

    /// Speed |v| at sample `index`
    pub fn speed(&self, index: usize) -> f64 {
        Vector3::new(self.vx[index], self.vy[index], self.vz[index]).norm()
    }
}

/// Position (and optionally velocity) time series of one particle
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    time_points: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    velocity: Option<VelocitySeries>,
    computed: bool,
    metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Zero-filled placeholder for a grid, marked as not computed
    pub fn zeroed(grid: &TimeGrid) -> Self {
        let n = grid.samples();
        Self {
            time_points: grid.points(),
            x: vec![0.0; n],
            y: vec![0.0; n],
            z: vec![0.0; n],
            velocity: None,
            computed: false,
            metadata: HashMap::new(),
        }
    }

    /// Build from a sequence of full states (positions and velocities)
    pub(crate) fn from_states(time_points: Vec<f64>, states: &[PhysicalState]) -> Self {
        debug_assert_eq!(time_points.len(), states.len());

        let n = states.len();
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        let mut z = Vec::with_capacity(n);
        let mut velocity = VelocitySeries {
            vx: Vec::with_capacity(n),
            vy: Vec::with_capacity(n),
            vz: Vec::with_capacity(n),
        };

        for state in states {
            let [px, vx, py, vy, pz, vz] = state.components();
            x.push(px);
            y.push(py);
            z.push(pz);
            velocity.vx.push(vx);
            velocity.vy.push(vy);
            velocity.vz.push(vz);
        }

        Self {
            time_points,
            x,
            y,
            z,
            velocity: Some(velocity),
            computed: true,
            metadata: HashMap::new(),
        }
    }

    /// Build from position series only
    pub(crate) fn from_positions(time_points: Vec<f64>, x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        debug_assert!(x.len() == time_points.len() && y.len() == x.len() && z.len() == x.len());

        Self {
            time_points,
            x,
            y,
            z,
            velocity: None,
            computed: true,
            metadata: HashMap::new(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// True once a solver has populated the samples
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Fails with `UncomputedTrajectoryAccess` on a placeholder trajectory
    pub fn ensure_computed(&self) -> Result<()> {
        if self.computed {
            Ok(())
        } else {
            Err(MhdError::UncomputedTrajectoryAccess)
        }
    }

    pub fn time_points(&self) -> &[f64] {
        &self.time_points
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Position series along `axis`
    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Velocity series, when the solver recorded them
    pub fn velocity(&self) -> Option<&VelocitySeries> {
        self.velocity.as_ref()
    }

    /// Position at sample `index`
    pub fn position(&self, index: usize) -> Vector3<f64> {
        Vector3::new(self.x[index], self.y[index], self.z[index])
    }

    pub fn final_position(&self) -> Option<Vector3<f64>> {
        (!self.is_empty()).then(|| self.position(self.len() - 1))
    }

    /// True when every position (and velocity) sample is finite
    pub fn is_finite(&self) -> bool {
        let positions = self.x.iter().chain(&self.y).chain(&self.z);
        let finite_positions = positions.clone().all(|v| v.is_finite());
        let finite_velocities = self.velocity.as_ref().map_or(true, |v| {
            v.vx.iter().chain(&v.vy).chain(&v.vz).all(|c| c.is_finite())
        });
        finite_positions && finite_velocities
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Metadata entries sorted by key
    pub fn metadata(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .metadata
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}
