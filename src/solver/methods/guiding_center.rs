//! Closed-form guiding-center solver
//!
//! Evaluates the drift decomposition directly at every grid time:
//!
//! ```text
//! v∥(t) = q·mE·t/m + vi
//! X(t)  = r·w·cos(w·t) + vD·t
//! Y(t)  = r·w·sin(w·t)
//! Z(t)  = v∥(t)·t
//! ```
//!
//! X-Y is the plane of gyration and Z is the field direction. The formula is
//! only meaningful for the restricted configuration it assumes: B along one
//! axis, E along another, and a scalar initial speed along B. It is not a
//! substitute for [`RK4Solver`](super::RK4Solver) on arbitrary fields or
//! initial velocities, which is why it has its own entry point instead of
//! implementing [`Solver`](crate::solver::Solver).

use log::{debug, warn};

use crate::error::Result;
use crate::models::DriftParameters;
use crate::solver::{TimeGrid, Trajectory};

/// Analytic drift + gyration solver
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidingCenterSolver;

impl GuidingCenterSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &str {
        "Guiding center (analytic)"
    }

    /// Sample the closed-form positions on every grid point
    ///
    /// Positions only: the returned trajectory carries no velocity series.
    pub fn solve(&self, drift: &DriftParameters, grid: &TimeGrid) -> Result<Trajectory> {
        if drift.electric_magnitude() == 0.0 {
            warn!("Guiding center: |E| = 0, the drift term vanishes");
        }

        let w = drift.cyclotron_frequency();
        let amplitude = drift.drift_radius() * w;
        let drift_speed = drift.drift_speed();

        debug!(
            "Guiding center: {} samples, w = {:e}, r = {:e}, vD = {:e}",
            grid.samples(),
            w,
            drift.drift_radius(),
            drift_speed
        );

        let time_points = grid.points();
        let samples = time_points.len();
        let mut x = Vec::with_capacity(samples);
        let mut y = Vec::with_capacity(samples);
        let mut z = Vec::with_capacity(samples);

        for &t in &time_points {
            let (sin, cos) = (w * t).sin_cos();
            x.push(amplitude * cos + drift_speed * t);
            y.push(amplitude * sin);
            z.push(drift.parallel_velocity(t) * t);
        }

        let mut trajectory = Trajectory::from_positions(time_points, x, y, z);
        trajectory.add_metadata("solver", self.name());
        trajectory.add_metadata("samples", &samples.to_string());
        trajectory.add_metadata("cyclotron frequency", &w.to_string());
        trajectory.add_metadata("drift speed", &drift_speed.to_string());

        Ok(trajectory)
    }
}
