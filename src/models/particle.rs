//! Charged particle in uniform fields
//!
//! [`ParticleModel`] owns the validated physical configuration of one
//! particle together with its [`Trajectory`], and fills the trajectory with
//! one of two solvers:
//!
//! - [`SolverType::RungeKutta4`]: numeric integration of the Lorentz force
//!   from the initial position and velocity vectors
//! - [`SolverType::GuidingCenter`]: closed-form drift + gyration from the
//!   scalar parallel speed
//!
//! # Example
//!
//! ```rust
//! use mhd_rs::config::ParticleConfig;
//! use mhd_rs::models::ParticleModel;
//!
//! let config = ParticleConfig::new(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]).with_samples(100);
//! let mut particle = ParticleModel::new(&config).unwrap();
//!
//! particle.compute_trajectory().unwrap();
//! assert_eq!(particle.trajectory().len(), 100);
//! ```

use log::info;
use nalgebra::Vector3;

use crate::config::ParticleConfig;
use crate::error::{MhdError, Result};
use crate::models::{drift, DriftParameters, LorentzForce, LorentzParameters};
use crate::physics::{FieldVector, PhysicalState};
use crate::solver::{GuidingCenterSolver, RK4Solver, Scenario, Solver, SolverType, TimeGrid, Trajectory};

/// One charged particle, its configuration and its trajectory
///
/// Concurrent `compute_trajectory` calls on the same instance must be
/// serialized by the caller (`&mut self` enforces it in safe code). Distinct
/// instances share nothing and can be computed in parallel, see
/// [`compute_all`](crate::models::batch::compute_all).
#[derive(Debug, Clone)]
pub struct ParticleModel {
    // ==================== Physical Parameters ====================
    /// Charge q
    charge: f64,
    /// Mass m
    mass: f64,
    /// Magnetic field B
    magnetic: FieldVector,
    /// Electric field E
    electric: FieldVector,
    /// Initial state for the numeric solver
    initial: PhysicalState,
    /// Initial speed along B for the analytic solver
    parallel_speed: f64,

    // ==================== Sampling ====================
    grid: TimeGrid,
    method: SolverType,

    // ==================== Derived Quantities ====================
    /// ‖E‖
    electric_magnitude: f64,
    /// ‖B‖
    magnetic_magnitude: f64,
    /// vD, `None` when ‖B‖ is zero
    drift_speed: Option<f64>,
    /// w, `None` when m is zero
    cyclotron_frequency: Option<f64>,
    /// Drift decomposition, `None` when it divides by zero
    drift: Option<DriftParameters>,

    trajectory: Trajectory,
}

fn vector3(field: &str, values: &[f64]) -> Result<Vector3<f64>> {
    Ok(*FieldVector::from_slice(field, values)?.as_vector())
}

fn finite_scalar(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MhdError::invalid(field, format!("must be finite, got {}", value)))
    }
}

impl ParticleModel {
    /// Validate a configuration and build the model
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the first offending field, in order:
    /// `magnetic_field`, `electric_field`, `interval`, `samples`,
    /// `initial_velocity`, `initial_position`, `charge`, `mass`.
    ///
    /// A zero B, q or m is accepted here; only the quantities that divide by
    /// them fail, when requested.
    pub fn new(config: &ParticleConfig) -> Result<Self> {
        let magnetic = FieldVector::from_slice("magnetic_field", &config.magnetic_field)?;
        let electric = FieldVector::from_slice("electric_field", &config.electric_field)?;

        let grid = TimeGrid::from_interval(&config.interval, config.samples).map_err(|error| match error {
            MhdError::InvalidGridSize(n) => {
                MhdError::invalid("samples", format!("at least 2 samples required, got {}", n))
            }
            other => other,
        })?;

        let velocity = vector3("initial_velocity", &config.initial_velocity)?;
        let position = vector3("initial_position", &config.initial_position)?;
        let charge = finite_scalar("charge", config.charge)?;
        let mass = finite_scalar("mass", config.mass)?;
        let parallel_speed = finite_scalar("parallel_speed", config.parallel_speed)?;

        let electric_magnitude = electric.magnitude();
        let magnetic_magnitude = magnetic.magnitude();
        let drift_speed = drift::drift_speed(electric_magnitude, magnetic_magnitude).ok();
        let cyclotron_frequency = drift::cyclotron_frequency(charge, magnetic_magnitude, mass).ok();
        let drift = DriftParameters::new(charge, mass, &electric, &magnetic, parallel_speed).ok();

        Ok(Self {
            charge,
            mass,
            magnetic,
            electric,
            initial: PhysicalState::new(position, velocity),
            parallel_speed,
            grid,
            method: config.method,
            electric_magnitude,
            magnetic_magnitude,
            drift_speed,
            cyclotron_frequency,
            drift,
            trajectory: Trajectory::zeroed(&grid),
        })
    }

    /// Build with default parameters and the given fields
    pub fn from_fields(magnetic_field: &[f64], electric_field: &[f64]) -> Result<Self> {
        Self::new(&ParticleConfig::new(magnetic_field, electric_field))
    }

    // ==================== Trajectory ====================

    /// Recompute the trajectory with the configured method
    pub fn compute_trajectory(&mut self) -> Result<&Trajectory> {
        self.compute_trajectory_with(self.method)
    }

    /// Recompute the trajectory with an explicit method
    ///
    /// All samples from t0 to t1 are rebuilt. On error the previous
    /// trajectory is left untouched.
    pub fn compute_trajectory_with(&mut self, method: SolverType) -> Result<&Trajectory> {
        info!(
            "Computing trajectory with {} over [{}, {}] ({} samples)",
            method,
            self.grid.start(),
            self.grid.end(),
            self.grid.samples()
        );

        let trajectory = match method {
            SolverType::RungeKutta4 => {
                let model = LorentzForce::new(self.lorentz_parameters())?;
                let scenario = Scenario::new(Box::new(model), self.initial);
                RK4Solver::new().solve(&scenario, &self.grid)?
            }
            SolverType::GuidingCenter => {
                GuidingCenterSolver::new().solve(&self.drift_parameters()?, &self.grid)?
            }
        };

        self.trajectory = trajectory;
        Ok(&self.trajectory)
    }

    /// Current trajectory, zero-filled until a solver has run
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    // ==================== Parameters ====================

    pub fn lorentz_parameters(&self) -> LorentzParameters {
        LorentzParameters::new(self.charge, self.mass, self.electric, self.magnetic)
    }

    /// Drift decomposition for the analytic solver
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when ‖B‖, q or m is zero.
    pub fn drift_parameters(&self) -> Result<DriftParameters> {
        match self.drift {
            Some(drift) => Ok(drift),
            None => DriftParameters::new(
                self.charge,
                self.mass,
                &self.electric,
                &self.magnetic,
                self.parallel_speed,
            ),
        }
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn magnetic_field(&self) -> &FieldVector {
        &self.magnetic
    }

    pub fn electric_field(&self) -> &FieldVector {
        &self.electric
    }

    pub fn initial_state(&self) -> &PhysicalState {
        &self.initial
    }

    pub fn parallel_speed(&self) -> f64 {
        self.parallel_speed
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn method(&self) -> SolverType {
        self.method
    }

    // ==================== Derived Quantities ====================

    /// mE = ‖E‖
    pub fn electric_magnitude(&self) -> f64 {
        self.electric_magnitude
    }

    /// mB = ‖B‖
    pub fn magnetic_magnitude(&self) -> f64 {
        self.magnetic_magnitude
    }

    /// vD = mE / mB, computed at construction
    pub fn drift_speed(&self) -> Result<f64> {
        match self.drift_speed {
            Some(speed) => Ok(speed),
            None => drift::drift_speed(self.electric_magnitude, self.magnetic_magnitude),
        }
    }

    /// w = q·mB / m, computed at construction
    pub fn cyclotron_frequency(&self) -> Result<f64> {
        match self.cyclotron_frequency {
            Some(frequency) => Ok(frequency),
            None => drift::cyclotron_frequency(self.charge, self.magnetic_magnitude, self.mass),
        }
    }

    /// r = m·vD / (q·mB)
    pub fn drift_radius(&self) -> Result<f64> {
        Ok(self.drift_parameters()?.drift_radius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn crossed() -> ParticleConfig {
        ParticleConfig::new(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0])
    }

    #[test]
    fn test_construction_derives_quantities() {
        let particle = ParticleModel::new(&crossed()).unwrap();

        assert_eq!(particle.magnetic_magnitude(), 1.0);
        assert_eq!(particle.electric_magnitude(), 1.0);
        assert_eq!(particle.drift_speed().unwrap(), 1.0);
        assert_relative_eq!(particle.cyclotron_frequency().unwrap(), 1.6e-19 / 9.11e-22);
        assert_relative_eq!(
            particle.drift_radius().unwrap() * particle.cyclotron_frequency().unwrap(),
            1.0,
            max_relative = 1e-12
        );
        assert!(!particle.trajectory().is_computed());
        assert_eq!(particle.trajectory().len(), 1000);
    }

    #[test]
    fn test_derived_quantities_cached_independently() {
        // B = 0: vD undefined, w = 0 still defined
        let no_field = ParticleConfig::new(&[0.0; 3], &[0.0, 0.0, 1.0]).with_charge(1.0).with_mass(1.0);
        let particle = ParticleModel::new(&no_field).unwrap();
        assert_eq!(particle.drift_speed, None);
        assert_eq!(particle.cyclotron_frequency, Some(0.0));
        assert!(matches!(particle.drift_speed(), Err(MhdError::DivisionByZero { .. })));
        assert_eq!(particle.cyclotron_frequency().unwrap(), 0.0);

        let particle = ParticleModel::new(&crossed().with_fields(&[0.0, 0.0, -1.0], &[0.0, -0.5, 0.0])).unwrap();
        let drift = particle.drift_parameters().unwrap();
        assert_eq!(particle.drift_speed, Some(drift.drift_speed()));
        assert_eq!(particle.cyclotron_frequency, Some(drift.cyclotron_frequency()));
        assert_eq!(particle.drift_speed().unwrap(), 0.5);
    }

    #[test]
    fn test_validation_order_and_fields() {
        let cases = [
            (crossed().with_fields(&[0.0, 1.0], &[0.0, 0.0, 1.0]), "magnetic_field"),
            (crossed().with_fields(&[0.0, 1.0, 0.0], &[1.0; 4]), "electric_field"),
            (ParticleConfig { interval: vec![0.0], ..crossed() }, "interval"),
            (crossed().with_interval(1.0, 0.0), "interval"),
            (crossed().with_samples(1), "samples"),
            (crossed().with_initial_velocity(&[0.0, 0.0]), "initial_velocity"),
            (crossed().with_initial_position(&[]), "initial_position"),
            (crossed().with_charge(f64::NAN), "charge"),
            (crossed().with_mass(f64::INFINITY), "mass"),
        ];

        for (config, field) in cases {
            let error = ParticleModel::new(&config).unwrap_err();
            assert_eq!(error.field(), Some(field), "{:?}", error);
        }
    }

    #[test]
    fn test_equal_endpoints_are_legal() {
        let config = crossed().with_interval(0.5, 0.5).with_samples(4);
        let mut particle = ParticleModel::new(&config).unwrap();

        let trajectory = particle.compute_trajectory().unwrap();
        assert!(trajectory.x().iter().all(|x| *x == 0.0));
        assert_eq!(trajectory.time_points(), &[0.5; 4]);
    }

    #[test]
    fn test_zero_magnetic_field_only_fails_drift() {
        let config = ParticleConfig::new(&[0.0; 3], &[0.0; 3])
            .with_charge(1.0)
            .with_mass(1.0)
            .with_initial_velocity(&[1.0, 2.0, 3.0])
            .with_samples(11);
        let mut particle = ParticleModel::new(&config).unwrap();

        assert!(matches!(particle.drift_speed(), Err(MhdError::DivisionByZero { .. })));
        assert!(matches!(particle.drift_radius(), Err(MhdError::DivisionByZero { .. })));
        assert!(matches!(
            particle.compute_trajectory_with(SolverType::GuidingCenter),
            Err(MhdError::DivisionByZero { .. })
        ));

        let trajectory = particle.compute_trajectory().unwrap();
        assert_relative_eq!(trajectory.z()[10], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_mass_fails_numeric_path() {
        let config = crossed().with_mass(0.0).with_samples(10);
        let mut particle = ParticleModel::new(&config).unwrap();

        assert!(matches!(particle.cyclotron_frequency(), Err(MhdError::DivisionByZero { .. })));
        assert!(matches!(particle.compute_trajectory(), Err(MhdError::DivisionByZero { .. })));
        assert!(!particle.trajectory().is_computed());
    }

    #[test]
    fn test_failed_compute_keeps_previous_trajectory() {
        let config = ParticleConfig::new(&[0.0; 3], &[0.0, 0.0, 1.0]).with_samples(5);
        let mut particle = ParticleModel::new(&config).unwrap();

        let before = particle.compute_trajectory().unwrap().clone();
        assert!(particle.compute_trajectory_with(SolverType::GuidingCenter).is_err());
        assert_eq!(particle.trajectory(), &before);
    }

    #[test]
    fn test_method_dispatch() {
        let mut particle = ParticleModel::new(&crossed().with_samples(20)).unwrap();

        let numeric = particle.compute_trajectory().unwrap().clone();
        assert!(numeric.velocity().is_some());

        let analytic = particle.compute_trajectory_with(SolverType::GuidingCenter).unwrap();
        assert!(analytic.velocity().is_none());
        assert_eq!(analytic.get_metadata("solver"), Some("Guiding center (analytic)"));
    }

    #[test]
    fn test_from_fields() {
        let particle = ParticleModel::from_fields(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(particle.charge(), 1.6e-19);
        assert_eq!(particle.grid().samples(), 1000);
        assert_eq!(particle.method(), SolverType::RungeKutta4);

        assert!(ParticleModel::from_fields(&[0.0, 1.0], &[0.0, 0.0, 1.0]).is_err());
    }
}
