//! Helper functions for integration tests

use mhd_rs::config::ParticleConfig;

/// Drift speed |E|/|B| of [`crossed_field_config`]
pub const CROSSED_DRIFT_SPEED: f64 = 0.5;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Largest pointwise |a - b| over two series of equal length
pub fn max_abs_difference(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Series length mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Unit charge and mass in B = -ẑ, E = -0.5 ŷ (w = 1, vD = 0.5)
///
/// Starts on the analytic curve at t = 0: x₀ = (vD, 0, 0), v₀ = (vD, vD·w, 0),
/// so the numeric and guiding-center trajectories agree in the xy plane.
pub fn crossed_field_config(samples: usize) -> ParticleConfig {
    let vd = CROSSED_DRIFT_SPEED;
    ParticleConfig::new(&[0.0, 0.0, -1.0], &[0.0, -0.5, 0.0])
        .with_charge(1.0)
        .with_mass(1.0)
        .with_interval(0.0, 10.0)
        .with_samples(samples)
        .with_initial_position(&[vd, 0.0, 0.0])
        .with_initial_velocity(&[vd, vd, 0.0])
}

/// Unit charge and mass gyrating in B = ẑ with speed `speed` along x
pub fn cyclotron_config(speed: f64, end: f64, samples: usize) -> ParticleConfig {
    ParticleConfig::new(&[0.0, 0.0, 1.0], &[0.0, 0.0, 0.0])
        .with_charge(1.0)
        .with_mass(1.0)
        .with_interval(0.0, end)
        .with_samples(samples)
        .with_initial_velocity(&[speed, 0.0, 0.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_max_abs_difference() {
        assert_eq!(max_abs_difference(&[1.0, 2.0], &[1.5, 1.0]), 1.0);
    }
}
