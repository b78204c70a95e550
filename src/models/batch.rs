//! Batch trajectory computation
//!
//! Independent particles share no state, so each one is a natural unit of
//! parallel work. With the `parallel` feature the batch is spread over the
//! rayon thread pool; without it, particles are computed in order.

use log::debug;

use crate::error::Result;
use crate::models::ParticleModel;

/// Recompute the trajectory of every particle with its configured method
///
/// Stops at the first failure. Particles computed before the failure keep
/// their new trajectory; the failing one keeps its previous trajectory.
///
/// # Example
///
/// ```rust
/// use mhd_rs::config::ParticleConfig;
/// use mhd_rs::models::{batch, ParticleModel};
///
/// let mut particles: Vec<ParticleModel> = (1..=3)
///     .map(|k| {
///         let config = ParticleConfig::new(&[0.0, 0.0, k as f64], &[0.0; 3])
///             .with_initial_velocity(&[1.0, 0.0, 0.0])
///             .with_samples(50);
///         ParticleModel::new(&config).unwrap()
///     })
///     .collect();
///
/// batch::compute_all(&mut particles).unwrap();
/// assert!(particles.iter().all(|p| p.trajectory().is_computed()));
/// ```
pub fn compute_all(particles: &mut [ParticleModel]) -> Result<()> {
    debug!("Batch: computing {} trajectories", particles.len());

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        particles
            .par_iter_mut()
            .try_for_each(|particle| particle.compute_trajectory().map(|_| ()))
    }

    #[cfg(not(feature = "parallel"))]
    {
        particles
            .iter_mut()
            .try_for_each(|particle| particle.compute_trajectory().map(|_| ()))
    }
}
