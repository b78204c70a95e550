//! Export of computed trajectories
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the file format. Each format is an
//! independent implementation in its own sub-module; adding a format means
//! adding a file.
//!
//! | Format | Module     | Mode     |
//! |--------|------------|----------|
//! | `.mhd` | [`mhd`]    | append   |
//! | CSV    | [`csv`]    | overwrite|
//!
//! Every exporter refuses a trajectory no solver has populated
//! ([`MhdError::UncomputedTrajectoryAccess`](crate::error::MhdError::UncomputedTrajectoryAccess)).
//!
//! # Usage example
//!
//! ```rust,no_run
//! use mhd_rs::config::ParticleConfig;
//! use mhd_rs::models::ParticleModel;
//! use mhd_rs::output::export::{Exporter, MhdExporter};
//! use std::path::Path;
//!
//! let mut particle = ParticleModel::new(&ParticleConfig::new(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]))?;
//! particle.compute_trajectory()?;
//!
//! // Appends to run.mhd
//! let written = MhdExporter::default().export(particle.trajectory(), Path::new("run"))?;
//! assert_eq!(written, Path::new("run.mhd"));
//! # Ok::<(), mhd_rs::error::MhdError>(())
//! ```

pub mod csv;
pub mod mhd;

pub use csv::{CsvConfig, CsvExporter};
pub use mhd::{MhdConfig, MhdDelimiter, MhdExporter};

use std::path::{Path, PathBuf};

use crate::solver::Trajectory;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format declares its own error type, so callers can react to it
/// without boxing.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Write `trajectory` to `path` and return the path actually written
    ///
    /// A format may adjust the path (for example to force its extension).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the trajectory has not been computed
    /// - the path is invalid or the directory does not exist
    fn export(&self, trajectory: &Trajectory, path: &Path) -> Result<PathBuf, Self::Error>;
}
