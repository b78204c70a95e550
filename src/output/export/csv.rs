//! CSV export of computed trajectories
//!
//! Exports the sampled time series to CSV (Comma-Separated Values), readable
//! by spreadsheets, pandas and most data analysis tools.
//!
//! # Features
//!
//! - **Columns**: `t,x,y,z`, plus `vx,vy,vz` when the solver recorded velocities
//! - **Metadata support**: Optional `#` header with the trajectory metadata
//! - **Customizable**: Delimiter, precision
//! - **Validation**: Rejects uncomputed trajectories and NaN / Inf samples
//!
//! **Output** (`orbit.csv`, with metadata):
//! ```text
//! # Charged Particle Trajectory
//! # Generated: 2026-10-16T15:30:00+00:00
//! # samples: 3
//! # solver: Runge Kutta (RK4)
//! #
//! t,x,y,z,vx,vy,vz
//! 0.000000,0.000000,0.000000,0.000000,1.000000,0.000000,0.000000
//! ...
//! ```

use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MhdError, Result};
use crate::output::export::Exporter;
use crate::solver::Trajectory;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use mhd_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default().delimiter(';').precision(10).with_metadata();
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
        }
    }
}

impl CsvConfig {
    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header(writer: &mut impl Write, trajectory: &Trajectory) -> Result<()> {
    writeln!(writer, "# Charged Particle Trajectory")?;

    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    for (key, value) in trajectory.metadata() {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")?;
    Ok(())
}

fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

fn validate(trajectory: &Trajectory) -> Result<()> {
    trajectory.ensure_computed()?;

    if trajectory.is_empty() {
        return Err(MhdError::invalid("trajectory", "no samples to export"));
    }
    if !trajectory.is_finite() || trajectory.time_points().iter().any(|t| !t.is_finite()) {
        return Err(MhdError::invalid("trajectory", "NaN or Inf detected in samples"));
    }
    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// Writes trajectories as CSV, overwriting the target file
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Column names for `trajectory`
    pub fn headers(trajectory: &Trajectory) -> Vec<&'static str> {
        let mut headers = vec!["t", "x", "y", "z"];
        if trajectory.velocity().is_some() {
            headers.extend(["vx", "vy", "vz"]);
        }
        headers
    }
}

impl Exporter for CsvExporter {
    type Error = MhdError;

    fn export(&self, trajectory: &Trajectory, path: &Path) -> Result<PathBuf> {
        // ============================= Validation =============================

        validate(trajectory)?;

        // ============================= Open File ==============================

        let mut writer = BufWriter::new(File::create(path)?);
        let config = &self.config;
        let delimiter = config.delimiter.to_string();

        // ============================= Write Metadata =========================

        if config.include_metadata {
            write_metadata_header(&mut writer, trajectory)?;
        }

        // ============================= Write Header ===========================

        writeln!(writer, "{}", Self::headers(trajectory).join(&delimiter))?;

        // ============================= Write Data =============================

        for i in 0..trajectory.len() {
            let mut row = vec![
                trajectory.time_points()[i],
                trajectory.x()[i],
                trajectory.y()[i],
                trajectory.z()[i],
            ];
            if let Some(velocity) = trajectory.velocity() {
                row.extend([velocity.vx[i], velocity.vy[i], velocity.vz[i]]);
            }

            let cells: Vec<String> = row.iter().map(|v| format_number(*v, config)).collect();
            writeln!(writer, "{}", cells.join(&delimiter))?;
        }
        writer.flush()?;

        debug!("Wrote {} CSV rows to {}", trajectory.len(), path.display());
        Ok(path.to_path_buf())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PhysicalState;
    use crate::solver::TimeGrid;
    use std::fs;
    use tempfile::NamedTempFile;

    fn positions_only() -> Trajectory {
        Trajectory::from_positions(
            vec![0.0, 1.0],
            vec![0.5, 1.5],
            vec![0.0, -1.0],
            vec![2.0, 2.0],
        )
    }

    fn with_velocity() -> Trajectory {
        let states = [
            PhysicalState::from_components([0.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
            PhysicalState::from_components([1.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
        ];
        let mut trajectory = Trajectory::from_states(vec![0.0, 1.0], &states);
        trajectory.add_metadata("solver", "Runge Kutta (RK4)");
        trajectory
    }

    #[test]
    fn test_basic_export() {
        let file = NamedTempFile::new().unwrap();
        let exporter = CsvExporter::new(CsvConfig::default().precision(2));

        exporter.export(&positions_only(), file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["t,x,y,z", "0.00,0.50,0.00,2.00", "1.00,1.50,-1.00,2.00"]);
    }

    #[test]
    fn test_velocity_columns() {
        let file = NamedTempFile::new().unwrap();
        CsvExporter::new(CsvConfig::default().delimiter(';').precision(1))
            .export(&with_velocity(), file.path())
            .unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.lines().next(), Some("t;x;y;z;vx;vy;vz"));
        assert_eq!(content.lines().nth(2), Some("1.0;1.0;0.0;0.0;1.0;0.0;0.0"));
    }

    #[test]
    fn test_metadata_header() {
        let file = NamedTempFile::new().unwrap();
        CsvExporter::new(CsvConfig::default().with_metadata())
            .export(&with_velocity(), file.path())
            .unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("# Charged Particle Trajectory"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# solver: Runge Kutta (RK4)"));
        assert_eq!(content.lines().filter(|l| !l.starts_with('#')).count(), 3);
    }

    #[test]
    fn test_rejects_nan() {
        let file = NamedTempFile::new().unwrap();
        let trajectory = Trajectory::from_positions(
            vec![0.0, 1.0],
            vec![0.0, f64::NAN],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
        );

        let result = CsvExporter::default().export(&trajectory, file.path());
        assert_eq!(result.unwrap_err().field(), Some("trajectory"));
    }

    #[test]
    fn test_rejects_uncomputed() {
        let file = NamedTempFile::new().unwrap();
        let placeholder = Trajectory::zeroed(&TimeGrid::new(0.0, 1.0, 4).unwrap());

        let result = CsvExporter::default().export(&placeholder, file.path());
        assert!(matches!(result, Err(MhdError::UncomputedTrajectoryAccess)));
    }
}
