//! `.mhd` trajectory log
//!
//! A plain-text audit log, appended to on every export call:
//!
//! ```text
//! %%C  16/10/2026 14:05
//! 0.0  ||  0.0  ||  0.0
//! 0.001  ||  -2.5  ||  0.125
//! ```
//!
//! One header line per export (`%%C` then the local date and time), then one
//! line per sample with the X, Y and Z positions. Values use Rust's shortest
//! round-trip float representation. The tabbed variant replaces every run of
//! two spaces with a tab. The file name always ends in `.mhd`.

use chrono::{Local, NaiveDateTime};
use log::debug;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MhdError, Result};
use crate::output::export::Exporter;
use crate::solver::Trajectory;

/// File extension of trajectory logs
pub const MHD_EXTENSION: &str = "mhd";

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Separator layout of a `.mhd` file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MhdDelimiter {
    /// `X  ||  Y  ||  Z`
    #[default]
    Spaced,
    /// `X\t||\tY\t||\tZ`
    Tabbed,
}

impl MhdDelimiter {
    fn header_separator(&self) -> &'static str {
        match self {
            MhdDelimiter::Spaced => "  ",
            MhdDelimiter::Tabbed => "\t",
        }
    }

    /// Separator between two values of a data line
    pub fn separator(&self) -> &'static str {
        match self {
            MhdDelimiter::Spaced => "  ||  ",
            MhdDelimiter::Tabbed => "\t||\t",
        }
    }
}

/// Configuration for `.mhd` export
#[derive(Debug, Clone, Copy, Default)]
pub struct MhdConfig {
    pub delimiter: MhdDelimiter,
}

impl MhdConfig {
    pub fn tabbed() -> Self {
        Self {
            delimiter: MhdDelimiter::Tabbed,
        }
    }
}

/// Appends trajectories to `.mhd` logs
#[derive(Debug, Clone, Default)]
pub struct MhdExporter {
    config: MhdConfig,
}

/// `path` with `.mhd` appended, unless it already ends with it
pub fn with_mhd_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == MHD_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(MHD_EXTENSION);
    PathBuf::from(name)
}

impl MhdExporter {
    pub fn new(config: MhdConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MhdConfig {
        &self.config
    }

    /// Header line for the given timestamp, without the newline
    pub fn header(&self, timestamp: &NaiveDateTime) -> String {
        format!(
            "%%C{}{}",
            self.config.delimiter.header_separator(),
            timestamp.format(TIMESTAMP_FORMAT)
        )
    }

    /// Append `trajectory` to `<path>.mhd` with an explicit header timestamp
    pub fn export_at(&self, trajectory: &Trajectory, path: &Path, timestamp: NaiveDateTime) -> Result<PathBuf> {
        trajectory.ensure_computed()?;

        let path = with_mhd_extension(path);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", self.header(&timestamp))?;

        let separator = self.config.delimiter.separator();
        for ((x, y), z) in trajectory.x().iter().zip(trajectory.y()).zip(trajectory.z()) {
            writeln!(writer, "{:?}{sep}{:?}{sep}{:?}", x, y, z, sep = separator)?;
        }
        writer.flush()?;

        debug!("Appended {} samples to {}", trajectory.len(), path.display());
        Ok(path)
    }
}

impl Exporter for MhdExporter {
    type Error = MhdError;

    /// Append with the current local time in the header
    fn export(&self, trajectory: &Trajectory, path: &Path) -> Result<PathBuf> {
        self.export_at(trajectory, path, Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::TimeGrid;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    fn trajectory() -> Trajectory {
        Trajectory::from_positions(
            vec![0.0, 0.5, 1.0],
            vec![0.0, 1.5, 3.0],
            vec![0.0, -0.25, 1e-20],
            vec![0.0, 0.0, 2.0],
        )
    }

    #[test]
    fn test_header_formats() {
        let spaced = MhdExporter::default();
        let tabbed = MhdExporter::new(MhdConfig::tabbed());

        assert_eq!(spaced.header(&timestamp()), "%%C  07/03/2024 09:05");
        assert_eq!(tabbed.header(&timestamp()), "%%C\t07/03/2024 09:05");
    }

    #[test]
    fn test_extension_forced() {
        assert_eq!(with_mhd_extension(Path::new("out/run")), PathBuf::from("out/run.mhd"));
        assert_eq!(with_mhd_extension(Path::new("run.mhd")), PathBuf::from("run.mhd"));
        assert_eq!(with_mhd_extension(Path::new("run.txt")), PathBuf::from("run.txt.mhd"));
    }

    #[test]
    fn test_export_content() {
        let dir = tempdir().unwrap();
        let written = MhdExporter::default()
            .export_at(&trajectory(), &dir.path().join("run"), timestamp())
            .unwrap();

        assert_eq!(written, dir.path().join("run.mhd"));
        let content = fs::read_to_string(&written).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(
            lines,
            vec![
                "%%C  07/03/2024 09:05",
                "0.0  ||  0.0  ||  0.0",
                "1.5  ||  -0.25  ||  0.0",
                "3.0  ||  1e-20  ||  2.0",
            ]
        );
    }

    #[test]
    fn test_tabbed_content() {
        let dir = tempdir().unwrap();
        let written = MhdExporter::new(MhdConfig::tabbed())
            .export_at(&trajectory(), &dir.path().join("run"), timestamp())
            .unwrap();

        let content = fs::read_to_string(written).unwrap();
        assert_eq!(content.lines().nth(2), Some("1.5\t||\t-0.25\t||\t0.0"));
    }

    #[test]
    fn test_export_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log");
        let exporter = MhdExporter::default();

        exporter.export_at(&trajectory(), &path, timestamp()).unwrap();
        let written = exporter.export(&trajectory(), &path).unwrap();

        let content = fs::read_to_string(written).unwrap();
        assert_eq!(content.lines().count(), 8);
        assert_eq!(content.lines().filter(|l| l.starts_with("%%C")).count(), 2);
    }

    #[test]
    fn test_uncomputed_trajectory_rejected() {
        let dir = tempdir().unwrap();
        let placeholder = Trajectory::zeroed(&TimeGrid::new(0.0, 1.0, 3).unwrap());

        let result = MhdExporter::default().export(&placeholder, &dir.path().join("run"));

        assert!(matches!(result, Err(MhdError::UncomputedTrajectoryAccess)));
        assert!(!dir.path().join("run.mhd").exists());
    }
}
