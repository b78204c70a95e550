//! Plot configuration shared across visualization modules
//!
//! One [`PlotConfig`] drives the projection, 3-D, velocity and animation
//! outputs; the constructors only differ in their default title and labels.

use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust
/// use mhd_rs::output::visualization::{PlotConfig, NO_TITLE};
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::projection("Crossed fields");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
///
/// assert_eq!(PlotConfig::space(NO_TITLE).title, "Trajectory");
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Trajectory")
    pub title: String,

    /// Axis labels, used according to the selected projection
    pub xlabel: String,
    pub ylabel: String,
    pub zlabel: String,

    /// Trajectory line color (default: RED)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Extension appended to output paths that have none (default: "svg")
    pub extension: String,

    /// Delay between animation frames in milliseconds (default: 20)
    pub frame_delay_ms: u32,

    /// Upper bound on animation frames; longer trajectories are sub-sampled (default: 200)
    pub max_frames: usize,

    /// Upper bound on arrows in velocity plots (default: 40)
    pub max_arrows: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Trajectory".to_string(),
            xlabel: "X".to_string(),
            ylabel: "Y".to_string(),
            zlabel: "Z".to_string(),
            line_color: RED,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            extension: "svg".to_string(),
            frame_delay_ms: 20,
            max_frames: 200,
            max_arrows: 40,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    fn titled(title: impl IntoOptionalTitle, default: &str) -> Self {
        Self {
            title: title.into_optional_title().unwrap_or_else(|| default.to_string()),
            ..Self::default()
        }
    }

    /// Config for 2-D projections, default title "Trajectory projection"
    pub fn projection(title: impl IntoOptionalTitle) -> Self {
        Self::titled(title, "Trajectory projection")
    }

    /// Config for 3-D plots, default title "Trajectory"
    pub fn space(title: impl IntoOptionalTitle) -> Self {
        Self::titled(title, "Trajectory")
    }

    /// Config for velocity quiver plots, default title "Velocity field"
    pub fn velocity(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::titled(title, "Velocity field");
        config.line_color = BLUE;
        config
    }

    /// Label of the given axis
    pub(crate) fn label(&self, axis: crate::solver::Axis) -> &str {
        match axis {
            crate::solver::Axis::X => &self.xlabel,
            crate::solver::Axis::Y => &self.ylabel,
            crate::solver::Axis::Z => &self.zlabel,
        }
    }

    /// `path`, with the configured extension added when it has none
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(&self.extension)
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
