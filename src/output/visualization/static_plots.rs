//! Static trajectory plots
//!
//! Uses `plotters` to render a computed trajectory to an image file. The
//! backend is picked from the output extension: `.svg` renders through
//! `SVGBackend`, anything else through `BitMapBackend`. Paths without an
//! extension get [`PlotConfig::extension`].
//!
//! - [`plot_projection`]: positions in one plane (xy, xz or yz)
//! - [`plot_space`]: 3-D line, Z vertical
//! - [`plot_velocity`]: quiver plot of the velocity projected on a plane
//! - [`plot_trajectory`]: dispatch on a selector string
//!
//! # Example
//!
//! ```rust,no_run
//! use mhd_rs::config::ParticleConfig;
//! use mhd_rs::models::ParticleModel;
//! use mhd_rs::output::visualization::{plot_trajectory, PlotConfig, NO_TITLE};
//! use std::path::Path;
//!
//! let mut particle = ParticleModel::new(&ParticleConfig::new(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]))?;
//! particle.compute_trajectory()?;
//!
//! plot_trajectory(particle.trajectory(), "xz", Path::new("orbit_xz"), &PlotConfig::projection(NO_TITLE))?;
//! plot_trajectory(particle.trajectory(), "xyz", Path::new("orbit.png"), &PlotConfig::space(NO_TITLE))?;
//! # Ok::<(), mhd_rs::error::MhdError>(())
//! ```

use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::{MhdError, Result};
use crate::output::visualization::projection::{Bounds, BoundingBox, Plane, Projection};
use crate::output::visualization::PlotConfig;
use crate::solver::{Axis, Trajectory};

/// Convert a plotters error into [`MhdError::Plot`]
pub(crate) fn plot_error<E: std::error::Error>(error: E) -> MhdError {
    MhdError::Plot(error.to_string())
}

pub(crate) fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Render `draw` on the backend matching the extension of `path`
macro_rules! with_backend {
    ($path:expr, $config:expr, |$root:ident| $draw:expr) => {{
        let size = ($config.width, $config.height);
        if is_svg($path) {
            let $root = SVGBackend::new($path, size).into_drawing_area();
            $draw
        } else {
            let $root = BitMapBackend::new($path, size).into_drawing_area();
            $draw
        }
    }};
}

// =================================================================================================
// Public Entry Points
// =================================================================================================

/// Plot `trajectory` in the view named by `selector` ("xy", "xz", "yz" or "xyz")
///
/// # Errors
///
/// - `InvalidAxisSelector` for any other selector
/// - `UncomputedTrajectoryAccess` before a solver has run
pub fn plot_trajectory(
    trajectory: &Trajectory,
    selector: &str,
    output_path: &Path,
    config: &PlotConfig,
) -> Result<PathBuf> {
    match selector.parse::<Projection>()? {
        Projection::Plane(plane) => plot_projection(trajectory, plane, output_path, config),
        Projection::Space => plot_space(trajectory, output_path, config),
    }
}

/// 2-D plot of the positions in `plane`
pub fn plot_projection(
    trajectory: &Trajectory,
    plane: Plane,
    output_path: &Path,
    config: &PlotConfig,
) -> Result<PathBuf> {
    trajectory.ensure_computed()?;

    let path = config.resolve_path(output_path);
    debug!("Plotting {} projection to {}", plane, path.display());

    with_backend!(&path, config, |root| draw_projection(&root, trajectory, plane, config))?;
    Ok(path)
}

/// 3-D line plot of the positions, Z vertical
pub fn plot_space(trajectory: &Trajectory, output_path: &Path, config: &PlotConfig) -> Result<PathBuf> {
    trajectory.ensure_computed()?;

    let path = config.resolve_path(output_path);
    debug!("Plotting 3-D trajectory to {}", path.display());

    with_backend!(&path, config, |root| draw_space(&root, trajectory, config))?;
    Ok(path)
}

/// Quiver plot: velocity arrows projected on `plane`, drawn at evenly spaced samples
///
/// At most [`PlotConfig::max_arrows`] arrows are drawn.
///
/// # Errors
///
/// `InvalidParameter("velocity")` when the trajectory has no velocity series
/// (guiding-center trajectories record positions only).
pub fn plot_velocity(
    trajectory: &Trajectory,
    plane: Plane,
    output_path: &Path,
    config: &PlotConfig,
) -> Result<PathBuf> {
    trajectory.ensure_computed()?;
    if trajectory.velocity().is_none() {
        return Err(MhdError::invalid(
            "velocity",
            "trajectory has no velocity samples; use the rk4 solver",
        ));
    }

    let path = config.resolve_path(output_path);
    debug!("Plotting {} velocity field to {}", plane, path.display());

    with_backend!(&path, config, |root| draw_velocity(&root, trajectory, plane, config))?;
    Ok(path)
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Series of `trajectory` along the two axes of `plane`
pub(crate) fn plane_points(trajectory: &Trajectory, plane: Plane) -> Vec<(f64, f64)> {
    let (h, v) = plane.axes();
    trajectory
        .axis(h)
        .iter()
        .zip(trajectory.axis(v))
        .map(|(a, b)| (*a, *b))
        .collect()
}

fn plane_bounds(trajectory: &Trajectory, plane: Plane) -> (Bounds, Bounds) {
    let bounding_box = BoundingBox::new(trajectory, Projection::Plane(plane));
    let (h, v) = plane.axes();
    let fallback = Bounds { min: -1.0, max: 1.0 };
    (
        bounding_box.bounds(h).unwrap_or(fallback),
        bounding_box.bounds(v).unwrap_or(fallback),
    )
}

fn draw_projection<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    plane: Plane,
    config: &PlotConfig,
) -> Result<()> {
    let (h_bounds, v_bounds) = plane_bounds(trajectory, plane);
    let (h, v) = plane.axes();

    root.fill(&config.background).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 30).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(h_bounds.range(), v_bounds.range())
        .map_err(plot_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.label(h)).y_desc(config.label(v));
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            plane_points(trajectory, plane),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn draw_space<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    config: &PlotConfig,
) -> Result<()> {
    let bounding_box = BoundingBox::new(trajectory, Projection::Space);
    let fallback = Bounds { min: -1.0, max: 1.0 };
    let x = bounding_box.bounds(Axis::X).unwrap_or(fallback);
    let y = bounding_box.bounds(Axis::Y).unwrap_or(fallback);
    let z = bounding_box.bounds(Axis::Z).unwrap_or(fallback);

    root.fill(&config.background).map_err(plot_error)?;

    // plotters' second 3-D coordinate is the vertical one: map (x, y, z) -> (x, z, y)
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 30).into_font())
        .margin(20)
        .build_cartesian_3d(x.range(), z.range(), y.range())
        .map_err(plot_error)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.3;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    let mut axes = chart.configure_axes();
    if config.show_grid {
        axes.light_grid_style(BLACK.mix(0.1));
    } else {
        axes.light_grid_style(TRANSPARENT);
    }
    axes.draw().map_err(plot_error)?;

    let points = (0..trajectory.len()).map(|i| {
        let p = trajectory.position(i);
        (p.x, p.z, p.y)
    });
    chart
        .draw_series(LineSeries::new(
            points,
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

/// Evenly spaced sample indices, at most `max_count`, first sample included
pub(crate) fn strided_indices(len: usize, max_count: usize) -> Vec<usize> {
    let stride = len.div_ceil(max_count.max(1)).max(1);
    (0..len).step_by(stride).collect()
}

fn draw_velocity<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    plane: Plane,
    config: &PlotConfig,
) -> Result<()> {
    let Some(velocity) = trajectory.velocity() else {
        return Ok(());
    };
    let (h, v) = plane.axes();
    let (vh, vv) = (velocity.component(h), velocity.component(v));
    let (h_bounds, v_bounds) = plane_bounds(trajectory, plane);

    // Longest arrow spans a tenth of the smaller plot dimension
    let max_speed = vh
        .iter()
        .zip(vv)
        .map(|(a, b)| a.hypot(*b))
        .fold(0.0_f64, f64::max);
    let extent = (h_bounds.max - h_bounds.min).min(v_bounds.max - v_bounds.min);
    let scale = if max_speed > 0.0 { 0.1 * extent / max_speed } else { 0.0 };

    root.fill(&config.background).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 30).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(h_bounds.range(), v_bounds.range())
        .map_err(plot_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.label(h)).y_desc(config.label(v));
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(plot_error)?;

    // Faint trajectory underneath the arrows
    chart
        .draw_series(LineSeries::new(
            plane_points(trajectory, plane),
            ShapeStyle::from(&BLACK.mix(0.2)).stroke_width(1),
        ))
        .map_err(plot_error)?;

    let style = ShapeStyle::from(&config.line_color).stroke_width(config.line_width);
    let positions = plane_points(trajectory, plane);

    for i in strided_indices(trajectory.len(), config.max_arrows) {
        let (x0, y0) = positions[i];
        let (dx, dy) = (vh[i] * scale, vv[i] * scale);
        if dx == 0.0 && dy == 0.0 {
            continue;
        }
        let tip = (x0 + dx, y0 + dy);

        // Head: two strokes at ±25° from the reversed shaft, 30% of its length
        let (sin, cos) = 25.0_f64.to_radians().sin_cos();
        let (bx, by) = (-dx * 0.3, -dy * 0.3);
        let left = (tip.0 + bx * cos - by * sin, tip.1 + bx * sin + by * cos);
        let right = (tip.0 + bx * cos + by * sin, tip.1 - bx * sin + by * cos);

        chart
            .draw_series([
                PathElement::new(vec![(x0, y0), tip], style),
                PathElement::new(vec![left, tip, right], style),
            ])
            .map_err(plot_error)?;
    }

    root.present().map_err(plot_error)?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
