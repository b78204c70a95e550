//! GIF animation of a trajectory projection
//!
//! Each frame draws the trail of the particle from the first sample up to the
//! current one, plus a marker at the current position. Axis limits are fixed
//! for the whole animation to the [`BoundingBox`](super::BoundingBox) of the
//! full trajectory, so the view does not jump between frames.

use log::{debug, warn};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::output::visualization::projection::Plane;
use crate::output::visualization::static_plots::{plane_points, plot_error};
use crate::output::visualization::PlotConfig;
use crate::solver::Trajectory;

/// Last sample index shown in each frame
///
/// At most `max_frames` frames (at least one); the final sample always
/// closes the animation.
pub fn frame_ends(samples: usize, max_frames: usize) -> Vec<usize> {
    let max_frames = max_frames.max(1);
    if samples <= max_frames {
        return (0..samples).collect();
    }
    let last = samples - 1;
    if max_frames == 1 {
        return vec![last];
    }

    // One slot is kept for the final sample
    let stride = last.div_ceil(max_frames - 1);
    let mut ends: Vec<usize> = (0..last).step_by(stride).collect();
    ends.push(last);
    ends
}

/// Animate the trajectory growing in `plane` and write it as a GIF
///
/// The output always gets a `.gif` extension. Frames are spaced by
/// [`PlotConfig::frame_delay_ms`]; trajectories with more samples than
/// [`PlotConfig::max_frames`] are sub-sampled.
///
/// # Errors
///
/// - `UncomputedTrajectoryAccess` before a solver has run
/// - `Plot` when the GIF encoder fails
pub fn animate_projection(
    trajectory: &Trajectory,
    plane: Plane,
    output_path: &Path,
    config: &PlotConfig,
) -> Result<PathBuf> {
    trajectory.ensure_computed()?;

    let path = output_path.with_extension("gif");
    let ends = frame_ends(trajectory.len(), config.max_frames);
    if ends.len() < trajectory.len() {
        warn!(
            "Animation sub-sampled: {} frames for {} samples",
            ends.len(),
            trajectory.len()
        );
    }
    debug!("Animating {} projection to {} ({} frames)", plane, path.display(), ends.len());

    let backend = BitMapBackend::gif(&path, (config.width, config.height), config.frame_delay_ms)
        .map_err(plot_error)?;
    let root = backend.into_drawing_area();

    let points = plane_points(trajectory, plane);
    let bounding_box = super::BoundingBox::new(trajectory, super::Projection::Plane(plane));
    let (h, v) = plane.axes();
    let fallback = super::Bounds { min: -1.0, max: 1.0 };
    let h_range = bounding_box.bounds(h).unwrap_or(fallback).range();
    let v_range = bounding_box.bounds(v).unwrap_or(fallback).range();

    for end in ends {
        root.fill(&config.background).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("sans-serif", 30).into_font())
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(h_range.clone(), v_range.clone())
            .map_err(plot_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(config.label(h)).y_desc(config.label(v));
        if !config.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(plot_error)?;

        chart
            .draw_series(LineSeries::new(
                points[..=end].iter().copied(),
                ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
            ))
            .map_err(plot_error)?;

        chart
            .draw_series(std::iter::once(Circle::new(
                points[end],
                4,
                ShapeStyle::from(&config.line_color).filled(),
            )))
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
    }

    Ok(path)
}
