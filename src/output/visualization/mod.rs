//! Visualization of computed trajectories
//!
//! This module renders trajectories using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **projection**: Selector parsing (`Projection`, `Plane`) and axis limits (`BoundingBox`)
//! - **static_plots**: 2-D projections, 3-D lines and velocity quivers
//! - **animation**: GIF of the trajectory growing in a plane
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Selector string ("xy", "xz", "yz", "xyz") | `plot_trajectory` |
//! | Path in one plane | `plot_projection` |
//! | Path in space | `plot_space` |
//! | Velocity arrows | `plot_velocity` |
//! | Animated path | `animate_projection` |

pub mod animation;
pub mod config;
pub mod projection;
pub mod static_plots;

pub use animation::animate_projection;
pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use projection::{BoundingBox, Bounds, Plane, Projection};
pub use static_plots::{plot_projection, plot_space, plot_trajectory, plot_velocity};
