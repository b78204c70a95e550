//! Output of computed trajectories
//!
//! Consumers of the position / velocity arrays produced by the solvers:
//! - **Visualization**: SVG/PNG plots and GIF animations using plotters
//! - **Export**: `.mhd` audit log and CSV for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and animations
//! │   ├── config.rs
//! │   ├── projection.rs
//! │   ├── static_plots.rs
//! │   └── animation.rs
//! └── export/             ← Data export
//!     ├── mhd.rs
//!     └── csv.rs
//! ```
//!
//! Every entry point checks that the trajectory was computed before reading it.
//!
//! # Examples
//!
//! See `demos/crossed_fields.rs` for the complete pipeline.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{CsvConfig, CsvExporter, Exporter, MhdConfig, MhdExporter};
pub use visualization::{animate_projection, plot_trajectory, PlotConfig};
