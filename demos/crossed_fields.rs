//! Example: Charged particle in crossed E and B fields
//!
//! The reference invocation:
//!
//! - B = [0, 1, 0] T, E = [0, 0, 1] V/m
//! - q = 1.6e-19 C, m = 9.11e-22 kg (defaults)
//! - t ∈ [0, 1] s, 1000 samples, particle at rest at the origin
//!
//! Integrates with RK4, compares with the guiding-center solution, then
//! exports the trajectory and renders the plots into the system temp dir.
//!
//! Run with `cargo run --example crossed_fields`.

use mhd_rs::{
    config::ParticleConfig,
    models::ParticleModel,
    output::{
        export::{CsvConfig, CsvExporter, Exporter, MhdExporter},
        visualization::{animate_projection, plot_trajectory, plot_velocity, Plane, PlotConfig, NO_TITLE},
    },
    solver::SolverType,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Charged Particle - Crossed Fields");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Physical parameters ======

    let config = ParticleConfig::new(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]);
    let mut particle = ParticleModel::new(&config)?;

    println!("Parameters:");
    println!("  B              : {}", particle.magnetic_field());
    println!("  E              : {}", particle.electric_field());
    println!("  q              : {:e} C", particle.charge());
    println!("  m              : {:e} kg", particle.mass());
    println!("  samples        : {}", particle.grid().samples());
    println!("  h              : {:e} s\n", particle.grid().step());

    println!("Derived quantities:");
    println!("  |E|            : {}", particle.electric_magnitude());
    println!("  |B|            : {}", particle.magnetic_magnitude());
    println!("  vD = |E|/|B|   : {}", particle.drift_speed()?);
    println!("  w  = q|B|/m    : {:.4} rad/s", particle.cyclotron_frequency()?);
    println!("  r  = m vD/(q|B|): {:.6e} m\n", particle.drift_radius()?);

    // ====== Numeric trajectory ======

    let start = Instant::now();
    let numeric = particle.compute_trajectory()?.clone();
    println!("RK4            : ✓ {:.3} ms", start.elapsed().as_secs_f64() * 1e3);

    // ====== Analytic trajectory ======

    let start = Instant::now();
    let analytic = particle.compute_trajectory_with(SolverType::GuidingCenter)?.clone();
    println!("Guiding center : ✓ {:.3} ms\n", start.elapsed().as_secs_f64() * 1e3);

    if let (Some(n), Some(a)) = (numeric.final_position(), analytic.final_position()) {
        println!("Final position:");
        println!("  RK4            : ({:.6}, {:.6}, {:.6})", n.x, n.y, n.z);
        println!("  Guiding center : ({:.6}, {:.6}, {:.6})\n", a.x, a.y, a.z);
    }

    // ====== Output ======

    let out_dir = std::env::temp_dir().join("mhd-rs-demo");
    std::fs::create_dir_all(&out_dir)?;

    let mhd = MhdExporter::default().export(&numeric, &out_dir.join("Posicao3D"))?;
    let csv = CsvExporter::new(CsvConfig::default().with_metadata()).export(&numeric, &out_dir.join("trajectory.csv"))?;

    let mut written = vec![mhd, csv];
    for selector in ["xy", "xz", "yz"] {
        let config = PlotConfig::projection(format!("Projection {}", selector));
        written.push(plot_trajectory(&numeric, selector, &out_dir.join(format!("plot_{}", selector)), &config)?);
    }
    written.push(plot_trajectory(&numeric, "xyz", &out_dir.join("plot_3d"), &PlotConfig::space(NO_TITLE))?);
    written.push(plot_velocity(&numeric, Plane::XZ, &out_dir.join("velocity_xz"), &PlotConfig::velocity(NO_TITLE))?);
    written.push(animate_projection(&numeric, Plane::XZ, &out_dir.join("animation_xz"), &PlotConfig::projection(NO_TITLE))?);

    println!("Files written:");
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}
