//! Headless frame runner
//!
//! Builds the hypercube tables, runs the configured number of frames through
//! the rotate-and-project pipeline, and logs per-frame statistics. A
//! renderer would consume the same positions every display refresh.

use std::error::Error;
use std::io::Write;

use tesseract_core::{TesseractEngine, Wireframe4D};
use tesseract_math::Projector;

use crate::config::AppConfig;
use crate::systems::SimulationSystem;

fn init_logging(level: &str) {
    // RUST_LOG wins over the configured level; a second init is a no-op
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .parse_default_env()
        .try_init();
}

/// Run the configured frames, writing the final frame dump to `out`
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<(), Box<dyn Error>> {
    let projector = Projector::new(config.geometry.light_distance)?;
    let engine = TesseractEngine::initialize(config.geometry.vertex_count)?
        .with_projector(projector);

    let shape = engine.shape();
    if let Some(cell) = shape.boundary_cell() {
        log::debug!(
            "Boundary cell: {} vertices, {} triangles",
            cell.labels.len(),
            cell.triangles.len()
        );
    }

    let driver = config.animation.to_driver();
    log::info!(
        "Running {} frames at {} fps ({:?} mode)",
        config.run.frames,
        config.run.fps,
        driver.mode()
    );

    let mut sim = SimulationSystem::new(engine, driver, config.run.fps);
    let mut slowest = std::time::Duration::ZERO;
    for _ in 0..config.run.frames {
        let result = sim.update()?;
        slowest = slowest.max(result.compute_time);
        log::debug!(
            "Frame {} t={:.3}s angles=({:.3}, {:.3}, {:.3}) max_radius={:.4}",
            result.frame,
            result.time,
            result.angles.xw,
            result.angles.yw,
            result.angles.zw,
            result.max_radius
        );
    }
    log::info!("Done; slowest frame took {:?}", slowest);

    if config.run.print_final_frame && config.run.frames > 0 {
        for (label, p) in sim.positions().iter().enumerate() {
            writeln!(out, "v {:2} {:>10.6} {:>10.6} {:>10.6}", label, p.x, p.y, p.z)?;
        }
        for edge in shape.edges() {
            writeln!(out, "e {:2} {:2} {}", edge.a, edge.b, edge.color_class.index())?;
        }
    }

    Ok(())
}

/// Load configuration and run
///
/// An invalid configuration is returned as an error; there is no fallback
/// to the built-in defaults.
pub fn launch<W: Write>(out: &mut W) -> Result<(), Box<dyn Error>> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            return Err(e.into());
        }
    };

    init_logging(&config.debug.log_level);
    log::info!("Starting tesseract");
    run(&config, out)
}
