//! Shapely Render - Headless Scene Renderer
//!
//! Loads a JSON scene (polygon, camera, transform controls, viewport), runs
//! it through the editor session and writes the resulting frame as a PNG.
//!
//! Run with: `cargo run --bin shapely_render -- scene.json out.png [--hardware]`
//!
//! Set `SHAPELY_LOG=debug` for per-recompute logging.

use std::path::PathBuf;
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};
use shapely_engine::editor::{SceneError, SceneFile, render_frame};
use shapely_engine::renderer::RenderMode;

// ============================================================================
// LOGGING
// ============================================================================

/// Minimal stderr sink for the `log` facade.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = match std::env::var("SHAPELY_LOG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("info") => LevelFilter::Info,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// ============================================================================
// MAIN
// ============================================================================

struct Args {
    scene: PathBuf,
    output: PathBuf,
    hardware: bool,
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut hardware = false;
    for arg in std::env::args().skip(1) {
        if arg == "--hardware" {
            hardware = true;
        } else {
            positional.push(PathBuf::from(arg));
        }
    }
    let mut positional = positional.into_iter();
    let scene = positional.next()?;
    let output = positional.next()?;
    Some(Args {
        scene,
        output,
        hardware,
    })
}

fn run(args: &Args) -> Result<(), SceneError> {
    let scene = SceneFile::load(&args.scene)?;
    let name = scene.model.name.clone();
    let mut session = scene.into_session();
    if args.hardware {
        session.set_render_mode(RenderMode::Hardware);
    }

    let surface = render_frame(&mut session)?;
    surface.save_png(&args.output)?;

    println!(
        "[shapely_render] '{}': {} vertices, {} ({} rasterization) -> {}",
        name,
        session.model().polygon.len(),
        if session.renderer().is_fillable() { "filled" } else { "outline only" },
        session.renderer().mode(),
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let Some(args) = parse_args() else {
        eprintln!("usage: shapely_render <scene.json> <out.png> [--hardware]");
        return ExitCode::from(2);
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[shapely_render] {e}");
            ExitCode::FAILURE
        }
    }
}
