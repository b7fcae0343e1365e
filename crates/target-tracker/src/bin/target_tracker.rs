use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use serde::{Deserialize, Serialize};
use target_tracker::{
    AreaFilter, EvaluationResult, Overlay, ParticleMeasurement, TrackerParams, TrackerSession,
};

#[cfg(not(feature = "tracing"))]
use std::str::FromStr;

#[cfg(not(feature = "tracing"))]
use log::{info, warn, LevelFilter};

#[cfg(feature = "tracing")]
use tracing::{info, warn};

#[cfg(feature = "tracing")]
use target_tracker::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use target_tracker::core::init_with_level;

/// Pick the best target among the particles of one frame and report its
/// offset and range.
#[derive(Debug, Parser)]
#[command(name = "target-tracker", version, about)]
struct Cli {
    /// JSON frame: image size, particle list, optional `params`.
    frame: PathBuf,
    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Drop particles covering less than this fraction of the image.
    #[arg(long, value_name = "FRACTION")]
    min_area_fraction: Option<f64>,
    /// Omit annotation geometry from the report.
    #[arg(long)]
    no_overlay: bool,
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins with `tracing`.
    #[arg(long, default_value = "warn")]
    log_level: String,
    /// Emit JSON log lines (with the `tracing` feature).
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Deserialize)]
struct FrameInput {
    image_width: u32,
    image_height: u32,
    #[serde(default)]
    particles: Vec<ParticleMeasurement>,
    #[serde(default)]
    params: TrackerParams,
}

#[derive(Debug, Serialize)]
struct FrameReport {
    frame_path: String,
    result: EvaluationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlay: Option<Overlay>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    {
        init_with_level(LevelFilter::from_str(&cli.log_level)?)?;
        if cli.json_logs {
            warn!("--json-logs requires the `tracing` feature, using plain logs");
        }
    }

    #[cfg(feature = "tracing")]
    {
        init_tracing(cli.json_logs);
        info!(requested = %cli.log_level, "log level is taken from RUST_LOG");
    }

    run(&cli)
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(cli)))]
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let frame = load_frame(&cli.frame)?;

    let mut params = frame.params;
    if let Some(min_fraction) = cli.min_area_fraction {
        params.area_filter = Some(AreaFilter {
            min_fraction,
            ..params.area_filter.unwrap_or_default()
        });
    }
    let style = params.overlay;

    let mut session = TrackerSession::new(params)?;
    let result = session.evaluate_frame(&frame.particles, frame.image_width, frame.image_height);
    match (&result.best, result.best_particle()) {
        (Some(best), Some(particle)) => info!(
            "best particle #{} at ({:.1}, {:.1}) score {:.3} range {:.2}",
            best.index,
            particle.center_x(),
            particle.center_y(),
            best.scores.cumulative,
            result.range
        ),
        _ => warn!("no target among {} particles", frame.particles.len()),
    }

    let report = FrameReport {
        frame_path: cli.frame.to_string_lossy().into_owned(),
        overlay: (!cli.no_overlay).then(|| result.overlay(&style)),
        result: Arc::unwrap_or_clone(result),
    };
    write_report(cli.output.as_deref(), &report)
}

fn load_frame(path: &Path) -> Result<FrameInput, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_report(path: Option<&Path>, report: &FrameReport) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    let Some(out_path) = path else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, json)?;
    eprintln!("wrote report JSON to {}", out_path.display());
    Ok(())
}
