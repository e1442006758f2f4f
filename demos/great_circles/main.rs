//! Great circle chart data: the reference tilt angles projected onto an
//! equirectangular map, printed as CSV for an external plotter.
//!
//! Usage:
//! ```text
//! cargo run --example great_circles                 # 1001 samples per curve
//! cargo run --example great_circles -- 361          # custom sample count
//! RUST_LOG=greatcircle=debug cargo run --example great_circles
//! ```
//!
//! Output columns: `angle,index,longitude,latitude` (degrees). The plot
//! bounds are logged at startup.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use greatcircle::geometry::{LATITUDE_RANGE, LONGITUDE_RANGE};
use greatcircle::{reference_angles, ProjectMany, ProjectionParams};

const CHART_SAMPLE_COUNT: usize = 1001;

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for greatcircle.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("greatcircle=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let sample_count = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(e) => {
                tracing::error!(%arg, %e, "sample count must be a non-negative integer");
                return ExitCode::FAILURE;
            }
        },
        None => CHART_SAMPLE_COUNT,
    };

    tracing::info!(
        longitude = ?LONGITUDE_RANGE,
        latitude = ?LATITUDE_RANGE,
        sample_count,
        "plot bounds"
    );

    let params = ProjectionParams {
        parallel: true,
        ..ProjectionParams::with_sample_count(sample_count)
    };
    let curves = match ProjectMany::new(reference_angles(), params).execute() {
        Ok(curves) => curves,
        Err(e) => {
            tracing::error!(%e, "projection failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_csv(&curves) {
        tracing::error!(%e, "failed to write output");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn write_csv(curves: &[(f64, greatcircle::Curve)]) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    writeln!(out, "angle,index,longitude,latitude")?;
    for (angle, curve) in curves {
        for (i, p) in curve.iter().enumerate() {
            writeln!(out, "{angle},{i},{:.6},{:.6}", p.longitude, p.latitude)?;
        }
    }
    out.flush()
}
