use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use trajectory_viewer::data::model::Variant;
use trajectory_viewer::simulation::{
    SimulationParams, simulate, sweep_to_best_angle, write_trajectory_file,
};

/// Regenerate the bundled trajectory files.
#[derive(Debug, Parser)]
#[command(name = "simulate_trajectories", version, about)]
struct Args {
    /// Variant namespace: density_corrected or no_density_correction.
    /// Omit to generate both.
    #[arg(long, value_parser = parse_variant)]
    variant: Option<Variant>,

    /// Launch angles in degrees (comma separated). Defaults to the angles the
    /// viewer shows for each variant.
    #[arg(long, value_delimiter = ',')]
    angles: Vec<u32>,

    /// JSON file with simulation parameters.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output directory; files land in <out-dir>/<namespace>/<angle>projectille.
    #[arg(long, default_value = "assets")]
    out_dir: PathBuf,

    /// Instead of writing files, sweep upward from this angle and report the
    /// angle with the longest range.
    #[arg(long)]
    sweep_from: Option<u32>,
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    Variant::from_namespace(s).ok_or_else(|| {
        format!("unknown variant '{s}', expected density_corrected or no_density_correction")
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = match &args.params {
        Some(path) => SimulationParams::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationParams::default(),
    };
    log::debug!("simulation parameters: {params:?}");

    let variants: Vec<Variant> = match args.variant {
        Some(v) => vec![v],
        None => Variant::ALL.to_vec(),
    };

    if let Some(start) = args.sweep_from {
        if start == 0 || start >= 90 {
            bail!("--sweep-from must lie between 1 and 89 degrees");
        }
        for variant in variants {
            let sweep = sweep_to_best_angle(&params, start, variant)
                .with_context(|| format!("sweeping {variant}"))?;
            for (angle, range) in &sweep.ranges {
                println!("{variant} {angle:>2}°  range {:>9.3} km", range / 1000.0);
            }
            println!("{variant}: best angle {}°", sweep.best_angle);
        }
        return Ok(());
    }

    let mut written = 0usize;
    for variant in variants {
        let angles: &[u32] = if args.angles.is_empty() {
            variant.angles()
        } else {
            &args.angles
        };
        for &angle in angles {
            let samples = simulate(&params, f64::from(angle), variant)
                .with_context(|| format!("simulating {variant} at {angle}°"))?;
            let path = write_trajectory_file(&args.out_dir, variant, angle, &samples)?;
            log::info!("wrote {} samples to {}", samples.len(), path.display());
            written += 1;
        }
    }

    println!("Wrote {written} trajectory files to {}", args.out_dir.display());
    Ok(())
}
