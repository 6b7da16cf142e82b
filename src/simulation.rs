//! Projectile flight with quadratic air drag, optionally scaled by an
//! isothermal atmosphere. This is what produced the bundled trajectory files.
//!
//! Integration is explicit Euler with a fixed step. The last recorded sample
//! is the interpolated ground crossing (`y = 0`).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::assets::asset_name;
use crate::data::model::Variant;

/// Most samples one trajectory may record.
const MAX_STEPS: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("trajectory at {angle}° did not land within {steps} steps")]
    DidNotLand { angle: f64, steps: usize },

    #[error("trajectory at {angle}° needs about {estimated} steps, limit is {limit}")]
    TooManySteps { angle: f64, estimated: f64, limit: usize },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameter file {path}: {source}")]
    Params {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SimulationError>;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Launch and atmosphere parameters. Every field has a default, so a params
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Muzzle speed (m/s).
    pub speed: f64,
    /// Drag coefficient over mass, `B2/m` (1/m).
    pub b2_per_mass: f64,
    /// Sea-level air density; recorded as `p`.
    pub density: f64,
    /// Scale height `y0` of the density profile (m).
    pub scale_height: f64,
    /// Integration step (s).
    pub time_step: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            speed: 700.0,
            b2_per_mass: 4e-5,
            density: 1.225,
            scale_height: 1e4,
            time_step: 0.1,
            gravity: 9.8,
        }
    }
}

impl SimulationParams {
    /// Read a JSON params file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SimulationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let params: Self = serde_json::from_str(&text).map_err(|source| SimulationError::Params {
            path: path.to_path_buf(),
            source,
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("speed", self.speed),
            ("density", self.density),
            ("scale_height", self.scale_height),
            ("time_step", self.time_step),
            ("gravity", self.gravity),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::InvalidParameter {
                    name,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if !(self.b2_per_mass.is_finite() && self.b2_per_mass >= 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "b2_per_mass",
                reason: format!("must be non-negative, got {}", self.b2_per_mass),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Integration
// ---------------------------------------------------------------------------

/// One recorded step, in SI units (s, m, m, density).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSample {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub p: f64,
}

/// Fly one projectile launched from the origin at `angle_deg`.
pub fn simulate(
    params: &SimulationParams,
    angle_deg: f64,
    variant: Variant,
) -> Result<Vec<SimulationSample>> {
    params.validate()?;
    if !(angle_deg > 0.0 && angle_deg < 90.0) {
        return Err(SimulationError::InvalidParameter {
            name: "angle",
            reason: format!("must lie strictly between 0 and 90 degrees, got {angle_deg}"),
        });
    }

    let dt = params.time_step;
    let rho0 = params.density;
    let theta = angle_deg.to_radians();
    let (mut vx, mut vy) = (params.speed * theta.cos(), params.speed * theta.sin());

    // Expected step count from the drag-free flight time.
    let estimated = (2.0 * vy / params.gravity / dt).ceil();
    if estimated > MAX_STEPS as f64 {
        return Err(SimulationError::TooManySteps {
            angle: angle_deg,
            estimated,
            limit: MAX_STEPS,
        });
    }

    let mut samples = vec![SimulationSample { t: 0.0, x: 0.0, y: 0.0, p: rho0 }];
    let mut cur = samples[0];

    while cur.y >= 0.0 {
        if samples.len() > MAX_STEPS {
            return Err(SimulationError::DidNotLand { angle: angle_deg, steps: MAX_STEPS });
        }

        let next_x = cur.x + vx * dt;
        let next_y = cur.y + vy * dt;

        let density_factor = match variant {
            Variant::DensityCorrected => cur.p / rho0,
            Variant::NoDensityCorrection => 1.0,
        };
        let drag = density_factor * params.b2_per_mass * (vx * vx + vy * vy).sqrt();
        vx -= drag * vx * dt;
        vy -= (drag * vy + params.gravity) * dt;

        let p = match variant {
            Variant::DensityCorrected => rho0 * (-next_y / params.scale_height).exp(),
            Variant::NoDensityCorrection => rho0,
        };

        cur = SimulationSample { t: cur.t + dt, x: next_x, y: next_y, p };
        samples.push(cur);
    }

    // Replace the first below-ground sample with the ground crossing.
    let n = samples.len();
    let (before, after) = (samples[n - 2], samples[n - 1]);
    let r = -before.y / after.y;
    samples[n - 1] = SimulationSample {
        t: after.t,
        x: (before.x + r * after.x) / (r + 1.0),
        y: 0.0,
        p: rho0,
    };

    Ok(samples)
}

/// Horizontal distance at landing (m).
pub fn range_of(samples: &[SimulationSample]) -> f64 {
    samples.last().map_or(0.0, |s| s.x)
}

/// Render samples as `t x y p` records, one per line.
pub fn format_records(samples: &[SimulationSample]) -> String {
    let mut out = String::with_capacity(samples.len() * 32);
    for s in samples {
        let _ = writeln!(out, "{:.2} {:.3} {:.3} {:.6}", s.t, s.x, s.y, s.p);
    }
    out
}

/// Outcome of an angle sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// Every angle evaluated with its range (m), in evaluation order.
    pub ranges: Vec<(u32, f64)>,
    /// Angle with the longest range.
    pub best_angle: u32,
}

/// Raise the launch angle one degree at a time from `start_angle` until the
/// range stops growing.
pub fn sweep_to_best_angle(
    params: &SimulationParams,
    start_angle: u32,
    variant: Variant,
) -> Result<Sweep> {
    let mut ranges = Vec::new();
    let mut best = (start_angle, f64::NEG_INFINITY);

    for angle in start_angle..90 {
        let range = range_of(&simulate(params, f64::from(angle), variant)?);
        ranges.push((angle, range));
        log::debug!("{variant} at {angle}°: range {range:.1} m");
        if range < best.1 {
            break;
        }
        best = (angle, range);
    }

    Ok(Sweep { ranges, best_angle: best.0 })
}

/// Write one trajectory file under `out_dir`, named the way the viewer looks
/// it up. Returns the path written.
pub fn write_trajectory_file(
    out_dir: &Path,
    variant: Variant,
    angle: u32,
    samples: &[SimulationSample],
) -> Result<PathBuf> {
    let path = out_dir.join(asset_name(variant.namespace(), angle));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SimulationError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&path, format_records(samples)).map_err(|source| SimulationError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse_trajectory;

    fn range(angle: u32, variant: Variant) -> f64 {
        range_of(&simulate(&SimulationParams::default(), f64::from(angle), variant).unwrap())
    }

    #[test]
    fn starts_at_origin_and_lands_on_the_ground() {
        let samples =
            simulate(&SimulationParams::default(), 45.0, Variant::DensityCorrected).unwrap();
        assert_eq!(samples[0], SimulationSample { t: 0.0, x: 0.0, y: 0.0, p: 1.225 });
        let last = samples.last().unwrap();
        assert_eq!(last.y, 0.0);
        assert_eq!(last.p, 1.225);
        assert!(samples[1..samples.len() - 1].iter().all(|s| s.y >= 0.0));
        assert!(samples.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn density_thins_with_height_only_when_corrected() {
        let params = SimulationParams::default();
        let corrected = simulate(&params, 45.0, Variant::DensityCorrected).unwrap();
        let apex = corrected
            .iter()
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .unwrap();
        assert!(apex.p < params.density);

        let uncorrected = simulate(&params, 45.0, Variant::NoDensityCorrection).unwrap();
        assert!(uncorrected.iter().all(|s| s.p == params.density));
    }

    #[test]
    fn thinner_air_carries_further() {
        for angle in [36, 45, 55] {
            assert!(range(angle, Variant::DensityCorrected) > range(angle, Variant::NoDensityCorrection));
        }
    }

    #[test]
    fn sweep_finds_the_longest_range() {
        let params = SimulationParams::default();
        let corrected = sweep_to_best_angle(&params, 30, Variant::DensityCorrected).unwrap();
        assert_eq!(corrected.best_angle, 46);
        assert_eq!(corrected.ranges.first().unwrap().0, 30);
        assert_eq!(corrected.ranges.last().unwrap().0, 47);

        let uncorrected = sweep_to_best_angle(&params, 30, Variant::NoDensityCorrection).unwrap();
        assert!(uncorrected.best_angle < corrected.best_angle);
    }

    #[test]
    fn rejects_bad_parameters() {
        let params = SimulationParams { time_step: 0.0, ..Default::default() };
        assert!(matches!(
            simulate(&params, 45.0, Variant::DensityCorrected),
            Err(SimulationError::InvalidParameter { name: "time_step", .. })
        ));
        assert!(matches!(
            simulate(&SimulationParams::default(), 90.0, Variant::DensityCorrected),
            Err(SimulationError::InvalidParameter { name: "angle", .. })
        ));
    }

    #[test]
    fn tiny_time_step_is_rejected_before_integrating() {
        let params = SimulationParams { time_step: 1e-5, ..Default::default() };
        assert!(matches!(
            simulate(&params, 45.0, Variant::DensityCorrected),
            Err(SimulationError::TooManySteps { limit: MAX_STEPS, .. })
        ));
    }

    #[test]
    fn records_parse_back_into_kilometres() {
        let samples = vec![
            SimulationSample { t: 0.0, x: 0.0, y: 0.0, p: 1.225 },
            SimulationSample { t: 0.1, x: 48.6264, y: 50.3541, p: 1.2188 },
        ];
        let text = format_records(&samples);
        assert_eq!(text, "0.00 0.000 0.000 1.225000\n0.10 48.626 50.354 1.218800\n");
        let points = parse_trajectory(&text);
        assert_eq!(points.len(), 2);
        assert!((points[1].x - 0.048626).abs() < 1e-12);
    }

    #[test]
    fn params_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{ "speed": 500.0, "time_step": 0.05 }"#).unwrap();
        let params = SimulationParams::from_json_file(&path).unwrap();
        assert_eq!(params.speed, 500.0);
        assert_eq!(params.time_step, 0.05);
        assert_eq!(params.gravity, 9.8);
    }

    #[test]
    fn trajectory_file_lands_under_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let samples =
            simulate(&SimulationParams::default(), 38.0, Variant::NoDensityCorrection).unwrap();
        let path =
            write_trajectory_file(dir.path(), Variant::NoDensityCorrection, 38, &samples).unwrap();
        assert_eq!(path, dir.path().join("no_density_correction/38projectille"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_trajectory(&written).len(), samples.len());
    }
}
