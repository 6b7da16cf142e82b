use std::collections::HashSet;

use thiserror::Error;

use super::assets::{AssetSource, asset_name};
use super::model::{Dataset, Trajectory, Variant};
use super::parser::parse_trajectory_bytes;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a single angle could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("could not fetch data for {namespace} at {angle}!")]
    AssetNotFound { namespace: String, angle: u32 },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one trajectory per angle from `namespace`.
///
/// Every angle is attempted. A missing asset records a [`LoadError`] and the
/// loop moves on, so the result holds trajectories for the angles that were
/// found (in input order) and errors for the ones that were not. An angle
/// listed more than once is loaded once, at its first position.
pub fn load_dataset(source: &dyn AssetSource, namespace: &str, angles: &[u32]) -> Dataset {
    let mut dataset = Dataset {
        namespace: namespace.to_string(),
        trajectories: Vec::with_capacity(angles.len()),
        errors: Vec::new(),
    };
    let mut seen = HashSet::with_capacity(angles.len());

    for &angle in angles {
        if !seen.insert(angle) {
            log::debug!("{namespace}: angle {angle} listed twice, skipping");
            continue;
        }
        let name = asset_name(namespace, angle);
        log::debug!("looking up asset {name}");

        match source.read(&name) {
            Some(bytes) => {
                let points = parse_trajectory_bytes(bytes);
                log::debug!("{name}: {} points", points.len());
                dataset.trajectories.push(Trajectory::new(angle, points));
            }
            None => {
                let err = LoadError::AssetNotFound {
                    namespace: namespace.to_string(),
                    angle,
                };
                log::warn!("{err}");
                dataset.errors.push(err);
            }
        }
    }

    dataset
}

/// Load a variant's configured angles.
pub fn load_variant(source: &dyn AssetSource, variant: Variant) -> Dataset {
    load_dataset(source, variant.namespace(), variant.angles())
}

/// Load both variants concurrently and wait for both.
///
/// Returns `(corrected, uncorrected)`. The two loads share nothing but the
/// read-only asset source. Both threads are joined before the outcome is
/// decided, so a panicking loader always comes back as `Err`.
pub fn load_both(source: &dyn AssetSource) -> Result<(Dataset, Dataset), String> {
    let (corrected, uncorrected) = std::thread::scope(|s| {
        let corrected = s.spawn(|| load_variant(source, Variant::DensityCorrected));
        let uncorrected = s.spawn(|| load_variant(source, Variant::NoDensityCorrection));
        (corrected.join(), uncorrected.join())
    });

    match (corrected, uncorrected) {
        (Ok(corrected), Ok(uncorrected)) => Ok((corrected, uncorrected)),
        (Err(_), Ok(_)) => Err("loader for density_corrected panicked".to_string()),
        (Ok(_), Err(_)) => Err("loader for no_density_correction panicked".to_string()),
        (Err(_), Err(_)) => {
            Err("loaders for density_corrected and no_density_correction panicked".to_string())
        }
    }
}
