use std::fmt;

use super::loader::LoadError;

// ---------------------------------------------------------------------------
// Variant – which simulation assumption a dataset belongs to
// ---------------------------------------------------------------------------

/// The two fluid-density assumptions whose trajectories are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    DensityCorrected,
    NoDensityCorrection,
}

impl Variant {
    /// Both variants, in the order they are loaded and reported.
    pub const ALL: [Variant; 2] = [Variant::DensityCorrected, Variant::NoDensityCorrection];

    /// Asset namespace the variant's files live under.
    pub fn namespace(self) -> &'static str {
        match self {
            Variant::DensityCorrected => "density_corrected",
            Variant::NoDensityCorrection => "no_density_correction",
        }
    }

    /// Launch angles (degrees) shown for this variant.
    pub fn angles(self) -> &'static [u32] {
        match self {
            Variant::DensityCorrected => &[36, 46, 55],
            Variant::NoDensityCorrection => &[38, 45, 55],
        }
    }

    /// Legend label for the "Fluid density" grouping.
    pub fn label(self) -> &'static str {
        match self {
            Variant::DensityCorrected => "Corrected Density",
            Variant::NoDensityCorrection => "NOT Corrected Density",
        }
    }

    /// Prefix of the per-angle series name, e.g. `D36°` / `ND38°`.
    pub fn series_prefix(self) -> &'static str {
        match self {
            Variant::DensityCorrected => "D",
            Variant::NoDensityCorrection => "ND",
        }
    }

    pub fn from_namespace(namespace: &str) -> Option<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.namespace() == namespace)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

// ---------------------------------------------------------------------------
// SamplePoint – one line of a trajectory file
// ---------------------------------------------------------------------------

/// A single sample along a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Horizontal distance (km).
    pub x: f64,
    /// Height (km).
    pub y: f64,
    /// Scalar property carried through unscaled (air density in the bundled data).
    pub p: f64,
}

// ---------------------------------------------------------------------------
// Trajectory – all samples of one launch angle
// ---------------------------------------------------------------------------

/// The ordered path of one launch angle. Point order is file order and is
/// never changed after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Launch angle in whole degrees.
    pub angle: u32,
    points: Vec<SamplePoint>,
}

impl Trajectory {
    pub fn new(angle: u32, points: Vec<SamplePoint>) -> Self {
        Self { angle, points }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spacing between p-annotations (`len / 3`). Zero means "do not annotate".
    pub fn annotation_interval(&self) -> usize {
        self.points.len() / 3
    }

    /// Indices of the points that carry a p-value annotation.
    pub fn annotation_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let step = self.annotation_interval();
        let n = if step == 0 { 0 } else { self.points.len() };
        (0..n).step_by(step.max(1))
    }

    /// Index of the point that carries the angle label.
    pub fn midpoint_index(&self) -> Option<usize> {
        if self.points.is_empty() {
            None
        } else {
            Some(self.points.len() / 2)
        }
    }

    /// Horizontal distance of the last sample (km).
    pub fn range(&self) -> Option<f64> {
        self.points.last().map(|p| p.x)
    }

    /// Highest sample (km).
    pub fn apex(&self) -> Option<f64> {
        self.points.iter().map(|p| p.y).reduce(f64::max)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the result of loading one variant
// ---------------------------------------------------------------------------

/// Trajectories for every angle that could be loaded, plus one error per
/// angle that could not.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub namespace: String,
    pub trajectories: Vec<Trajectory>,
    pub errors: Vec<LoadError>,
}

impl Dataset {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable error messages, in angle order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn trajectory(&self, angle: u32) -> Option<&Trajectory> {
        self.trajectories.iter().find(|t| t.angle == angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_line(n: usize) -> Trajectory {
        let points = (0..n)
            .map(|i| SamplePoint {
                x: i as f64,
                y: (i % 4) as f64,
                p: 1.0,
            })
            .collect();
        Trajectory::new(45, points)
    }

    #[test]
    fn namespaces_round_trip() {
        for v in Variant::ALL {
            assert_eq!(Variant::from_namespace(v.namespace()), Some(v));
        }
        assert_eq!(Variant::from_namespace("density"), None);
    }

    #[test]
    fn annotation_every_third_of_the_points() {
        let t = straight_line(10);
        assert_eq!(t.annotation_interval(), 3);
        let idx: Vec<usize> = t.annotation_indices().collect();
        assert_eq!(idx, vec![0, 3, 6, 9]);
        assert_eq!(t.midpoint_index(), Some(5));
    }

    #[test]
    fn short_trajectories_get_no_p_annotations() {
        let t = straight_line(2);
        assert_eq!(t.annotation_interval(), 0);
        assert_eq!(t.annotation_indices().count(), 0);
        assert_eq!(t.midpoint_index(), Some(1));

        let empty = straight_line(0);
        assert_eq!(empty.midpoint_index(), None);
        assert_eq!(empty.range(), None);
        assert_eq!(empty.apex(), None);
    }

    #[test]
    fn range_and_apex() {
        let t = straight_line(6);
        assert_eq!(t.range(), Some(5.0));
        assert_eq!(t.apex(), Some(3.0));
    }
}
