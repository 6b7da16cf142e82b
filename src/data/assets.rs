//! Bundled trajectory files.
//!
//! Every dataset is compiled into the binary; a lookup is a table scan by
//! logical name (`"{namespace}/{angle}projectille"`), never a filesystem read.

/// Anything that can hand out raw asset bytes by logical name.
pub trait AssetSource: Send + Sync {
    /// Return the asset's bytes, or `None` when the bundle has no such entry.
    fn read(&self, name: &str) -> Option<&[u8]>;
}

/// Build the logical asset name for one angle of one namespace.
pub fn asset_name(namespace: &str, angle: u32) -> String {
    format!("{namespace}/{angle}projectille")
}

/// A static table of `(name, bytes)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct BundledAssets {
    entries: &'static [(&'static str, &'static [u8])],
}

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/", $name)) as &[u8])),*]
    };
}

static TRAJECTORY_FILES: &[(&str, &[u8])] = bundled![
    "density_corrected/36projectille",
    "density_corrected/46projectille",
    "density_corrected/55projectille",
    "no_density_correction/38projectille",
    "no_density_correction/45projectille",
    "no_density_correction/55projectille",
];

impl BundledAssets {
    /// Wrap an arbitrary static table.
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }

    /// The trajectory files shipped with the application.
    pub const fn trajectories() -> Self {
        Self::new(TRAJECTORY_FILES)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl Default for BundledAssets {
    fn default() -> Self {
        Self::trajectories()
    }
}

impl AssetSource for BundledAssets {
    fn read(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, bytes)| *bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_names_follow_namespace_angle_convention() {
        assert_eq!(
            asset_name("density_corrected", 36),
            "density_corrected/36projectille"
        );
        assert_eq!(
            asset_name("no_density_correction", 5),
            "no_density_correction/5projectille"
        );
    }

    #[test]
    fn lookup_hits_and_misses() {
        static TABLE: &[(&str, &[u8])] = &[("ns/1projectille", b"0 1 2 3\n")];
        let assets = BundledAssets::new(TABLE);
        assert_eq!(assets.read("ns/1projectille"), Some(&b"0 1 2 3\n"[..]));
        assert_eq!(assets.read("ns/2projectille"), None);
        assert_eq!(assets.read("ns/1projectille/"), None);
    }

    #[test]
    fn shipped_bundle_is_not_empty() {
        let assets = BundledAssets::trajectories();
        assert_eq!(assets.names().count(), 6);
        for name in assets.names() {
            let bytes = assets.read(name).unwrap();
            assert!(!bytes.is_empty(), "{name} is empty");
        }
    }
}
