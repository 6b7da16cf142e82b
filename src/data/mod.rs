/// Data layer: bundled assets, parsing, and loading.
///
/// Architecture:
/// ```text
///  "{namespace}/{angle}projectille"
///        │
///        ▼
///   ┌──────────┐
///   │  assets   │  logical name → bundled bytes (or None)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  "t x y p" lines → Vec<SamplePoint>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  angles × namespace → Dataset { trajectories, errors }
///   └──────────┘
/// ```

pub mod assets;
pub mod loader;
pub mod model;
pub mod parser;
