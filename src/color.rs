use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use trajectory_viewer::data::model::Variant;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Base hue per variant: blues for corrected, oranges for uncorrected.
fn variant_hue(variant: Variant) -> f32 {
    match variant {
        Variant::DensityCorrected => 210.0,
        Variant::NoDensityCorrection => 25.0,
    }
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// The variant's legend colour.
pub fn variant_color(variant: Variant) -> Color32 {
    hsl_to_color32(Hsl::new(variant_hue(variant), 0.75, 0.55))
}

/// `n` shades of the variant's hue, darkest first, one per angle series.
pub fn variant_shades(variant: Variant, n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    let hue = variant_hue(variant);
    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.5 } else { i as f32 / (n - 1) as f32 };
            hsl_to_color32(Hsl::new(hue, 0.75, 0.40 + 0.25 * t))
        })
        .collect()
}
