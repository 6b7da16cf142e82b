use eframe::egui::{self, Color32, RichText, Ui};

use trajectory_viewer::data::model::Variant;
use trajectory_viewer::state::{Comparison, LoadStatus};

use crate::color::variant_color;
use crate::ui::plot::ChartOptions;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title, fluid-density key, and chart toggles.
pub fn top_bar(ui: &mut Ui, status: &LoadStatus, options: &mut ChartOptions) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Projectile Trajectory");
    });

    let LoadStatus::Ready(comparison) = status else {
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Fluid density:");
        for variant in Variant::ALL {
            ui.label(RichText::new(variant.label()).color(variant_color(variant)));
        }

        ui.separator();
        ui.checkbox(&mut options.show_p_annotations, "p annotations");
        ui.checkbox(&mut options.show_angle_labels, "Angle labels");

        ui.separator();
        ui.label(summary(comparison));
    });
}

fn summary(comparison: &Comparison) -> String {
    let all = || comparison.corrected.iter().chain(&comparison.uncorrected);
    let points: usize = all().map(|t| t.len()).sum();
    let apex = all().filter_map(|t| t.apex()).reduce(f64::max);

    let mut text = format!(
        "{} trajectories, {points} points",
        comparison.corrected.len() + comparison.uncorrected.len()
    );
    if let Some(apex) = apex {
        text.push_str(&format!(", apex {apex:.2} km"));
    }
    text
}

// ---------------------------------------------------------------------------
// Status views
// ---------------------------------------------------------------------------

/// Shown while the datasets are being loaded.
pub fn loading_view(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.add(egui::Spinner::new().size(24.0));
        ui.label("Loading");
    });
}

/// Replaces the chart when any dataset failed to load.
pub fn failure_view(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("There were errors: {message}"))
                .heading()
                .color(Color32::RED),
        );
    });
}
