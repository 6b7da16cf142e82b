use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, PlotUi, Text};

use trajectory_viewer::data::model::{Trajectory, Variant};
use trajectory_viewer::state::Comparison;

use crate::color::variant_shades;

// ---------------------------------------------------------------------------
// Chart options
// ---------------------------------------------------------------------------

/// What gets drawn on top of the trajectory lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Label every third of each corrected trajectory with its p value.
    pub show_p_annotations: bool,
    /// Mark each trajectory's midpoint with its launch angle.
    pub show_angle_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_p_annotations: true,
            show_angle_labels: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Trajectory chart (central panel)
// ---------------------------------------------------------------------------

/// Render both variants' trajectories on one chart.
pub fn trajectory_plot(ui: &mut Ui, comparison: &Comparison, options: ChartOptions) {
    Plot::new("trajectory_plot")
        .legend(Legend::default())
        .x_axis_label("x (km)")
        .y_axis_label("y (km)")
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            draw_variant(plot_ui, Variant::DensityCorrected, &comparison.corrected, options);
            draw_variant(plot_ui, Variant::NoDensityCorrection, &comparison.uncorrected, options);
        });
}

fn draw_variant(plot_ui: &mut PlotUi, variant: Variant, trajectories: &[Trajectory], options: ChartOptions) {
    let shades = variant_shades(variant, trajectories.len());

    for (traj, &color) in trajectories.iter().zip(shades.iter()) {
        let points: PlotPoints = traj.points().iter().map(|p| [p.x, p.y]).collect();

        let mut line = Line::new(points)
            .name(format!("{}{}° ({})", variant.series_prefix(), traj.angle, variant.label()))
            .color(color)
            .width(1.5);
        if variant == Variant::NoDensityCorrection {
            line = line.style(LineStyle::dashed_loose());
        }
        plot_ui.line(line);

        // p labels only on the corrected series; the uncorrected p is constant.
        if options.show_p_annotations && variant == Variant::DensityCorrected {
            for i in traj.annotation_indices() {
                let p = traj.points()[i];
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(p.x, p.y),
                        RichText::new(format!("p={:.3}", p.p)).small(),
                    )
                    .anchor(Align2::LEFT_BOTTOM)
                    .color(color),
                );
            }
        }

        if options.show_angle_labels {
            if let Some(mid) = traj.midpoint_index() {
                let p = traj.points()[mid];
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(p.x, p.y),
                        RichText::new(format!("{}°", traj.angle)).strong(),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        }
    }
}
