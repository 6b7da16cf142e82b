use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use trajectory_viewer::data::assets::{AssetSource, BundledAssets};
use trajectory_viewer::state::{LoadStatus, ViewState};

use crate::ui::plot::ChartOptions;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrajectoryApp {
    pub view: ViewState,
    pub options: ChartOptions,
    assets: Arc<dyn AssetSource>,
}

impl Default for TrajectoryApp {
    fn default() -> Self {
        let assets = BundledAssets::trajectories();
        log::debug!("bundled assets: {:?}", assets.names().collect::<Vec<_>>());
        Self {
            view: ViewState::default(),
            options: ChartOptions::default(),
            assets: Arc::new(assets),
        }
    }
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // First frame starts the load; later frames only poll for it.
        self.view.activate(self.assets.clone());
        self.view.poll();
        if self.view.status().is_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        // ---- Top panel: title and chart toggles ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, self.view.status(), &mut self.options);
        });

        // ---- Central panel: chart, spinner, or errors ----
        egui::CentralPanel::default().show(ctx, |ui| match self.view.status() {
            LoadStatus::Pending => panels::loading_view(ui),
            LoadStatus::Ready(comparison) => plot::trajectory_plot(ui, comparison, self.options),
            LoadStatus::Failed(msg) => panels::failure_view(ui, msg),
        });
    }
}
