use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct DatascopeApp {
    pub state: AppState,
}

impl eframe::App for DatascopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_panel(ui, &self.state);
        });

        // ---- Secondary windows ----
        panels::statistics_window(ctx, &mut self.state);
        panels::visualize_dialog(ctx, &mut self.state);
        panels::notice_window(ctx, &mut self.state);
    }
}
