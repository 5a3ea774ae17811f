use eframe::egui::{self, Color32, RichText, Ui};

use crate::chart::{build_chart, ChartKind};
use crate::data::{loader, stats};
use crate::state::{AppState, Severity, VisualizeDialog};

// ---------------------------------------------------------------------------
// Top bar – load / column selector / statistics / visualize
// ---------------------------------------------------------------------------

/// Render the toolbar. Every button maps 1:1 onto a data-layer call.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        if ui.button("Load CSV…").clicked() {
            open_file_dialog(state);
        }

        ui.separator();

        ui.label("Column:");
        let selected = state.selected_column.clone().unwrap_or_default();
        egui::ComboBox::from_id_salt("column_selector")
            .selected_text(&selected)
            .show_ui(ui, |ui: &mut Ui| {
                for col in state.numeric_columns.clone() {
                    if ui.selectable_label(selected == col, &col).clicked() {
                        state.selected_column = Some(col);
                    }
                }
            });

        ui.separator();

        if ui.button("Show Statistics").clicked() {
            show_statistics(state);
        }

        if ui.button("Visualize…").clicked() {
            state.visualize_dialog = Some(VisualizeDialog::default());
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} columns ({} numeric)",
                ds.rows,
                ds.columns.len(),
                state.numeric_columns.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.rows,
                    dataset.numeric_columns()
                );
                state.set_dataset(dataset);
                state.push_info("File loaded successfully!");
                if state.numeric_columns.is_empty() {
                    state.push_warning(
                        "The dataset does not contain any numeric columns!",
                    );
                }
            }
            Err(e) => {
                state.push_error(format!("Failed to load file:\n{e:#}"));
            }
        }
    }
}

fn show_statistics(state: &mut AppState) {
    let column = state.selected_column.clone().unwrap_or_default();
    match stats::summarize(state.dataset.as_ref(), &column) {
        Ok(summary) => state.summary = Some(summary),
        Err(e) => state.push_error(e.to_string()),
    }
}

/// Confirm handler for the visualize dialog: the chosen kind is passed to
/// the chart builder as an argument, and the dialog closes either way.
fn confirm_visualization(state: &mut AppState, kind: ChartKind) {
    let column = state.selected_column.clone().unwrap_or_default();
    match build_chart(state.dataset.as_ref(), &column, kind) {
        Ok(chart) => {
            log::info!("Rendering {}", chart.title());
            state.chart = Some(chart);
        }
        Err(e) => state.push_error(e.to_string()),
    }
    state.visualize_dialog = None;
}

// ---------------------------------------------------------------------------
// Secondary windows: visualize dialog, statistics, notices
// ---------------------------------------------------------------------------

/// Render the "Select Visualization" dialog when open.
pub fn visualize_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(mut dialog) = state.visualize_dialog else {
        return;
    };

    let mut open = true;
    let mut confirmed = false;

    egui::Window::new("Select Visualization")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label("Select Visualization Type");
            ui.add_space(4.0);
            for kind in ChartKind::ALL {
                ui.radio_value(&mut dialog.choice, kind, kind.label());
            }
            ui.add_space(8.0);
            if ui.button("Visualize").clicked() {
                confirmed = true;
            }
        });

    if confirmed {
        confirm_visualization(state, dialog.choice);
    } else if open {
        state.visualize_dialog = Some(dialog);
    } else {
        state.visualize_dialog = None;
    }
}

/// Render the statistics window when a summary is held.
pub fn statistics_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(summary) = &state.summary else {
        return;
    };

    let mut open = true;
    egui::Window::new(format!("Statistics: {}", summary.column))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.label(summary.report());
        });

    if !open {
        state.summary = None;
    }
}

/// Render the oldest pending notice as a modal window with an OK button.
pub fn notice_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.current_notice() else {
        return;
    };

    let color = match notice.severity {
        Severity::Info => Color32::LIGHT_GREEN,
        Severity::Warning => Color32::YELLOW,
        Severity::Error => Color32::LIGHT_RED,
    };
    let title = notice.severity.title();
    let message = notice.message.clone();

    let mut dismissed = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(RichText::new(message).color(color));
            ui.add_space(8.0);
            ui.vertical_centered(|ui: &mut Ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.dismiss_notice();
    }
}
