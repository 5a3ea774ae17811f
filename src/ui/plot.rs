use eframe::egui::{Color32, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotPoints, Points,
};

use crate::chart::build::{Bin, BoxSummary};
use crate::chart::ChartData;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – the active chart
// ---------------------------------------------------------------------------

/// Render the active chart in the central panel.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    let Some(chart) = &state.chart else {
        ui.centered_and_justified(|ui: &mut Ui| {
            let hint = if state.dataset.is_some() {
                "Pick a column and choose Visualize… to draw a chart"
            } else {
                "Load a CSV file to get started  (Load CSV…)"
            };
            ui.heading(hint);
        });
        return;
    };

    ui.heading(chart.title());

    match chart {
        ChartData::Histogram {
            column,
            bins,
            bin_width,
            density,
        } => histogram(ui, column, bins, *bin_width, density),
        ChartData::Scatter {
            x_column,
            y_column,
            points,
        } => scatter(ui, x_column, y_column, points),
        ChartData::BoxPlot { column, summary } => boxplot(ui, column, summary),
    }
}

fn histogram(ui: &mut Ui, column: &str, bins: &[Bin], bin_width: f64, density: &[[f64; 2]]) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center, b.count as f64)
                .width(bin_width)
                .fill(Color32::from_rgb(70, 130, 220))
        })
        .collect();

    Plot::new("histogram")
        .x_axis_label(column)
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(column));
            if !density.is_empty() {
                let curve: PlotPoints = density.iter().copied().collect();
                plot_ui.line(
                    Line::new(curve)
                        .name("density")
                        .color(Color32::LIGHT_BLUE)
                        .width(2.0),
                );
            }
        });
}

fn scatter(ui: &mut Ui, x_column: &str, y_column: &str, points: &[[f64; 2]]) {
    let pts: PlotPoints = points.iter().copied().collect();

    Plot::new("scatter")
        .x_axis_label(x_column)
        .y_axis_label(y_column)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(pts)
                    .name(format!("{x_column} vs {y_column}"))
                    .color(Color32::from_rgb(70, 130, 220))
                    .radius(3.0),
            );
        });
}

fn boxplot(ui: &mut Ui, column: &str, summary: &BoxSummary) {
    let elem = BoxElem::new(
        0.5,
        BoxSpread::new(
            summary.lower_whisker,
            summary.quartile1,
            summary.median,
            summary.quartile3,
            summary.upper_whisker,
        ),
    )
    .box_width(0.4)
    .fill(Color32::from_rgb(80, 170, 90));

    Plot::new("boxplot")
        .x_axis_label(column)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]).name(column).vertical());

            if !summary.outliers.is_empty() {
                let pts: PlotPoints =
                    summary.outliers.iter().map(|&v| [0.5, v]).collect();
                plot_ui.points(
                    Points::new(pts)
                        .name("outliers")
                        .color(Color32::from_rgb(80, 170, 90))
                        .radius(3.0),
                );
            }
        });
}
