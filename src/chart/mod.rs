/// Chart layer: turning a column selection into drawable chart data.
///
/// `build` computes plain-data descriptions (bins, density samples, box
/// summaries, scatter pairs) with no egui types, so everything here is
/// testable without a window. `ui::plot` renders the result.

pub mod build;

pub use build::{build_chart, ChartData};

// ---------------------------------------------------------------------------
// ChartKind – the user's choice in the visualize dialog
// ---------------------------------------------------------------------------

/// The chart type picked in the visualize dialog. Passed to the dispatcher
/// as a single confirm-time argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Histogram,
    Scatter,
    BoxPlot,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::Histogram,
        ChartKind::Scatter,
        ChartKind::BoxPlot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Histogram => "Histogram",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::BoxPlot => "Box Plot",
        }
    }
}
