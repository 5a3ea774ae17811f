use crate::chart::{ChartData, ChartKind};
use crate::data::model::Dataset;
use crate::data::stats::ColumnSummary;

// ---------------------------------------------------------------------------
// Notices – modal messages shown to the user, oldest first
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn title(self) -> &'static str {
        match self {
            Severity::Info => "Success",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// One modal notice. Dismissed with its OK button before the next shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Visualize dialog state
// ---------------------------------------------------------------------------

/// State of the secondary "Select Visualization" dialog. The radio choice
/// lives here and is handed to the chart builder once, on confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizeDialog {
    pub choice: ChartKind,
}

impl Default for VisualizeDialog {
    fn default() -> Self {
        Self {
            choice: ChartKind::Histogram,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user loads a file).
    pub dataset: Option<Dataset>,

    /// Numeric column names of the current dataset, in file order (cached).
    pub numeric_columns: Vec<String>,

    /// The column currently picked in the selector.
    pub selected_column: Option<String>,

    /// Statistics window contents, if open.
    pub summary: Option<ColumnSummary>,

    /// Chart shown in the central panel, if any.
    pub chart: Option<ChartData>,

    /// Visualize dialog, if open.
    pub visualize_dialog: Option<VisualizeDialog>,

    /// Pending modal notices, oldest first.
    pub notices: Vec<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            numeric_columns: Vec::new(),
            selected_column: None,
            summary: None,
            chart: None,
            visualize_dialog: None,
            notices: Vec::new(),
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, wholesale-replacing everything derived
    /// from the previous one.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.numeric_columns = dataset.numeric_columns();
        self.selected_column = None;
        self.summary = None;
        self.chart = None;
        self.visualize_dialog = None;
        self.dataset = Some(dataset);
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{message}");
        self.notices.push(Notice {
            severity: Severity::Info,
            message,
        });
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.notices.push(Notice {
            severity: Severity::Warning,
            message,
        });
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.notices.push(Notice {
            severity: Severity::Error,
            message,
        });
    }

    /// The notice currently due for display.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.first()
    }

    pub fn dismiss_notice(&mut self) {
        if !self.notices.is_empty() {
            self.notices.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    #[test]
    fn reload_replaces_all_derived_state() {
        let mut state = AppState::default();

        let first = read_csv("a,b\n1,2\n".as_bytes()).unwrap();
        state.set_dataset(first);
        state.selected_column = Some("a".into());
        state.summary = crate::data::stats::summarize(state.dataset.as_ref(), "a").ok();
        assert!(state.summary.is_some());

        let second = read_csv("p,q\n7,8\n".as_bytes()).unwrap();
        state.set_dataset(second);

        assert_eq!(state.numeric_columns, vec!["p", "q"]);
        assert_eq!(state.selected_column, None);
        assert!(state.summary.is_none());
        assert!(state.chart.is_none());
    }

    #[test]
    fn notices_dismiss_in_fifo_order() {
        let mut state = AppState::default();
        state.push_warning("first");
        state.push_error("second");

        assert_eq!(state.current_notice().unwrap().message, "first");
        state.dismiss_notice();
        assert_eq!(state.current_notice().unwrap().severity, Severity::Error);
        state.dismiss_notice();
        assert!(state.current_notice().is_none());
        state.dismiss_notice(); // no-op on empty queue
    }
}
