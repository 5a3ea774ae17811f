use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors surfaced to the user as modal notices
// ---------------------------------------------------------------------------

/// A statistics request could not be satisfied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No dataset loaded. Load a CSV file first.")]
    NoDataset,
    #[error("No column selected. Pick a column from the selector.")]
    NoSelection,
    #[error("Column '{0}' is not part of the loaded dataset.")]
    UnknownColumn(String),
    #[error("Column '{0}' has no numeric values.")]
    NotNumeric(String),
}

/// A chart request could not be satisfied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("No dataset loaded. Load a CSV file first.")]
    NoDataset,
    #[error("No column selected. Pick a column from the selector.")]
    NoSelection,
    #[error("Column '{0}' is not part of the loaded dataset.")]
    UnknownColumn(String),
    #[error("Column '{0}' has no numeric values to plot.")]
    NotNumeric(String),
    #[error("No other numeric column available for the scatter plot's y-axis.")]
    NoSecondNumeric,
}
