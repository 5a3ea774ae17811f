use crate::error::SelectionError;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Column summary: mean / median / mode
// ---------------------------------------------------------------------------

/// Summary statistics for one numeric column, computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

impl ColumnSummary {
    /// Human-readable report shown in the statistics window.
    pub fn report(&self) -> String {
        format!(
            "Mean: {}\nMedian: {}\nMode: {}",
            self.mean, self.median, self.mode
        )
    }
}

/// Compute mean, median and mode for the named column.
///
/// Null cells are skipped. Fails if no dataset is loaded, the column is
/// absent, or it carries no numeric values.
pub fn summarize(
    dataset: Option<&Dataset>,
    column: &str,
) -> Result<ColumnSummary, SelectionError> {
    let dataset = dataset.ok_or(SelectionError::NoDataset)?;
    if column.is_empty() {
        return Err(SelectionError::NoSelection);
    }
    let col = dataset
        .column(column)
        .ok_or_else(|| SelectionError::UnknownColumn(column.to_string()))?;

    let mut values = col.numeric_values();
    if values.is_empty() {
        return Err(SelectionError::NotNumeric(column.to_string()));
    }
    values.sort_by(f64::total_cmp);

    Ok(ColumnSummary {
        column: column.to_string(),
        mean: mean(&values),
        median: median_sorted(&values),
        mode: mode_sorted(&values),
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// 50th percentile with linear interpolation on even counts.
/// `values` must be sorted and non-empty.
pub(crate) fn median_sorted(values: &[f64]) -> f64 {
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Most frequent value. Ties break toward the smallest value, which is an
/// arbitrary choice and carries no meaning.
/// `values` must be sorted and non-empty.
pub(crate) fn mode_sorted(values: &[f64]) -> f64 {
    let mut best = values[0];
    let mut best_count = 0usize;

    let mut i = 0;
    while i < values.len() {
        let mut j = i + 1;
        while j < values.len() && values[j] == values[i] {
            j += 1;
        }
        if j - i > best_count {
            best_count = j - i;
            best = values[i];
        }
        i = j;
    }
    best
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::data::loader::read_csv;

    fn single_column(values: &[&str]) -> Dataset {
        let text = format!("v\n{}\n", values.join("\n"));
        read_csv(text.as_bytes()).unwrap()
    }

    #[test]
    fn one_two_two_three() {
        let ds = single_column(&["1", "2", "2", "3"]);
        let s = summarize(Some(&ds), "v").unwrap();
        assert_relative_eq!(s.mean, 2.0);
        assert_relative_eq!(s.median, 2.0);
        assert_relative_eq!(s.mode, 2.0);
    }

    #[test]
    fn median_interpolates_on_even_counts() {
        let ds = single_column(&["1", "2", "3", "10"]);
        let s = summarize(Some(&ds), "v").unwrap();
        assert_relative_eq!(s.median, 2.5);
        assert_relative_eq!(s.mean, 4.0);
    }

    #[test]
    fn mode_tie_breaks_toward_smallest() {
        let ds = single_column(&["3", "1", "3", "1", "2"]);
        let s = summarize(Some(&ds), "v").unwrap();
        assert_relative_eq!(s.mode, 1.0);
    }

    #[test]
    fn nulls_are_skipped() {
        let ds = read_csv("v,w\n1,a\n,b\n3,c\n".as_bytes()).unwrap();
        let s = summarize(Some(&ds), "v").unwrap();
        assert_relative_eq!(s.mean, 2.0);
    }

    #[test]
    fn no_dataset_is_a_selection_error() {
        assert_eq!(summarize(None, "v"), Err(SelectionError::NoDataset));
    }

    #[test]
    fn empty_selection_is_a_selection_error() {
        let ds = single_column(&["1"]);
        assert_eq!(summarize(Some(&ds), ""), Err(SelectionError::NoSelection));
    }

    #[test]
    fn unknown_column_is_a_selection_error() {
        let ds = single_column(&["1"]);
        assert_eq!(
            summarize(Some(&ds), "nope"),
            Err(SelectionError::UnknownColumn("nope".into()))
        );
    }

    #[test]
    fn text_column_is_not_numeric() {
        let ds = read_csv("v\nfoo\nbar\n".as_bytes()).unwrap();
        assert_eq!(
            summarize(Some(&ds), "v"),
            Err(SelectionError::NotNumeric("v".into()))
        );
    }
}
