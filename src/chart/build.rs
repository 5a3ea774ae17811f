use crate::data::model::{Column, Dataset};
use crate::data::stats::median_sorted;
use crate::error::ChartError;

use super::ChartKind;

// ---------------------------------------------------------------------------
// ChartData – plain-data chart descriptions, no egui types
// ---------------------------------------------------------------------------

/// One histogram bin, centred on `center`, `count` values wide.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub center: f64,
    pub count: usize,
}

/// Five-number box summary plus outliers beyond the 1.5×IQR whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub quartile1: f64,
    pub median: f64,
    pub quartile3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

/// A built chart, ready for `ui::plot` to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Histogram {
        column: String,
        bins: Vec<Bin>,
        bin_width: f64,
        /// Gaussian-KDE curve sampled across the data range, scaled to
        /// count space so it overlays the bars. Empty when the spread is
        /// degenerate (single distinct value).
        density: Vec<[f64; 2]>,
    },
    Scatter {
        x_column: String,
        y_column: String,
        points: Vec<[f64; 2]>,
    },
    BoxPlot {
        column: String,
        summary: BoxSummary,
    },
}

impl ChartData {
    /// Window/plot title, e.g. "Histogram of age".
    pub fn title(&self) -> String {
        match self {
            ChartData::Histogram { column, .. } => format!("Histogram of {column}"),
            ChartData::Scatter {
                x_column, y_column, ..
            } => format!("Scatter Plot: {x_column} vs {y_column}"),
            ChartData::BoxPlot { column, .. } => format!("Box Plot of {column}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Build the chart data for the named column and chosen kind.
pub fn build_chart(
    dataset: Option<&Dataset>,
    column: &str,
    kind: ChartKind,
) -> Result<ChartData, ChartError> {
    let dataset = dataset.ok_or(ChartError::NoDataset)?;
    if column.is_empty() {
        return Err(ChartError::NoSelection);
    }
    let col = dataset
        .column(column)
        .ok_or_else(|| ChartError::UnknownColumn(column.to_string()))?;

    match kind {
        ChartKind::Histogram => build_histogram(column, &sorted_values(col, column)?),
        ChartKind::BoxPlot => build_boxplot(column, &sorted_values(col, column)?),
        ChartKind::Scatter => build_scatter(dataset, column),
    }
}

fn sorted_values(col: &Column, name: &str) -> Result<Vec<f64>, ChartError> {
    let mut values = col.numeric_values();
    if values.is_empty() {
        return Err(ChartError::NotNumeric(name.to_string()));
    }
    values.sort_by(f64::total_cmp);
    Ok(values)
}

// ---------------------------------------------------------------------------
// Histogram with density overlay
// ---------------------------------------------------------------------------

const MAX_BINS: usize = 50;
const DENSITY_SAMPLES: usize = 128;

fn build_histogram(column: &str, values: &[f64]) -> Result<ChartData, ChartError> {
    let n = values.len();
    let min = values[0];
    let max = values[n - 1];

    // Square-root rule, clamped.
    let bin_count = ((n as f64).sqrt().ceil() as usize).clamp(1, MAX_BINS);

    let span = max - min;
    let bin_width = if span > 0.0 { span / bin_count as f64 } else { 1.0 };

    let mut counts = vec![0usize; bin_count];
    for &v in values {
        let idx = if span > 0.0 {
            (((v - min) / bin_width) as usize).min(bin_count - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            center: min + (i as f64 + 0.5) * bin_width,
            count,
        })
        .collect();

    Ok(ChartData::Histogram {
        column: column.to_string(),
        density: density_curve(values, bin_width),
        bins,
        bin_width,
    })
}

/// Gaussian KDE with Silverman's bandwidth, scaled to count space
/// (`density × n × bin_width`) so it overlays the frequency bars.
fn density_curve(values: &[f64], bin_width: f64) -> Vec<[f64; 2]> {
    let n = values.len();
    let bandwidth = silverman_bandwidth(values);
    if !(bandwidth > 0.0) || !bandwidth.is_finite() {
        return Vec::new();
    }

    let lo = values[0] - 3.0 * bandwidth;
    let hi = values[n - 1] + 3.0 * bandwidth;
    let step = (hi - lo) / (DENSITY_SAMPLES - 1) as f64;
    let norm = 1.0 / ((n as f64) * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    (0..DENSITY_SAMPLES)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}

fn silverman_bandwidth(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let sigma = variance.sqrt();

    let iqr = percentile_sorted(values, 0.75) - percentile_sorted(values, 0.25);
    let spread = if iqr > 0.0 {
        sigma.min(iqr / 1.34)
    } else {
        sigma
    };
    0.9 * spread * n.powf(-0.2)
}

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

/// Pairs the selected column (x) with the first *other* numeric column in
/// file order (y). The pairing is implicit, not user-chosen.
fn build_scatter(dataset: &Dataset, column: &str) -> Result<ChartData, ChartError> {
    let x_col = dataset
        .column(column)
        .ok_or_else(|| ChartError::UnknownColumn(column.to_string()))?;
    if !x_col.kind.is_numeric() {
        return Err(ChartError::NotNumeric(column.to_string()));
    }
    let y_col = dataset
        .first_other_numeric(column)
        .ok_or(ChartError::NoSecondNumeric)?;

    // Row-wise pairing; rows where either cell is null are dropped.
    let points: Vec<[f64; 2]> = x_col
        .cells
        .iter()
        .zip(&y_col.cells)
        .filter_map(|(x, y)| Some([x.as_f64()?, y.as_f64()?]))
        .collect();

    if points.is_empty() {
        return Err(ChartError::NotNumeric(column.to_string()));
    }

    Ok(ChartData::Scatter {
        x_column: column.to_string(),
        y_column: y_col.name.clone(),
        points,
    })
}

// ---------------------------------------------------------------------------
// Box plot
// ---------------------------------------------------------------------------

fn build_boxplot(column: &str, values: &[f64]) -> Result<ChartData, ChartError> {
    let q1 = percentile_sorted(values, 0.25);
    let q3 = percentile_sorted(values, 0.75);
    let iqr = q3 - q1;

    // Whiskers at 1.5×IQR, clamped to actual data points.
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;
    let lower_whisker = values
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .unwrap_or(values[0]);
    let upper_whisker = values
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(values[values.len() - 1]);

    let outliers = values
        .iter()
        .copied()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    Ok(ChartData::BoxPlot {
        column: column.to_string(),
        summary: BoxSummary {
            lower_whisker,
            quartile1: q1,
            median: median_sorted(values),
            quartile3: q3,
            upper_whisker,
            outliers,
        },
    })
}

/// Linear-interpolated percentile. `values` must be sorted and non-empty.
fn percentile_sorted(values: &[f64], q: f64) -> f64 {
    let n = values.len();
    if n == 1 {
        return values[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let frac = pos - lo as f64;
    if lo + 1 < n {
        values[lo] * (1.0 - frac) + values[lo + 1] * frac
    } else {
        values[n - 1]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::data::loader::read_csv;

    fn parse(text: &str) -> Dataset {
        read_csv(text.as_bytes()).unwrap()
    }

    #[test]
    fn no_dataset_fails() {
        assert_eq!(
            build_chart(None, "v", ChartKind::Histogram),
            Err(ChartError::NoDataset)
        );
    }

    #[test]
    fn unknown_column_fails() {
        let ds = parse("v\n1\n");
        assert_eq!(
            build_chart(Some(&ds), "nope", ChartKind::BoxPlot),
            Err(ChartError::UnknownColumn("nope".into()))
        );
    }

    #[test]
    fn histogram_bins_cover_every_value() {
        let ds = parse("v\n1\n2\n2\n3\n4\n5\n6\n7\n8\n9\n");
        let ChartData::Histogram { bins, density, .. } =
            build_chart(Some(&ds), "v", ChartKind::Histogram).unwrap()
        else {
            panic!("expected histogram");
        };
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 10);
        assert!(!density.is_empty());
    }

    #[test]
    fn histogram_of_constant_column_is_a_single_full_bin() {
        let ds = parse("v\n5\n5\n5\n");
        let ChartData::Histogram { bins, density, .. } =
            build_chart(Some(&ds), "v", ChartKind::Histogram).unwrap()
        else {
            panic!("expected histogram");
        };
        assert!(bins.iter().any(|b| b.count == 3));
        // Zero spread: no density curve rather than a NaN curve.
        assert!(density.is_empty());
    }

    #[test]
    fn scatter_needs_a_second_numeric_column() {
        let ds = parse("x,label\n1,a\n2,b\n");
        assert_eq!(
            build_chart(Some(&ds), "x", ChartKind::Scatter),
            Err(ChartError::NoSecondNumeric)
        );
    }

    #[test]
    fn scatter_pairs_with_first_other_numeric_in_file_order() {
        let ds = parse("x,label,y,z\n1,a,10,100\n2,b,20,200\n");
        let ChartData::Scatter {
            x_column,
            y_column,
            points,
        } = build_chart(Some(&ds), "x", ChartKind::Scatter).unwrap()
        else {
            panic!("expected scatter");
        };
        assert_eq!(x_column, "x");
        assert_eq!(y_column, "y");
        assert_eq!(points, vec![[1.0, 10.0], [2.0, 20.0]]);
    }

    #[test]
    fn scatter_drops_rows_with_nulls_on_either_axis() {
        let ds = parse("x,y\n1,10\n,20\n3,\n4,40\n");
        let ChartData::Scatter { points, .. } =
            build_chart(Some(&ds), "x", ChartKind::Scatter).unwrap()
        else {
            panic!("expected scatter");
        };
        assert_eq!(points, vec![[1.0, 10.0], [4.0, 40.0]]);
    }

    #[test]
    fn boxplot_quartiles_interpolate() {
        let ds = parse("v\n1\n2\n3\n4\n");
        let ChartData::BoxPlot { summary, .. } =
            build_chart(Some(&ds), "v", ChartKind::BoxPlot).unwrap()
        else {
            panic!("expected box plot");
        };
        assert_relative_eq!(summary.quartile1, 1.75);
        assert_relative_eq!(summary.median, 2.5);
        assert_relative_eq!(summary.quartile3, 3.25);
        assert!(summary.outliers.is_empty());
        assert_relative_eq!(summary.lower_whisker, 1.0);
        assert_relative_eq!(summary.upper_whisker, 4.0);
    }

    #[test]
    fn boxplot_flags_outliers_beyond_whiskers() {
        let ds = parse("v\n1\n2\n2\n3\n2\n3\n2\n100\n");
        let ChartData::BoxPlot { summary, .. } =
            build_chart(Some(&ds), "v", ChartKind::BoxPlot).unwrap()
        else {
            panic!("expected box plot");
        };
        assert_eq!(summary.outliers, vec![100.0]);
        assert!(summary.upper_whisker < 100.0);
    }

    #[test]
    fn text_column_cannot_be_charted() {
        let ds = parse("v\nfoo\nbar\n");
        assert_eq!(
            build_chart(Some(&ds), "v", ChartKind::Histogram),
            Err(ChartError::NotNumeric("v".into()))
        );
    }
}
