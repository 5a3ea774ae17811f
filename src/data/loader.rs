use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{CellValue, Column, ColumnKind, Dataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a CSV file. First row is the header.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(file)
}

/// Parse CSV from any reader into a [`Dataset`].
///
/// Each column's kind is inferred from its cells: `Integer` if every
/// non-empty cell parses as i64, `Float` if every non-empty cell parses as
/// f64, otherwise `Text`. Empty cells become `Null` and do not demote a
/// column.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() {
        bail!("CSV has no header row");
    }

    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    let mut rows = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        // The csv reader rejects ragged rows itself, so indexing is safe.
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col, field) in record.iter().enumerate() {
            raw_columns[col].push(field.trim().to_string());
        }
        rows += 1;
    }

    let columns = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, raw)| build_column(name, &raw))
        .collect();

    Ok(Dataset { columns, rows })
}

// ---------------------------------------------------------------------------
// Column type inference
// ---------------------------------------------------------------------------

fn build_column(name: String, raw: &[String]) -> Column {
    let kind = infer_kind(raw);
    let cells = raw
        .iter()
        .map(|s| parse_cell(s, kind))
        .collect();
    Column { name, kind, cells }
}

/// Infer a whole column's kind from its raw cells.
///
/// Blank cells are ignored; a column with only blank cells is `Text` so it
/// never shows up in the numeric selector.
fn infer_kind(raw: &[String]) -> ColumnKind {
    let mut seen_value = false;
    let mut all_int = true;

    for s in raw {
        if s.is_empty() {
            continue;
        }
        seen_value = true;
        if s.parse::<i64>().is_ok() {
            continue;
        }
        all_int = false;
        if s.parse::<f64>().is_err() {
            return ColumnKind::Text;
        }
    }

    match (seen_value, all_int) {
        (false, _) => ColumnKind::Text,
        (true, true) => ColumnKind::Integer,
        (true, false) => ColumnKind::Float,
    }
}

fn parse_cell(s: &str, kind: ColumnKind) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    match kind {
        ColumnKind::Integer => s
            .parse::<i64>()
            .map(CellValue::Integer)
            .unwrap_or(CellValue::Null),
        ColumnKind::Float => s
            .parse::<f64>()
            .map(CellValue::Float)
            .unwrap_or(CellValue::Null),
        ColumnKind::Text => CellValue::Text(s.to_string()),
    }
}
