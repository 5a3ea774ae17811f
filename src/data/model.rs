use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    /// An empty cell. Skipped by inference and statistics.
    Null,
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        // Numeric variants compare by value so 2 and 2.0 order consistently.
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Null, _) => std::cmp::Ordering::Less,
            (_, Null) => std::cmp::Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
            (Text(_), _) => std::cmp::Ordering::Greater,
            (_, Text(_)) => std::cmp::Ordering::Less,
            (a, b) => {
                let fa = a.as_f64().unwrap_or(f64::NAN);
                let fb = b.as_f64().unwrap_or(f64::NAN);
                fa.total_cmp(&fb)
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the cell as an `f64`, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

}

// ---------------------------------------------------------------------------
// Column – one named column with an inferred kind
// ---------------------------------------------------------------------------

/// The inferred dtype of a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-null cell parsed as i64.
    Integer,
    /// Every non-null cell parsed as f64 (at least one was not an integer).
    Float,
    /// Anything else.
    Text,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }
}

/// A single named column of the table, in file cell order.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Non-null cells as `f64`, in row order. Empty for text columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells.iter().filter_map(CellValue::as_f64).collect()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Columns keep the file's header order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<Column>,
    /// Number of data rows (excluding the header).
    pub rows: usize,
}

impl Dataset {
    /// Names of numeric columns, in the file's original column order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.kind.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The first numeric column other than `name`, in file order.
    pub fn first_other_numeric(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name != name && c.kind.is_numeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            columns: vec![
                Column {
                    name: "a".into(),
                    kind: ColumnKind::Integer,
                    cells: vec![CellValue::Integer(1), CellValue::Null],
                },
                Column {
                    name: "b".into(),
                    kind: ColumnKind::Text,
                    cells: vec![CellValue::Text("x".into()), CellValue::Text("y".into())],
                },
                Column {
                    name: "c".into(),
                    kind: ColumnKind::Float,
                    cells: vec![CellValue::Float(0.5), CellValue::Float(1.5)],
                },
            ],
            rows: 2,
        }
    }

    #[test]
    fn numeric_columns_preserve_file_order_and_skip_text() {
        assert_eq!(dataset().numeric_columns(), vec!["a", "c"]);
    }

    #[test]
    fn numeric_values_skip_nulls() {
        let ds = dataset();
        assert_eq!(ds.column("a").unwrap().numeric_values(), vec![1.0]);
    }

    #[test]
    fn first_other_numeric_skips_text_columns() {
        let ds = dataset();
        assert_eq!(ds.first_other_numeric("a").unwrap().name, "c");
        assert_eq!(ds.first_other_numeric("c").unwrap().name, "a");
    }

    #[test]
    fn cell_ordering_is_numeric_across_variants() {
        let mut vals = vec![
            CellValue::Float(2.5),
            CellValue::Integer(3),
            CellValue::Integer(1),
        ];
        vals.sort();
        assert_eq!(
            vals,
            vec![
                CellValue::Integer(1),
                CellValue::Float(2.5),
                CellValue::Integer(3),
            ]
        );
    }
}
