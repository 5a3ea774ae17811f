/// Data layer: core types, loading, and statistics.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, infer column kinds → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Column>, numeric-column index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean / median / mode → ColumnSummary
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
