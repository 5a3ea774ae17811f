/// Presentation glue: toolbar, dialogs, and chart rendering.

pub mod panels;
pub mod plot;
