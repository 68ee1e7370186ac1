//! Interaction table I/O.

pub mod reader;
pub mod writer;

use std::path::Path;

use crate::types::{GraphError, GraphResult};

pub use reader::{CsvReader, ImportReport, SkippedRow};
pub use writer::CsvWriter;

/// Accept only paths with a `.csv` extension (any case).
pub fn ensure_csv_path(path: &Path) -> GraphResult<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(())
    } else {
        Err(GraphError::NotCsv(path.to_path_buf()))
    }
}
