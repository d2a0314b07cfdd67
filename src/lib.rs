//! Sheetport - streaming export of tabular sheet data
//!
//! This library orchestrates exports: it takes an export task (a named
//! collection of sheet-like row/column data), proposes a sanitized,
//! date-stamped filename, and streams the task's data into a document
//! created by a pluggable document factory.
//!
//! # Features
//!
//! - **Pluggable sinks**: the [`DocumentFactory`] / [`Document`] / [`Sheet`]
//!   traits abstract over the target document format
//! - **Lazy row data**: row records are pulled from the task on demand and
//!   written straight to the output stream
//! - **Guaranteed cleanup**: documents and sheets are released on every exit
//!   path, including failures raised mid-sheet
//! - **Deterministic filenames**: the embedded date comes from an injectable
//!   clock, so filename generation is testable
//! - **Delimited text adapter**: a shipped [`DocumentFactory`] writing sheets
//!   as CSV or TSV
//!
//! # Example - Exporting to CSV
//!
//! ```
//! use sheetport::formats::DelimitedDocumentFactory;
//! use sheetport::{
//!     CellValue, ExportTask, FileStreamExporter, RowIterator, SheetExportTask,
//!     SheetTaskIterator, VecRows, VecSheetTasks,
//! };
//!
//! struct Totals;
//!
//! impl SheetExportTask for Totals {
//!     fn name(&self) -> &str {
//!         "Totals"
//!     }
//!
//!     fn column_labels(&self) -> Vec<String> {
//!         vec!["Region".into(), "Amount".into()]
//!     }
//!
//!     fn rows(&self) -> Box<dyn RowIterator<'_> + '_> {
//!         Box::new(VecRows::new(vec![
//!             vec![CellValue::String("North".into()), CellValue::Int(1250)],
//!             vec![CellValue::String("South".into()), CellValue::Int(980)],
//!         ]))
//!     }
//! }
//!
//! struct QuarterlyReport;
//!
//! impl ExportTask for QuarterlyReport {
//!     fn name(&self) -> &str {
//!         "Quarterly report"
//!     }
//!
//!     fn file_extension(&self) -> &str {
//!         "csv"
//!     }
//!
//!     fn sheet_tasks(&self) -> Box<dyn SheetTaskIterator<'_> + '_> {
//!         Box::new(VecSheetTasks::new(vec![Box::new(Totals)]))
//!     }
//! }
//!
//! let exporter = FileStreamExporter::new(DelimitedDocumentFactory::csv(), QuarterlyReport);
//!
//! // e.g. "Quarterly report 20260829.csv"
//! let file_name = exporter.file_name()?;
//!
//! let mut buffer = Vec::new();
//! exporter.export_to_stream(&mut buffer)?;
//! # Ok::<(), sheetport::Error>(())
//! ```

/// Shared infrastructure: error types and the clock abstraction
pub mod common;

/// Export orchestration: collaborator contracts, filename derivation and the
/// exporter itself
pub mod export;

// Re-export commonly used types for convenience
pub use common::{Clock, Error, FixedClock, Result, SystemClock};
pub use export::formats;
pub use export::{
    CellValue, Document, DocumentFactory, ExportTask, FileStreamExporter, RowIterator, Sheet,
    SheetExportTask, SheetTaskIterator, VecRows, VecSheetTasks,
};
