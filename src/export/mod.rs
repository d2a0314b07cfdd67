//! Export orchestration.
//!
//! The exporter pulls sheet and row data from an [`ExportTask`] and pushes it
//! into a document created by a [`DocumentFactory`]. Both sides are trait
//! contracts; the only concrete component here is [`FileStreamExporter`],
//! which owns the ordering and cleanup rules:
//!
//! - sheets are written in task-declared order, header row first;
//! - row data is consumed lazily, exactly once, in order;
//! - every document and sheet that was opened is released on every exit
//!   path, and the first error wins.

// Submodule declarations
pub mod document;
pub mod exporter;
pub mod filename;
pub mod formats;
pub mod task;
pub mod types;

// Re-exports
pub use document::{Document, DocumentFactory, Sheet};
pub use exporter::FileStreamExporter;
pub use task::{
    ExportTask, RowIterator, SheetExportTask, SheetTaskIterator, VecRows, VecSheetTasks,
};
pub use types::CellValue;
