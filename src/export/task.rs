//! Contracts for export data providers.
//!
//! An [`ExportTask`] names the export and yields one [`SheetExportTask`] per
//! logical sheet; each sheet task supplies fixed column labels and a lazy
//! sequence of row records. Sequences are finite and consumed exactly once
//! per export; whether re-enumeration yields the same data is the provider's
//! business, the exporter never enumerates twice.

use super::types::CellValue;
use crate::common::Result;

/// Lazy sequence of sheet export tasks.
pub trait SheetTaskIterator<'a> {
    /// Get the next sheet export task.
    fn next(&mut self) -> Option<Box<dyn SheetExportTask + 'a>>;
}

/// Lazy, fallible sequence of row records.
///
/// A provider may discover failures mid-iteration (a dropped database
/// connection, a short read); yielding `Some(Err(..))` aborts the export
/// after open resources are released.
pub trait RowIterator<'a> {
    /// Get the next row (as a vector of cell values).
    fn next(&mut self) -> Option<Result<Vec<CellValue>>>;
}

/// Interface that describes an export task.
pub trait ExportTask {
    /// Name of the export, used to derive the output filename.
    fn name(&self) -> &str;

    /// File extension the task suggests for file output.
    ///
    /// Advisory: filename derivation reads the document factory's extension,
    /// since the factory decides the actual output format. Callers that pick
    /// a factory based on the task can consult this value.
    fn file_extension(&self) -> &str;

    /// Enumerates the sheet export tasks of this export, in output order.
    fn sheet_tasks(&self) -> Box<dyn SheetTaskIterator<'_> + '_>;
}

/// Interface that describes a single sheet of an export task.
pub trait SheetExportTask {
    /// Name of the sheet inside the exported document.
    fn name(&self) -> &str;

    /// Ordered column labels for the header row. Read once per export.
    fn column_labels(&self) -> Vec<String>;

    /// Enumerates the row records of this sheet, in output order.
    fn rows(&self) -> Box<dyn RowIterator<'_> + '_>;
}

/// Sheet task sequence over a pre-built list of boxed sheet tasks.
pub struct VecSheetTasks<'a> {
    tasks: std::vec::IntoIter<Box<dyn SheetExportTask + 'a>>,
}

impl<'a> VecSheetTasks<'a> {
    /// Creates a sequence yielding `tasks` in order.
    pub fn new(tasks: Vec<Box<dyn SheetExportTask + 'a>>) -> Self {
        Self {
            tasks: tasks.into_iter(),
        }
    }
}

impl<'a, 'b: 'a> SheetTaskIterator<'a> for VecSheetTasks<'b> {
    fn next(&mut self) -> Option<Box<dyn SheetExportTask + 'a>> {
        match self.tasks.next() {
            Some(task) => Some(task),
            None => None,
        }
    }
}

/// Row sequence over pre-built row records.
pub struct VecRows {
    rows: std::vec::IntoIter<Vec<CellValue>>,
}

impl VecRows {
    /// Creates a sequence yielding `rows` in order.
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            rows: rows.into_iter(),
        }
    }
}

impl<'a> RowIterator<'a> for VecRows {
    fn next(&mut self) -> Option<Result<Vec<CellValue>>> {
        self.rows.next().map(Ok)
    }
}
