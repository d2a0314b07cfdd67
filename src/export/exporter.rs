//! Takes an export task, proposes a filename, and writes the task's data to
//! a stream.

use super::document::{Document, DocumentFactory, Sheet};
use super::filename::encode_file_name;
use super::task::{ExportTask, SheetExportTask};
use crate::common::{Clock, Error, Result, SystemClock};
use log::{debug, trace};
use std::io::Write;

/// Drives one export: filename proposal plus a single pass that streams every
/// sheet of the task into a freshly created document.
///
/// Each call to [`export_to_stream`](Self::export_to_stream) is independent;
/// the exporter keeps no state between calls.
pub struct FileStreamExporter<F, T> {
    factory: F,
    task: T,
    clock: Box<dyn Clock>,
}

impl<F, T> FileStreamExporter<F, T>
where
    F: DocumentFactory,
    T: ExportTask,
{
    /// Creates an exporter using the system clock for filename dates.
    pub fn new(factory: F, task: T) -> Self {
        Self::with_clock(factory, task, SystemClock)
    }

    /// Creates an exporter with an explicit clock.
    pub fn with_clock(factory: F, task: T, clock: impl Clock + 'static) -> Self {
        Self {
            factory,
            task,
            clock: Box::new(clock),
        }
    }

    /// Gets the proposed filename: the sanitized task name, a space, the
    /// current date as `YYYYMMDD`, and the factory's extension.
    ///
    /// The extension is normalized to start with a dot; an empty extension
    /// yields no suffix at all rather than a dangling dot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTaskName`] when the task's name is empty.
    pub fn file_name(&self) -> Result<String> {
        let name = self.task.name();
        if name.is_empty() {
            return Err(Error::MissingTaskName);
        }

        let extension = match self.factory.file_extension() {
            "" => String::new(),
            ext if ext.starts_with('.') => ext.to_owned(),
            ext => format!(".{ext}"),
        };
        let date = self.clock.today().format("%Y%m%d");

        Ok(format!("{} {date}{extension}", encode_file_name(name)))
    }

    /// Exports the task's data to the given stream.
    ///
    /// The stream is only written to; opening and closing it stays with the
    /// caller. On success the stream holds one complete, closed document. On
    /// failure whatever was already flushed remains in the stream, but every
    /// document and sheet opened up to that point has been finished.
    ///
    /// # Errors
    ///
    /// The first failure raised by the factory, the document, a sheet, or
    /// the task's row enumeration aborts the export and propagates
    /// unchanged.
    pub fn export_to_stream(&self, stream: &mut dyn Write) -> Result<()> {
        debug!("exporting task {:?}", self.task.name());

        let mut document = self.factory.create_document(stream)?;
        let written = self.write_sheets(document.as_mut());
        let finished = document.finish();

        // First error wins; a finish failure only surfaces when the body
        // succeeded.
        written.and(finished)
    }

    fn write_sheets(&self, document: &mut dyn Document) -> Result<()> {
        let mut sheet_tasks = self.task.sheet_tasks();
        let mut count = 0usize;

        while let Some(sheet_task) = sheet_tasks.next() {
            let mut sheet = document.create_sheet(sheet_task.name())?;
            let written = Self::write_rows(sheet.as_mut(), sheet_task.as_ref());
            let finished = sheet.finish();
            written.and(finished)?;
            count += 1;
        }

        debug!("export finished with {count} sheet(s)");
        Ok(())
    }

    fn write_rows(sheet: &mut dyn Sheet, sheet_task: &dyn SheetExportTask) -> Result<()> {
        sheet.add_header_row(&sheet_task.column_labels())?;

        let mut rows = sheet_task.rows();
        let mut count = 0usize;
        while let Some(row) = rows.next() {
            sheet.add_row(&row?)?;
            count += 1;
        }

        trace!("sheet {:?}: wrote {count} row(s)", sheet_task.name());
        Ok(())
    }
}
