//! Contracts for document sinks.
//!
//! A [`DocumentFactory`] turns an output stream into a [`Document`], a scoped
//! resource that hands out [`Sheet`] writers. Documents and sheets must be
//! finished exactly once; [`FileStreamExporter`] guarantees that on every
//! exit path, so implementations can treat `finish` as their single flush
//! point.
//!
//! [`FileStreamExporter`]: crate::export::FileStreamExporter

use super::types::CellValue;
use crate::common::Result;
use std::io::Write;

/// Factory creating documents of one concrete format.
pub trait DocumentFactory {
    /// File extension of the produced format, with or without a leading dot.
    ///
    /// May be empty when the format has no conventional extension.
    fn file_extension(&self) -> &str;

    /// Creates a document that serializes into `stream`.
    ///
    /// The stream is borrowed for the document's lifetime; opening and
    /// closing it stays with the caller.
    fn create_document<'a>(&self, stream: &'a mut dyn Write) -> Result<Box<dyn Document + 'a>>;
}

/// A document under construction, scoped to an output stream.
pub trait Document {
    /// Creates the next sheet of the document.
    ///
    /// The previous sheet must be finished first; sheets are written
    /// strictly one after another.
    fn create_sheet(&mut self, name: &str) -> Result<Box<dyn Sheet + '_>>;

    /// Completes the document, flushing whatever the format buffers.
    ///
    /// Called exactly once, after all sheets are finished or on the unwind
    /// path of a failed export.
    fn finish(&mut self) -> Result<()>;
}

/// A sheet under construction inside a [`Document`].
pub trait Sheet {
    /// Writes the header row. Precedes all data rows; at most one per sheet.
    fn add_header_row(&mut self, labels: &[String]) -> Result<()>;

    /// Appends one data row, preserving cell order.
    fn add_row(&mut self, cells: &[CellValue]) -> Result<()>;

    /// Completes the sheet. Called exactly once, even when row writing
    /// failed partway.
    fn finish(&mut self) -> Result<()>;
}
