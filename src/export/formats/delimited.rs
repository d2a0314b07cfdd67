//! Delimited text (CSV/TSV) document sink.
//!
//! Sheets are written one after another into the same text stream. Each
//! sheet after the first is preceded by a blank line, and when a comment
//! character is configured every sheet starts with a `# <name>` title line.

use crate::common::{Error, Result};
use crate::export::document::{Document, DocumentFactory, Sheet};
use crate::export::types::CellValue;
use std::io::Write;

/// UTF-8 byte order mark, optionally written at the start of the stream.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Configuration for delimited text output.
#[derive(Debug, Clone)]
pub struct DelimitedConfig {
    pub delimiter: u8,
    pub quote: u8,
    /// Character prefixing sheet title lines; `None` drops the title lines.
    pub comment: Option<u8>,
    /// Write a UTF-8 BOM at the start of the stream. Some spreadsheet
    /// applications need it to pick the right encoding.
    pub write_bom: bool,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            comment: Some(b'#'),
            write_bom: false,
        }
    }
}

impl DelimitedConfig {
    pub fn csv() -> Self {
        Self::default()
    }

    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_write_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }
}

/// Document factory producing delimited text documents.
#[derive(Debug, Clone, Default)]
pub struct DelimitedDocumentFactory {
    config: DelimitedConfig,
}

impl DelimitedDocumentFactory {
    pub fn new(config: DelimitedConfig) -> Self {
        Self { config }
    }

    /// Factory with comma-separated output.
    pub fn csv() -> Self {
        Self::new(DelimitedConfig::csv())
    }

    /// Factory with tab-separated output.
    pub fn tsv() -> Self {
        Self::new(DelimitedConfig::tsv())
    }
}

impl DocumentFactory for DelimitedDocumentFactory {
    fn file_extension(&self) -> &str {
        if self.config.delimiter == b'\t' {
            "tsv"
        } else {
            "csv"
        }
    }

    fn create_document<'a>(
        &self,
        stream: &'a mut dyn Write,
    ) -> Result<Box<dyn Document + 'a>> {
        if self.config.write_bom {
            stream.write_all(&UTF8_BOM)?;
        }
        Ok(Box::new(DelimitedDocument {
            stream,
            config: self.config.clone(),
            sheets_written: 0,
        }))
    }
}

struct DelimitedDocument<'a> {
    stream: &'a mut dyn Write,
    config: DelimitedConfig,
    sheets_written: usize,
}

impl Document for DelimitedDocument<'_> {
    fn create_sheet(&mut self, name: &str) -> Result<Box<dyn Sheet + '_>> {
        // A line break in the title line would corrupt the record structure.
        if name.contains('\n') || name.contains('\r') {
            return Err(Error::InvalidSheetName(name.to_owned()));
        }

        if self.sheets_written > 0 {
            self.stream.write_all(b"\n")?;
        }
        if let Some(comment) = self.config.comment {
            self.stream.write_all(&[comment, b' '])?;
            self.stream.write_all(name.as_bytes())?;
            self.stream.write_all(b"\n")?;
        }
        self.sheets_written += 1;

        Ok(Box::new(DelimitedSheet { document: self }))
    }

    fn finish(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }
}

struct DelimitedSheet<'d, 'a> {
    document: &'d mut DelimitedDocument<'a>,
}

impl DelimitedSheet<'_, '_> {
    fn write_record(&mut self, fields: &[String]) -> Result<()> {
        let delimiter = self.document.config.delimiter;
        let quote = self.document.config.quote;

        for (col_idx, field) in fields.iter().enumerate() {
            if col_idx > 0 {
                self.document.stream.write_all(&[delimiter])?;
            }

            let needs_quote = field.contains(char::from(delimiter))
                || field.contains(char::from(quote))
                || field.contains('\n')
                || field.contains('\r');

            if needs_quote {
                let escaped =
                    field.replace(char::from(quote), &format!("{0}{0}", char::from(quote)));
                self.document.stream.write_all(&[quote])?;
                self.document.stream.write_all(escaped.as_bytes())?;
                self.document.stream.write_all(&[quote])?;
            } else {
                self.document.stream.write_all(field.as_bytes())?;
            }
        }
        self.document.stream.write_all(b"\n")?;
        Ok(())
    }
}

impl Sheet for DelimitedSheet<'_, '_> {
    fn add_header_row(&mut self, labels: &[String]) -> Result<()> {
        self.write_record(labels)
    }

    fn add_row(&mut self, cells: &[CellValue]) -> Result<()> {
        let fields: Vec<String> = cells.iter().map(render_cell).collect();
        self.write_record(&fields)
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

fn render_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => f.to_string(),
        CellValue::String(s) => s.clone(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
