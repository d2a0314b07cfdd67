//! Common types for export operations.

use chrono::NaiveDateTime;

/// Types of data that can be placed in an exported cell.
///
/// Rendering is left to the document sink; a CSV sink and a spreadsheet sink
/// are free to serialize the same value differently.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Date/time value
    DateTime(NaiveDateTime),
}
