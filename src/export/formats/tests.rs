//! Tests for the delimited text sink.

use super::*;
use crate::common::{Error, FixedClock};
use crate::export::{
    CellValue, Document, DocumentFactory, ExportTask, FileStreamExporter, RowIterator, Sheet,
    SheetExportTask, SheetTaskIterator, VecRows, VecSheetTasks,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::{Read, Seek, SeekFrom};

fn write_one_sheet(factory: &DelimitedDocumentFactory, rows: &[Vec<CellValue>]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut document = factory.create_document(&mut buffer).unwrap();
    let mut sheet = document.create_sheet("People").unwrap();
    sheet
        .add_header_row(&["name".to_owned(), "age".to_owned()])
        .unwrap();
    for row in rows {
        sheet.add_row(row).unwrap();
    }
    sheet.finish().unwrap();
    drop(sheet);
    document.finish().unwrap();
    drop(document);
    buffer
}

#[test]
fn test_csv_single_sheet() {
    let output = write_one_sheet(
        &DelimitedDocumentFactory::csv(),
        &[
            vec![CellValue::String("John".into()), CellValue::Int(25)],
            vec![CellValue::String("Jane".into()), CellValue::Int(30)],
        ],
    );

    assert_eq!(output, b"# People\nname,age\nJohn,25\nJane,30\n");
}

#[test]
fn test_tsv_uses_tab_and_reports_extension() {
    let factory = DelimitedDocumentFactory::tsv();
    assert_eq!(factory.file_extension(), "tsv");

    let output = write_one_sheet(
        &factory,
        &[vec![CellValue::String("John".into()), CellValue::Int(25)]],
    );

    assert_eq!(output, b"# People\nname\tage\nJohn\t25\n");
}

#[test]
fn test_fields_are_quoted_when_needed() {
    let output = write_one_sheet(
        &DelimitedDocumentFactory::csv(),
        &[
            vec![
                CellValue::String("Smith, John".into()),
                CellValue::Int(25),
            ],
            vec![
                CellValue::String("Jane \"JJ\" Doe".into()),
                CellValue::Int(30),
            ],
            vec![CellValue::String("multi\nline".into()), CellValue::Int(1)],
        ],
    );

    assert_eq!(
        output,
        b"# People\nname,age\n\"Smith, John\",25\n\"Jane \"\"JJ\"\" Doe\",30\n\"multi\nline\",1\n"
            .as_slice()
    );
}

#[test]
fn test_cell_value_rendering() {
    let timestamp: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    let output = write_one_sheet(
        &DelimitedDocumentFactory::csv(),
        &[vec![
            CellValue::Empty,
            CellValue::Bool(true),
            CellValue::Float(2.5),
            CellValue::DateTime(timestamp),
        ]],
    );

    assert_eq!(output, b"# People\nname,age\n,TRUE,2.5,2024-03-05 14:30:00\n");
}

#[test]
fn test_sheets_separated_by_blank_line() {
    let factory = DelimitedDocumentFactory::csv();
    let mut buffer = Vec::new();
    let mut document = factory.create_document(&mut buffer).unwrap();

    let mut first = document.create_sheet("first").unwrap();
    first.add_header_row(&["a".to_owned()]).unwrap();
    first.add_row(&[CellValue::Int(1)]).unwrap();
    first.finish().unwrap();
    drop(first);

    let mut second = document.create_sheet("second").unwrap();
    second.add_header_row(&["b".to_owned()]).unwrap();
    second.finish().unwrap();
    drop(second);

    document.finish().unwrap();
    drop(document);

    assert_eq!(buffer, b"# first\na\n1\n\n# second\nb\n");
}

#[test]
fn test_comment_disabled_drops_title_lines() {
    let factory =
        DelimitedDocumentFactory::new(DelimitedConfig::csv().with_comment(None));
    let output = write_one_sheet(
        &factory,
        &[vec![CellValue::String("John".into()), CellValue::Int(25)]],
    );

    assert_eq!(output, b"name,age\nJohn,25\n");
}

#[test]
fn test_bom_written_once_at_stream_start() {
    let factory =
        DelimitedDocumentFactory::new(DelimitedConfig::csv().with_write_bom(true));
    let output = write_one_sheet(&factory, &[]);

    assert_eq!(&output[..3], &[0xEF, 0xBB, 0xBF]);
    assert_eq!(&output[3..], b"# People\nname,age\n");
}

#[test]
fn test_sheet_name_with_line_break_is_rejected() {
    let factory = DelimitedDocumentFactory::csv();
    let mut buffer = Vec::new();
    let mut document = factory.create_document(&mut buffer).unwrap();

    let result = document.create_sheet("bad\nname").map(|_| ());
    assert!(matches!(result, Err(Error::InvalidSheetName(_))));
}

struct Totals;

impl SheetExportTask for Totals {
    fn name(&self) -> &str {
        "Totals"
    }

    fn column_labels(&self) -> Vec<String> {
        vec!["Region".into(), "Amount".into()]
    }

    fn rows(&self) -> Box<dyn RowIterator<'_> + '_> {
        Box::new(VecRows::new(vec![
            vec![CellValue::String("North".into()), CellValue::Int(1250)],
            vec![CellValue::String("South".into()), CellValue::Int(980)],
        ]))
    }
}

struct QuarterlyReport;

impl ExportTask for QuarterlyReport {
    fn name(&self) -> &str {
        "Q1 report"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn sheet_tasks(&self) -> Box<dyn SheetTaskIterator<'_> + '_> {
        Box::new(VecSheetTasks::new(vec![Box::new(Totals)]))
    }
}

#[test]
fn test_export_to_file_end_to_end() {
    let exporter = FileStreamExporter::with_clock(
        DelimitedDocumentFactory::csv(),
        QuarterlyReport,
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
    );

    assert_eq!(exporter.file_name().unwrap(), "Q1 report 20240305.csv");

    let mut file = tempfile::tempfile().unwrap();
    exporter.export_to_stream(&mut file).unwrap();

    let mut contents = String::new();
    file.seek(SeekFrom::Start(0)).unwrap();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(
        contents,
        "# Totals\nRegion,Amount\nNorth,1250\nSouth,980\n"
    );
}
