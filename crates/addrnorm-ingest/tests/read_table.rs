use std::io::Write;

use addrnorm_ingest::{IngestError, ReadOptions, read_table};
use addrnorm_model::CellValue;
use tempfile::NamedTempFile;

const HEADER: &str = "1ST LINE OF NAME & ADDRESS,2ND LINE OF NAME & ADDRESS,\
3RD LINE OF NAME & ADDRESS,4TH LINE OF NAME & ADDRESS,5TH LINE OF NAME & ADDRESS,\
6TH LINE OF NAME & ADDRESS,7TH LINE OF NAME & ADDRESS,ZIP CODE FOR SORTING,CUSIP";

fn temp_csv(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file
}

#[test]
fn reads_latin1_source_by_default() {
    let mut bytes = format!("{HEADER}\n").into_bytes();
    bytes.extend_from_slice(b"CR\xc8ME CORP,1 RUE,,,MONTR\xc9AL QC,,,62701,CU1\n");
    let file = temp_csv(&bytes);

    let table = read_table(file.path(), &ReadOptions::default()).expect("read source");

    assert_eq!(table.height(), 1);
    assert_eq!(
        table.value(0, "1ST LINE OF NAME & ADDRESS"),
        Some(&CellValue::text("CRÈME CORP"))
    );
    assert_eq!(
        table.value(0, "5TH LINE OF NAME & ADDRESS"),
        Some(&CellValue::text("MONTRÉAL QC"))
    );
    assert_eq!(
        table.value(0, "3RD LINE OF NAME & ADDRESS"),
        Some(&CellValue::Missing)
    );
}

#[test]
fn latin1_bytes_fail_under_utf8() {
    let file = temp_csv(b"A\nMONTR\xc9AL\n");
    let err = read_table(file.path(), &ReadOptions::default().with_encoding("utf-8"))
        .expect_err("invalid utf-8 must fail");
    assert!(matches!(err, IngestError::Decode { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nope.csv");
    let err = read_table(&path, &ReadOptions::default()).expect_err("file is missing");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn header_whitespace_is_normalized() {
    let file = temp_csv(b"\xef\xbb\xbf CUSIP ,ZIP  CODE FOR SORTING\nCU1,62701\n");
    let table = read_table(file.path(), &ReadOptions::default().with_encoding("utf-8"))
        .expect("read source");
    assert_eq!(table.columns, vec!["CUSIP", "ZIP CODE FOR SORTING"]);
    assert_eq!(table.value(0, "ZIP CODE FOR SORTING"), Some(&CellValue::text("62701")));
}
