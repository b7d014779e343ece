use std::fs;
use std::path::PathBuf;

use gstr_ingest::{IngestError, parse_csv_rows, read_csv_rows, read_rows};
use gstr_model::CellValue;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_rows_keyed_by_header() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "forward.csv",
        "sply_ty,rt,pos,txval,iamt\nINTER,5,27,1000,50\nINTRA,18,9,200,\n",
    );
    let rows = read_csv_rows(&path).expect("read csv");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text("sply_ty").as_deref(), Some("INTER"));
    assert_eq!(rows[0].text("txval").as_deref(), Some("1000"));
    assert_eq!(rows[1].text("pos").as_deref(), Some("9"));
    // Blank cells are recorded but read as absent.
    assert!(rows[1].get("iamt").is_none());
}

#[test]
fn skips_blank_rows_and_bom() {
    let input = "\u{feff}suppval , igst\n\n , \n100,18\n";
    let rows = parse_csv_rows(input.as_bytes(), "inline").expect("parse csv");
    assert_eq!(rows.len(), 1);
    let columns: Vec<&str> = rows[0].columns().collect();
    assert_eq!(columns, vec!["igst", "suppval"]);
    assert_eq!(rows[0].text("suppval").as_deref(), Some("100"));
}

#[test]
fn short_rows_are_padded_with_missing_cells() {
    let rows = parse_csv_rows("a,b,c\n1\n".as_bytes(), "inline").expect("parse csv");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 3);
    assert_eq!(rows[0].get("a"), Some(&CellValue::Text("1".to_string())));
    assert!(rows[0].get("c").is_none());
}

#[test]
fn header_only_file_has_no_rows() {
    let rows = parse_csv_rows("sply_ty,rt\n".as_bytes(), "inline").expect("parse csv");
    assert!(rows.is_empty());
    let rows = parse_csv_rows("".as_bytes(), "inline").expect("parse csv");
    assert!(rows.is_empty());
}

#[test]
fn dispatches_on_extension() {
    let dir = TempDir::new().unwrap();
    let csv = write_file(&dir, "rows.CSV", "rt\n5\n");
    assert_eq!(read_rows(&csv).unwrap().len(), 1);

    let xlsx = write_file(&dir, "rows.xlsx", "binary");
    assert!(matches!(
        read_rows(&xlsx),
        Err(IngestError::UnsupportedFormat { .. })
    ));

    let missing = dir.path().join("missing.csv");
    assert!(matches!(
        read_rows(&missing),
        Err(IngestError::FileNotFound { .. })
    ));
}
