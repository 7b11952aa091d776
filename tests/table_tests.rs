// File: ./tests/table_tests.rs
use anniv::model::table::{Delimiter, ParseError, TabularModel, cell};

#[test]
fn test_all_supported_delimiters() {
    for (raw, delimiter) in [
        ("Name,Date\nAlice,15/03/1990\n", Delimiter::Comma),
        ("Name;Date\nAlice;15/03/1990\n", Delimiter::Semicolon),
        ("Name\tDate\nAlice\t15/03/1990\n", Delimiter::Tab),
    ] {
        let model = TabularModel::parse(raw, delimiter).unwrap();
        assert_eq!(model.headers(), ["Name".to_string(), "Date".to_string()]);
        assert_eq!(cell(model.data_row(1).unwrap(), 0), "Alice");
    }
}

#[test]
fn test_quoted_field_keeps_embedded_delimiter() {
    let model = TabularModel::parse("Name,Date\n\"Doe, John\",15/03/1990\n", Delimiter::Comma)
        .unwrap();
    let row = model.data_row(1).unwrap();
    assert_eq!(cell(row, 0), "Doe, John");
    assert_eq!(cell(row, 1), "15/03/1990");
}

#[test]
fn test_crlf_input() {
    let model = TabularModel::parse("Name,Date\r\nAlice,15/03/1990\r\n", Delimiter::Comma)
        .unwrap();
    assert_eq!(model.row_count(), 2);
    assert_eq!(cell(model.data_row(1).unwrap(), 1), "15/03/1990");
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(matches!(
        TabularModel::parse("", Delimiter::Comma),
        Err(ParseError::Empty)
    ));
}

#[test]
fn test_wrong_delimiter_yields_single_column() {
    // Not an error: the whole line becomes one cell, and downstream mapping
    // validation is what catches the misconfiguration.
    let model = TabularModel::parse("Name;Date\nAlice;15/03/1990\n", Delimiter::Comma).unwrap();
    assert_eq!(model.column_count(), 1);
    assert_eq!(model.headers()[0], "Name;Date");
}

#[test]
fn test_header_accessors() {
    let model = TabularModel::parse("Name,Date,Note\nAlice,x,y\n", Delimiter::Comma).unwrap();
    assert_eq!(model.header_at(2), Some("Note"));
    assert_eq!(model.header_at(3), None);
    assert_eq!(model.column_count(), 3);
}
