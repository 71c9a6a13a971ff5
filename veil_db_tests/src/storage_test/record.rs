use veil_db_core::error::DbError;

use super::*;

#[test]
fn test_set_get_and_overwrite() {
    let mut rec = Record::new();
    rec.set_value("a", "1");
    assert_eq!(rec.get_value("a").unwrap(), "1");

    rec.set_value("a", "2");
    assert_eq!(rec.get_value("a").unwrap(), "2");
    assert_eq!(rec.data().len(), 1);
}

#[test]
fn test_get_missing_column_fails() {
    let rec = Record::new();
    let err = rec.get_value("ghost").unwrap_err();
    assert!(matches!(err, DbError::ColumnNotFound(col) if col == "ghost"));
}

#[test]
fn test_has_column() {
    let rec = record(&[("a", "")]);
    assert!(rec.has_column("a"));
    assert!(!rec.has_column("b"));
    // An empty value is still a value.
    assert_eq!(rec.get_value("a").unwrap(), "");
}
