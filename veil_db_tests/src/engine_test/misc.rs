use super::*;

#[test]
fn test_unsupported_command() {
    let mut db = test_db();
    let err = db.execute("TRUNCATE users;").unwrap_err();
    assert!(err.to_string().contains("unsupported command"));
}

#[test]
fn test_malformed_delete_condition() {
    let mut db = test_db();
    seed_users(&mut db);
    let err = db.execute("DELETE FROM users WHERE id;").unwrap_err();
    assert!(err.to_string().contains("expected '<column> = <value>'"));
}

#[test]
fn test_insert_arity_mismatch() {
    let mut db = test_db();
    seed_users(&mut db);
    let err = db
        .execute("INSERT INTO users (id, name) VALUES ('9');")
        .unwrap_err();
    assert!(err.to_string().contains("do not match"));
}

#[test]
fn test_condition_splits_on_first_equals() {
    let mut db = test_db();
    db.execute("CREATE TABLE kv (k STRING, v STRING);").unwrap();
    db.execute("INSERT INTO kv (k, v) VALUES ('a=b', 'x');")
        .unwrap();

    // "k = a=b" splits at the first '='; the value keeps its own '='.
    let out = db.execute("SELECT v FROM kv WHERE k = a=b;").unwrap();
    assert_eq!(out, "v\nx");
}

#[test]
fn test_declared_types_are_not_enforced() {
    let mut db = test_db();
    db.execute("CREATE TABLE t (n INTEGER);").unwrap();
    // INTEGER is schema metadata only; any string value is accepted.
    db.execute("INSERT INTO t (n) VALUES ('not-a-number');")
        .unwrap();
    assert_eq!(db.execute("SELECT * FROM t;").unwrap(), "n\nnot-a-number");
}
