use super::*;

// The end-to-end contract: duplicate key rejected, conditional update,
// conditional delete.
#[test]
fn test_primary_key_lifecycle() {
    let mut db = test_db();
    db.execute("CREATE TABLE t (a STRING, b STRING, PRIMARY KEY (a));")
        .unwrap();

    db.execute("INSERT INTO t (a, b) VALUES ('1', 'x');").unwrap();
    let err = db
        .execute("INSERT INTO t (a, b) VALUES ('1', 'y');")
        .unwrap_err();
    assert!(err.to_string().contains("duplicate"));
    assert_eq!(db.execute("SELECT * FROM t;").unwrap(), "a\tb\n1\tx");

    let msg = db.execute("UPDATE t SET b = 'z' WHERE a = 1;").unwrap();
    assert_eq!(msg, "updated 1 row(s) in t");
    assert_eq!(db.execute("SELECT * FROM t;").unwrap(), "a\tb\n1\tz");

    let msg = db.execute("DELETE FROM t WHERE a = 1;").unwrap();
    assert_eq!(msg, "deleted 1 row(s) from t");
    assert_eq!(db.execute("SELECT * FROM t;").unwrap(), "a\tb");
}

#[test]
fn test_insert_rejects_empty_primary_key_value() {
    let mut db = test_db();
    db.execute("CREATE TABLE t (a STRING, PRIMARY KEY (a));")
        .unwrap();
    let err = db.execute("INSERT INTO t (a) VALUES ('');").unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn test_insert_rejects_missing_primary_key_column() {
    let mut db = test_db();
    db.execute("CREATE TABLE t (a STRING, b STRING, PRIMARY KEY (a));")
        .unwrap();
    let err = db.execute("INSERT INTO t (b) VALUES ('x');").unwrap_err();
    assert!(err.to_string().contains("missing column 'a'"));
}

#[test]
fn test_unique_constraint_rejects_duplicate_tuple() {
    let mut db = test_db();
    db.execute("CREATE TABLE t (a STRING, b STRING, UNIQUE (a, b));")
        .unwrap();
    db.execute("INSERT INTO t (a, b) VALUES ('x', 'y');").unwrap();
    db.execute("INSERT INTO t (a, b) VALUES ('x', 'z');").unwrap();
    let err = db
        .execute("INSERT INTO t (a, b) VALUES ('x', 'y');")
        .unwrap_err();
    assert!(err.to_string().contains("unique"));
}

#[test]
fn test_unique_records_missing_the_column_never_collide() {
    let mut db = test_db();
    db.execute("CREATE TABLE t (a STRING, b STRING, UNIQUE (b));")
        .unwrap();
    db.execute("INSERT INTO t (a) VALUES ('1');").unwrap();
    db.execute("INSERT INTO t (a) VALUES ('2');").unwrap();
    assert_eq!(db.catalog().get_table("t").unwrap().records().len(), 2);
}

#[test]
fn test_foreign_key_not_enforced_on_insert() {
    let mut db = test_db();
    db.execute("CREATE TABLE depts (id INTEGER, PRIMARY KEY (id));")
        .unwrap();
    db.execute(
        "CREATE TABLE staff (id INTEGER, dept INTEGER, FOREIGN KEY (dept) REFERENCES depts (id));",
    )
    .unwrap();
    // No row with dept 42 exists; the insert still succeeds.
    db.execute("INSERT INTO staff (id, dept) VALUES ('1', '42');")
        .unwrap();
}

#[test]
fn test_update_all_touches_every_row() {
    let mut db = test_db();
    seed_users(&mut db);

    let msg = db.execute("UPDATE users SET age = '0' WHERE all;").unwrap();
    assert_eq!(msg, "updated 3 row(s) in users");
    let out = db.execute("SELECT age FROM users;").unwrap();
    assert_eq!(out, "age\n0\n0\n0");
}

#[test]
fn test_update_no_match_reports_zero() {
    let mut db = test_db();
    seed_users(&mut db);

    let msg = db.execute("UPDATE users SET age = '0' WHERE id = 99;").unwrap();
    assert_eq!(msg, "updated 0 row(s) in users");
}

// Delete conditions unwrap quoted values; update conditions do not.
#[test]
fn test_condition_quote_asymmetry() {
    let mut db = test_db();
    seed_users(&mut db);

    let msg = db
        .execute("UPDATE users SET age = '0' WHERE id = '1';")
        .unwrap();
    assert_eq!(msg, "updated 0 row(s) in users");

    let msg = db.execute("DELETE FROM users WHERE id = '1';").unwrap();
    assert_eq!(msg, "deleted 1 row(s) from users");
}

#[test]
fn test_delete_all_then_again() {
    let mut db = test_db();
    seed_users(&mut db);

    let msg = db.execute("DELETE FROM users WHERE all;").unwrap();
    assert_eq!(msg, "deleted 3 row(s) from users");

    // Clearing an already-empty table is still a success.
    let msg = db.execute("DELETE FROM users WHERE all;").unwrap();
    assert_eq!(msg, "deleted 0 row(s) from users");
}
