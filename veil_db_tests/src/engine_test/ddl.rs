use super::*;

#[test]
fn test_create_duplicate_table_fails() {
    let mut db = test_db();
    db.execute("CREATE TABLE t (a STRING);").unwrap();
    let err = db.execute("CREATE TABLE t (b STRING);").unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_drop_table_then_access_fails() {
    let mut db = test_db();
    seed_users(&mut db);

    let msg = db.execute("DROP TABLE users;").unwrap();
    assert_eq!(msg, "dropped table users");

    let err = db
        .execute("INSERT INTO users (id) VALUES ('9');")
        .unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_drop_missing_table_fails() {
    let mut db = test_db();
    let err = db.execute("DROP TABLE nope;").unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_drop_table_strips_foreign_keys_referencing_it() {
    let mut db = test_db();
    db.execute("CREATE TABLE depts (id INTEGER, PRIMARY KEY (id));")
        .unwrap();
    db.execute(
        "CREATE TABLE staff (id INTEGER, dept INTEGER, PRIMARY KEY (id), FOREIGN KEY (dept) REFERENCES depts (id));",
    )
    .unwrap();

    db.execute("DROP TABLE depts;").unwrap();

    let staff = db.catalog().get_table("staff").unwrap();
    // The primary key stays; only the foreign key to depts is gone.
    assert_eq!(staff.schema().constraints().len(), 1);
}

#[test]
fn test_drop_column_removes_values() {
    let mut db = test_db();
    seed_users(&mut db);

    let msg = db.execute("DROP COLUMN users age;").unwrap();
    assert_eq!(msg, "dropped column age from users");

    let out = db.execute("SELECT * FROM users WHERE id = 1;").unwrap();
    assert_eq!(out, "id\tname\n1\tAlice");
}

#[test]
fn test_drop_missing_column_fails_and_leaves_schema() {
    let mut db = test_db();
    seed_users(&mut db);

    let err = db.execute("DROP COLUMN users city;").unwrap_err();
    assert!(err.to_string().contains("not found"));

    let out = db.execute("SELECT * FROM users WHERE id = 1;").unwrap();
    assert_eq!(out, "id\tname\tage\n1\tAlice\t30");
}
