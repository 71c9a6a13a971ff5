use super::*;

#[test]
fn test_create_insert_select_star() {
    let mut db = test_db();
    seed_users(&mut db);

    let out = db.execute("SELECT * FROM users;").unwrap();
    assert_eq!(
        out,
        "id\tname\tage\n1\tAlice\t30\n2\tBob\t20\n3\tCara\t10"
    );
}

#[test]
fn test_select_projection_order_follows_request() {
    let mut db = test_db();
    seed_users(&mut db);

    let out = db.execute("SELECT name, id FROM users WHERE id = 2;").unwrap();
    assert_eq!(out, "name\tid\nBob\t2");
}

#[test]
fn test_select_with_quoted_condition_value() {
    let mut db = test_db();
    seed_users(&mut db);

    let out = db.execute("SELECT id FROM users WHERE name = 'Alice';").unwrap();
    assert_eq!(out, "id\n1");
}

#[test]
fn test_select_no_match_returns_header_only() {
    let mut db = test_db();
    seed_users(&mut db);

    let out = db.execute("SELECT * FROM users WHERE id = 99;").unwrap();
    assert_eq!(out, "id\tname\tage");
}

#[test]
fn test_select_unknown_projection_column_yields_empty_cells() {
    let mut db = test_db();
    seed_users(&mut db);

    let out = db.execute("SELECT id, city FROM users WHERE id = 1;").unwrap();
    assert_eq!(out, "id\tcity\n1\t");
}

#[test]
fn test_select_from_missing_table_fails() {
    let mut db = test_db();
    let err = db.execute("SELECT * FROM ghosts;").unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
