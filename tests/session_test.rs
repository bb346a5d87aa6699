mod common;

use bucketsql::{Error, QueryResult};
use common::{TestSession, message, strings};

#[test]
fn test_statements_need_a_database() {
    let mut test = TestSession::new();
    let results = test.run(
        "CREATE TABLE users (name text);
         INSERT INTO users (name) VALUES (Alice);
         SELECT * FROM users;
         DROP TABLE users;",
    );
    assert_eq!(4, results.len());
    for result in results {
        assert!(matches!(result, Err(Error::NoDatabaseSelected)));
    }
    assert!(!test.dir.path().join("users.db").exists());
}

#[test]
fn test_use_creates_database_file() {
    let mut test = TestSession::new();
    let results = test.run("USE inventory");
    assert_eq!("Using database inventory", message(&results[0]));
    assert!(test.dir.path().join("inventory.db").is_dir());
}

#[test]
fn test_tables_belong_to_their_database() {
    let mut test = TestSession::new();
    test.run_ok(
        "CREATE DATABASE shop;
         CREATE TABLE users (name text);
         INSERT INTO users (name) VALUES (Alice);
         CREATE DATABASE warehouse;",
    );
    let results = test.run("SELECT * FROM users");
    assert!(matches!(results[0], Err(Error::TableNotFound(_))));

    test.run_ok("USE shop");
    let result = test.select("SELECT name FROM users");
    assert_eq!(vec![strings(&["Alice"])], result.rows);
}

#[test]
fn test_data_survives_a_restart() {
    let mut test = TestSession::new();
    test.run_ok(
        "CREATE DATABASE shop;
         CREATE TABLE users (name text, age text);
         INSERT INTO users (name, age) VALUES (Alice, 30);
         INSERT INTO users (name, age) VALUES (Bob, 25);
         DELETE FROM users WHERE name = Bob;
         EXIT",
    );

    let mut test = test.restart();
    test.run_ok("USE shop; INSERT INTO users (name, age) VALUES (Carol, 41)");
    let result = test.select("SELECT * FROM users");
    assert_eq!(strings(&["name", "age"]), result.headers);
    assert_eq!(
        vec![strings(&["Alice", "30"]), strings(&["Carol", "41"])],
        result.rows
    );
}

#[test]
fn test_exit_stops_the_rest_of_the_input() {
    let mut test = TestSession::new();
    let results = test.run("USE shop; EXIT; CREATE TABLE users (name text)");
    assert_eq!(2, results.len());
    assert!(matches!(results[1], Ok(QueryResult::Exit)));
    assert!(test.session.database().is_none());
}

#[test]
fn test_open_failure_is_fatal_and_stops_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("data");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let mut session = bucketsql::Session::new(bucketsql::SessionConfig::new(&blocker));

    let results = bucketsql::run_sql(&mut session, "USE shop; USE other");
    assert_eq!(1, results.len());
    match &results[0] {
        Err(error) => assert!(error.is_fatal()),
        Ok(other) => panic!("expected a fatal error, got {:?}", other),
    }
}

#[test]
fn test_invalid_database_names_are_rejected() {
    let mut test = TestSession::new();
    let results = test.run("CREATE DATABASE \"../escape\"; USE shop");
    assert!(matches!(results[0], Err(Error::InvalidName(_))));
    assert!(results[1].is_ok());
    assert!(!test.dir.path().join("../escape.db").exists());
}
