use crate::config::SessionConfig;
use crate::db::database::Database;
use crate::db::table::core::column::{ColumnDefinition, define_column, write_column_order};
use crate::db::table::core::row::{Row, next_row_id, put_cell, scan_rows};
use crate::db::table::core::table::Table;
use fjall::PersistMode;
use tempfile::TempDir;

/// A database in its own temporary directory, removed on drop.
pub struct TestDatabase {
    pub database: Database,
    _dir: TempDir,
}

pub fn test_database() -> TestDatabase {
    let dir = tempfile::tempdir().unwrap();
    // Durability is covered by the integration tests
    let config = SessionConfig::new(dir.path()).with_persist_mode(PersistMode::Buffer);
    let database = Database::open(&config, "test").unwrap();
    TestDatabase {
        database,
        _dir: dir,
    }
}

/// `users (name text, age text)` holding Alice 30, Bob 25 and Carol 30.
pub fn default_table(test_db: &TestDatabase) -> Table {
    let database = &test_db.database;
    let table = database.create_table("users").unwrap();
    let columns = vec![
        ColumnDefinition::new("name", "name text"),
        ColumnDefinition::new("age", "age text"),
    ];
    let mut batch = database.batch();
    for column in columns.iter() {
        define_column(&mut batch, &table, column);
    }
    write_column_order(&mut batch, &table, &["name".to_string(), "age".to_string()]);
    database.commit(batch).unwrap();

    for (name, age) in [("Alice", "30"), ("Bob", "25"), ("Carol", "30")] {
        let mut batch = database.batch();
        let row_id = next_row_id(&mut batch, &table).unwrap();
        put_cell(&mut batch, &table, row_id, "name", name);
        put_cell(&mut batch, &table, row_id, "age", age);
        database.commit(batch).unwrap();
    }
    table
}

pub fn rows(table: &Table) -> Vec<Row> {
    scan_rows(&table.snapshot()).unwrap()
}

/// Value of `column` for each row, in row id order.
pub fn column_values(table: &Table, column: &str) -> Vec<Option<String>> {
    rows(table)
        .iter()
        .map(|row| row.get(column).map(|value| value.to_string()))
        .collect()
}
