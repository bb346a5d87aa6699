use crate::db::table::core::table::Table;
use crate::error::Result;
use fjall::{Batch, Snapshot};
use std::collections::BTreeMap;

pub const COLUMN_KEY_PREFIX: &str = "col:";
pub const COLUMN_ORDER_KEY: &str = "meta:columns";

/// A column name and the rest of its declaration, kept verbatim.
#[derive(Debug, PartialEq, Clone)]
pub struct ColumnDefinition {
    pub name: String,
    pub spec: String,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
        }
    }
}

pub fn column_key(name: &str) -> String {
    format!("{}{}", COLUMN_KEY_PREFIX, name)
}

/// Writes (or overwrites) one column's stored declaration.
pub fn define_column(batch: &mut Batch, table: &Table, column: &ColumnDefinition) {
    batch.insert(table.partition(), column_key(&column.name), column.spec.clone());
}

pub fn write_column_order(batch: &mut Batch, table: &Table, names: &[String]) {
    batch.insert(table.partition(), COLUMN_ORDER_KEY, names.join("\n"));
}

/// Declared columns in declaration order. Columns the order record does not
/// mention follow in key order.
pub fn list_columns(snapshot: &Snapshot) -> Result<Vec<ColumnDefinition>> {
    let mut specs: BTreeMap<String, String> = BTreeMap::new();
    for entry in snapshot.prefix(COLUMN_KEY_PREFIX) {
        let (key, value) = entry?;
        let name = String::from_utf8_lossy(&key[COLUMN_KEY_PREFIX.len()..]).into_owned();
        specs.insert(name, String::from_utf8_lossy(&value).into_owned());
    }

    let mut columns = vec![];
    if let Some(order) = snapshot.get(COLUMN_ORDER_KEY)? {
        for name in String::from_utf8_lossy(&order).split('\n') {
            if let Some(spec) = specs.remove(name) {
                columns.push(ColumnDefinition::new(name, spec));
            }
        }
    }
    columns.extend(
        specs
            .into_iter()
            .map(|(name, spec)| ColumnDefinition { name, spec }),
    );
    return Ok(columns);
}

pub fn list_column_names(snapshot: &Snapshot) -> Result<Vec<String>> {
    Ok(list_columns(snapshot)?
        .into_iter()
        .map(|column| column.name)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::test_utils::test_database;

    #[test]
    fn list_columns_follows_declaration_order() {
        let test_db = test_database();
        let table = test_db.database.create_table("users").unwrap();
        let columns = vec![
            ColumnDefinition::new("name", "name text"),
            ColumnDefinition::new("age", "age integer not null"),
            ColumnDefinition::new("email", "email text"),
        ];
        let mut batch = test_db.database.batch();
        for column in columns.iter() {
            define_column(&mut batch, &table, column);
        }
        write_column_order(
            &mut batch,
            &table,
            &columns.iter().map(|c| c.name.clone()).collect::<Vec<_>>(),
        );
        test_db.database.commit(batch).unwrap();

        assert_eq!(columns, list_columns(&table.snapshot()).unwrap());
    }

    #[test]
    fn list_columns_falls_back_to_key_order_without_order_record() {
        let test_db = test_database();
        let table = test_db.database.create_table("legacy").unwrap();
        let mut batch = test_db.database.batch();
        define_column(&mut batch, &table, &ColumnDefinition::new("name", "name text"));
        define_column(&mut batch, &table, &ColumnDefinition::new("age", "age text"));
        test_db.database.commit(batch).unwrap();

        assert_eq!(
            vec!["age".to_string(), "name".to_string()],
            list_column_names(&table.snapshot()).unwrap()
        );
    }

    #[test]
    fn redefining_a_column_overwrites_its_spec() {
        let test_db = test_database();
        let table = test_db.database.create_table("users").unwrap();
        for spec in ["age text", "age integer"] {
            let mut batch = test_db.database.batch();
            define_column(&mut batch, &table, &ColumnDefinition::new("age", spec));
            write_column_order(&mut batch, &table, &["age".to_string()]);
            test_db.database.commit(batch).unwrap();
        }

        assert_eq!(
            vec![ColumnDefinition::new("age", "age integer")],
            list_columns(&table.snapshot()).unwrap()
        );
    }
}
