use crate::db::database::Database;
use crate::db::table::core::row::{delete_row, scan_rows};
use crate::db::table::operations::helpers::common::get_rows_matching_clause;
use crate::error::Result;
use crate::interpreter::ast::DeleteStatement;
use tracing::debug;

/// Removes every cell of each matching row. Returns how many rows went away.
pub fn delete(database: &Database, statement: DeleteStatement) -> Result<usize> {
    let table = database.get_table(&statement.table_name)?;
    let rows = scan_rows(&table.snapshot())?;
    let matching = get_rows_matching_clause(rows, &statement.where_clause);

    let mut batch = database.batch();
    for row in matching.iter() {
        delete_row(&mut batch, &table, row);
    }
    database.commit(batch)?;

    debug!(table = %statement.table_name, deleted = matching.len(), "deleted rows");
    Ok(matching.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::table::core::row::{next_row_id, put_cell};
    use crate::db::table::test_utils::{default_table, rows, test_database};
    use crate::error::Error;
    use crate::interpreter::ast::{WhereClause, WhereCondition};

    fn statement(conditions: &[(&str, &str)]) -> DeleteStatement {
        DeleteStatement {
            table_name: "users".to_string(),
            where_clause: WhereClause::new(
                conditions
                    .iter()
                    .map(|(column, value)| WhereCondition {
                        column: column.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn delete_from_table_works_correctly() {
        let test_db = test_database();
        let table = default_table(&test_db);
        let deleted = delete(&test_db.database, statement(&[("age", "30")])).unwrap();
        assert_eq!(2, deleted);

        let remaining = rows(&table);
        assert_eq!(1, remaining.len());
        assert_eq!(2, remaining[0].id);
    }

    #[test]
    fn delete_leaves_no_orphan_cells() {
        let test_db = test_database();
        let table = default_table(&test_db);
        delete(&test_db.database, statement(&[("name", "Alice")])).unwrap();

        let snapshot = table.snapshot();
        assert!(snapshot.get("1:name").unwrap().is_none());
        assert!(snapshot.get("1:age").unwrap().is_none());
        assert!(rows(&table).iter().all(|row| row.id != 1));
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let test_db = test_database();
        let table = default_table(&test_db);
        delete(&test_db.database, statement(&[("name", "Carol")])).unwrap();

        let mut batch = test_db.database.batch();
        let row_id = next_row_id(&mut batch, &table).unwrap();
        put_cell(&mut batch, &table, row_id, "name", "Dave");
        test_db.database.commit(batch).unwrap();
        assert_eq!(4, row_id);
    }

    #[test]
    fn delete_errors_when_table_does_not_exist() {
        let test_db = test_database();
        let result = delete(&test_db.database, statement(&[("name", "Alice")]));
        assert!(matches!(result, Err(Error::TableNotFound(_))));
    }
}
