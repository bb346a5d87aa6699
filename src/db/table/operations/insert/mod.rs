use crate::db::database::Database;
use crate::db::table::core::column::list_column_names;
use crate::db::table::core::names::validate_column_name;
use crate::db::table::core::row::{RowId, next_row_id, put_cell};
use crate::error::{Error, Result};
use crate::interpreter::ast::InsertIntoStatement;
use tracing::debug;

/// Writes one row. Every cell shares a freshly drawn id and lands in one batch.
pub fn insert(database: &Database, statement: InsertIntoStatement) -> Result<RowId> {
    let table = database.get_table(&statement.table_name)?;
    let columns = match statement.columns {
        Some(columns) => columns,
        None => list_column_names(&table.snapshot())?,
    };
    if columns.len() != statement.values.len() {
        return Err(Error::ColumnCountMismatch {
            columns: columns.len(),
            values: statement.values.len(),
        });
    }
    for column in columns.iter() {
        validate_column_name(column)?;
    }

    let mut batch = database.batch();
    let row_id = next_row_id(&mut batch, &table)?;
    for (column, value) in columns.iter().zip(statement.values.iter()) {
        put_cell(&mut batch, &table, row_id, column, value);
    }
    database.commit(batch)?;

    debug!(table = %statement.table_name, row_id, cells = columns.len(), "inserted row");
    Ok(row_id)
}
