use crate::db::database::Database;
use crate::db::table::core::names::validate_column_name;
use crate::db::table::core::row::{put_cell, scan_rows};
use crate::db::table::operations::helpers::common::get_rows_matching_clause;
use crate::error::Result;
use crate::interpreter::ast::UpdateStatement;
use tracing::debug;

/// Sets one column on every matching row. Returns how many rows changed.
pub fn update(database: &Database, statement: UpdateStatement) -> Result<usize> {
    let table = database.get_table(&statement.table_name)?;
    validate_column_name(&statement.update_value.column)?;

    let rows = scan_rows(&table.snapshot())?;
    let matching = get_rows_matching_clause(rows, &statement.where_clause);

    let mut batch = database.batch();
    for row in matching.iter() {
        put_cell(
            &mut batch,
            &table,
            row.id,
            &statement.update_value.column,
            &statement.update_value.value,
        );
    }
    database.commit(batch)?;

    debug!(table = %statement.table_name, updated = matching.len(), "updated rows");
    Ok(matching.len())
}
