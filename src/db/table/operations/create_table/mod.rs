use crate::db::database::Database;
use crate::db::table::core::column::{define_column, list_column_names, write_column_order};
use crate::db::table::core::names::{validate_column_name, validate_object_name};
use crate::error::Result;
use crate::interpreter::ast::CreateTableStatement;
use tracing::info;

/// Creates the table if needed and (re)declares its columns. Columns declared by an
/// earlier CREATE keep their place in the column order.
pub fn create_table(database: &Database, statement: CreateTableStatement) -> Result<()> {
    validate_object_name(&statement.table_name)?;
    for column in statement.columns.iter() {
        validate_column_name(&column.name)?;
    }

    let existed = database.has_table(&statement.table_name);
    let table = database.create_table(&statement.table_name)?;
    let mut column_order = list_column_names(&table.snapshot())?;

    let mut batch = database.batch();
    for column in statement.columns.iter() {
        define_column(&mut batch, &table, column);
        if !column_order.contains(&column.name) {
            column_order.push(column.name.clone());
        }
    }
    write_column_order(&mut batch, &table, &column_order);
    database.commit(batch)?;

    info!(
        table = %statement.table_name,
        columns = statement.columns.len(),
        existed,
        "created table"
    );
    Ok(())
}
