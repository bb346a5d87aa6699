use crate::db::database::Database;
use crate::error::Result;
use crate::interpreter::ast::DropTableStatement;
use tracing::info;

pub fn drop_table(database: &Database, statement: DropTableStatement) -> Result<()> {
    database.drop_table(&statement.table_name)?;
    info!(table = %statement.table_name, "dropped table");
    Ok(())
}
