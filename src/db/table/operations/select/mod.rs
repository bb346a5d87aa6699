use crate::db::database::Database;
use crate::db::result::ResultSet;
use crate::db::table::core::column::list_column_names;
use crate::db::table::core::row::scan_rows;
use crate::db::table::operations::helpers::common::get_rows_matching_clause;
use crate::error::Result;
use crate::interpreter::ast::{SelectStatement, SelectStatementColumns};
use tracing::debug;

/// Reads from one snapshot. The filter sees the whole row; only the selected
/// columns are returned, empty where the row has no cell.
pub fn select(database: &Database, statement: SelectStatement) -> Result<ResultSet> {
    let table = database.get_table(&statement.table_name)?;
    let snapshot = table.snapshot();
    let headers = match statement.columns {
        SelectStatementColumns::All => list_column_names(&snapshot)?,
        SelectStatementColumns::Specific(columns) => columns,
    };

    let rows = scan_rows(&snapshot)?;
    let scanned = rows.len();
    let mut result = ResultSet::new(headers);
    for row in get_rows_matching_clause(rows, &statement.where_clause) {
        let values = result
            .headers
            .iter()
            .map(|header| row.get(header).unwrap_or_default().to_string())
            .collect();
        result.push_row(values);
    }

    debug!(table = %statement.table_name, scanned, matched = result.len(), "selected rows");
    Ok(result)
}
