use crate::db::table::core::row::Row;
use crate::interpreter::ast::WhereClause;

/// True when every condition holds for the row. A missing cell never matches.
pub fn row_matches_where_clause(row: &Row, where_clause: &WhereClause) -> bool {
    where_clause
        .conditions
        .iter()
        .all(|condition| row.get(&condition.column) == Some(condition.value.as_str()))
}

pub fn get_rows_matching_clause(rows: Vec<Row>, where_clause: &WhereClause) -> Vec<Row> {
    rows.into_iter()
        .filter(|row| row_matches_where_clause(row, where_clause))
        .collect()
}
