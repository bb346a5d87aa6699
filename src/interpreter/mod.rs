use crate::db::result::QueryResult;
use crate::db::session::Session;
use crate::error::Result;
pub mod ast;
pub mod tokenizer;

/// Parses and executes every statement in `sql`, in order. One result per statement;
/// a failing statement does not stop the ones after it. Nothing runs after `EXIT`
/// or after a database that cannot be opened.
pub fn run_sql(session: &mut Session, sql: &str) -> Vec<Result<QueryResult>> {
    let mut results = vec![];
    for sql_statement in ast::generate(sql) {
        let result = sql_statement.and_then(|statement| session.execute(statement));
        let stop = match &result {
            Ok(QueryResult::Exit) => true,
            Err(error) => error.is_fatal(),
            Ok(_) => false,
        };
        results.push(result);
        if stop {
            break;
        }
    }
    return results;
}
