use crate::db::table::core::column::ColumnDefinition;
use crate::error::Result;
use crate::interpreter::tokenizer::token::TokenTypes;

mod create_statement;
mod delete_statement;
mod drop_statement;
mod helpers;
mod insert_statement;
pub mod parser;
mod select_statement;
mod session_statements;
mod statement_builder;
mod update_statement;

#[derive(Debug, PartialEq, Clone)]
pub enum SqlStatement {
    CreateDatabase(DatabaseStatement),
    UseDatabase(DatabaseStatement),
    CreateTable(CreateTableStatement),
    InsertInto(InsertIntoStatement),
    Select(SelectStatement),
    UpdateStatement(UpdateStatement),
    DeleteStatement(DeleteStatement),
    DropTable(DropTableStatement),
    Exit,
}

impl SqlStatement {
    pub fn command_name(&self) -> &'static str {
        match self {
            SqlStatement::CreateDatabase(_) => "CREATE DATABASE",
            SqlStatement::UseDatabase(_) => "USE",
            SqlStatement::CreateTable(_) => "CREATE TABLE",
            SqlStatement::InsertInto(_) => "INSERT",
            SqlStatement::Select(_) => "SELECT",
            SqlStatement::UpdateStatement(_) => "UPDATE",
            SqlStatement::DeleteStatement(_) => "DELETE",
            SqlStatement::DropTable(_) => "DROP TABLE",
            SqlStatement::Exit => "EXIT",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct DatabaseStatement {
    pub database_name: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct CreateTableStatement {
    pub table_name: String,
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DropTableStatement {
    pub table_name: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct InsertIntoStatement {
    pub table_name: String,
    // None means every declared column, in declaration order
    pub columns: Option<Vec<String>>,
    pub values: Vec<String>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum SelectStatementColumns {
    All,
    Specific(Vec<String>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct SelectStatement {
    pub table_name: String,
    pub columns: SelectStatementColumns,
    pub where_clause: WhereClause,
}

#[derive(Debug, PartialEq, Clone)]
pub struct UpdateStatement {
    pub table_name: String,
    pub update_value: ColumnValue,
    pub where_clause: WhereClause,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteStatement {
    pub table_name: String,
    pub where_clause: WhereClause,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ColumnValue {
    pub column: String,
    pub value: String,
}

/// One `column = literal` test.
#[derive(Debug, PartialEq, Clone)]
pub struct WhereCondition {
    pub column: String,
    pub value: String,
}

/// Conjunction of equality tests. No conditions matches every row.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct WhereClause {
    pub conditions: Vec<WhereCondition>,
}

impl WhereClause {
    pub fn new(conditions: Vec<WhereCondition>) -> Self {
        Self { conditions }
    }
}

/// Parses every statement in `sql`. A statement that fails to parse yields an
/// error in its slot and parsing resumes after the next semicolon.
pub fn generate(sql: &str) -> Vec<Result<SqlStatement>> {
    let mut results: Vec<Result<SqlStatement>> = vec![];
    let mut parser = parser::Parser::new(sql);
    loop {
        let next_statement = parser.next_statement();
        match next_statement {
            Some(Err(error)) => {
                results.push(Err(error));
                // If we encountered a parsing error, skip until we find a semicolon or EOF
                loop {
                    match parser.current_token() {
                        Ok(token) if token.token_type == TokenTypes::EOF => break,
                        Ok(token) if token.token_type == TokenTypes::SemiColon => {
                            parser.skip_semicolon();
                            break;
                        }
                        Ok(_) => {
                            if parser.advance().is_err() {
                                return results;
                            }
                        }
                        Err(_) => return results,
                    }
                }
            }
            Some(Ok(sql_statement)) => {
                parser.skip_semicolon();
                results.push(Ok(sql_statement));
            }
            None => break,
        }
    }
    return results;
}
