use crate::interpreter::ast::helpers::common::get_identifier;
use crate::interpreter::ast::helpers::token::expect_end_of_statement;
use crate::interpreter::ast::{DatabaseStatement, SqlStatement, parser::Parser};

pub fn build_use(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    let database_name = get_identifier(parser)?;
    expect_end_of_statement(parser)?;
    return Ok(SqlStatement::UseDatabase(DatabaseStatement { database_name }));
}

pub fn build_exit(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    expect_end_of_statement(parser)?;
    return Ok(SqlStatement::Exit);
}
