use crate::interpreter::ast::{
    ColumnValue, SqlStatement, UpdateStatement,
    helpers::common::{get_identifier, get_table_name},
    helpers::token::{expect_end_of_statement, expect_token_type, token_to_value},
    helpers::where_clause::get_required_where_clause,
    parser::Parser,
};
use crate::interpreter::tokenizer::token::TokenTypes;

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    let table_name = get_table_name(parser)?;
    // Ensure Set
    expect_token_type(parser, TokenTypes::Set)?;
    parser.advance()?;
    let update_value = get_update_value(parser)?;
    let where_clause = get_required_where_clause(parser)?;

    expect_end_of_statement(parser)?;
    return Ok(SqlStatement::UpdateStatement(UpdateStatement {
        table_name,
        update_value,
        where_clause,
    }));
}

// Only a single `column = value` assignment is supported
fn get_update_value(parser: &mut Parser) -> Result<ColumnValue, String> {
    let column = get_identifier(parser)?;
    expect_token_type(parser, TokenTypes::Equals)?;
    parser.advance()?;
    let value = token_to_value(parser)?;
    parser.advance()?;
    Ok(ColumnValue { column, value })
}
