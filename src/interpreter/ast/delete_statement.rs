use crate::interpreter::{
    ast::{
        parser::Parser, SqlStatement, DeleteStatement,
        helpers::{
            token::{expect_end_of_statement, expect_token_type},
            common::get_table_name,
            where_clause::get_required_where_clause,
        }
    },
    tokenizer::token::TokenTypes
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    expect_token_type(parser, TokenTypes::From)?;
    parser.advance()?;
    let table_name = get_table_name(parser)?;
    let where_clause = get_required_where_clause(parser)?;
    expect_end_of_statement(parser)?;

    return Ok(SqlStatement::DeleteStatement(DeleteStatement {
        table_name: table_name,
        where_clause: where_clause,
    }));
}
