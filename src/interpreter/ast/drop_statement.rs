use crate::interpreter::{
    ast::{
        parser::Parser, SqlStatement, DropTableStatement,
        helpers::common::get_table_name,
        helpers::token::{expect_end_of_statement, expect_token_type},
    },
    tokenizer::token::TokenTypes
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    expect_token_type(parser, TokenTypes::Table)?;
    parser.advance()?;

    let table_name = get_table_name(parser)?;
    expect_end_of_statement(parser)?;
    return Ok(SqlStatement::DropTable(DropTableStatement {
        table_name: table_name,
    }));
}
