use crate::interpreter::{
    ast::{
        SelectStatement, SelectStatementColumns, SqlStatement,
        helpers::common::{get_table_name, tokens_to_identifier_list},
        helpers::token::{expect_end_of_statement, expect_token_type},
        helpers::where_clause::get_where_clause,
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    let columns = get_columns(parser)?;
    expect_token_type(parser, TokenTypes::From)?;
    parser.advance()?;
    let table_name = get_table_name(parser)?;
    let where_clause = get_where_clause(parser)?;
    expect_end_of_statement(parser)?;

    return Ok(SqlStatement::Select(SelectStatement {
        table_name,
        columns,
        where_clause,
    }));
}

// `*` and an empty list both mean every declared column
fn get_columns(parser: &mut Parser) -> Result<SelectStatementColumns, String> {
    let token = parser.current_token()?;
    match token.token_type {
        TokenTypes::Asterisk => {
            parser.advance()?;
            Ok(SelectStatementColumns::All)
        }
        TokenTypes::From => Ok(SelectStatementColumns::All),
        _ => Ok(SelectStatementColumns::Specific(tokens_to_identifier_list(parser)?)),
    }
}
