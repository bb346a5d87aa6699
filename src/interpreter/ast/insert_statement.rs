use crate::interpreter::{
    ast::{
        InsertIntoStatement,
        SqlStatement::{self, InsertInto},
        helpers::common::{get_table_name, parenthesized, tokens_to_identifier_list, tokens_to_value_list},
        helpers::token::{expect_end_of_statement, expect_token_type},
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    expect_token_type(parser, TokenTypes::Into)?;
    parser.advance()?;
    let table_name = get_table_name(parser)?;

    let token = parser.current_token()?;
    let columns = match token.token_type {
        TokenTypes::LeftParen => Some(parenthesized(parser, tokens_to_identifier_list)?),
        TokenTypes::Values => None,
        _ => return Err(parser.format_error()),
    };

    expect_token_type(parser, TokenTypes::Values)?;
    parser.advance()?;
    let values = parenthesized(parser, tokens_to_value_list)?;

    // Ensure end of statement
    expect_end_of_statement(parser)?;

    let statement = InsertIntoStatement {
        table_name: table_name,
        columns: columns,
        values: values,
    };
    validate_insert_statement(&statement)?;
    return Ok(InsertInto(statement));
}

fn validate_insert_statement(statement: &InsertIntoStatement) -> Result<(), String> {
    if let Some(columns) = &statement.columns {
        if columns.len() != statement.values.len() {
            return Err(format!("Columns and values have different lengths"));
        }
    }
    return Ok(());
}
