use crate::interpreter::ast::helpers::token::{expect_token_type, token_to_value};
use crate::interpreter::ast::parser::Parser;
use crate::interpreter::tokenizer::token::TokenTypes;

pub fn get_identifier(parser: &mut Parser) -> Result<String, String> {
    let token = parser.current_token()?;
    expect_token_type(parser, TokenTypes::Identifier)?;
    let result = token.value.to_string();
    parser.advance()?;
    Ok(result)
}

pub fn get_table_name(parser: &mut Parser) -> Result<String, String> {
    get_identifier(parser)
}

// Returns a list of Strings from the tokens when they are formated as "identifier, identifier, ..."
pub fn tokens_to_identifier_list(parser: &mut Parser) -> Result<Vec<String>, String> {
    let mut identifiers: Vec<String> = vec![];
    loop {
        identifiers.push(get_identifier(parser)?);
        let token = parser.current_token()?;
        if token.token_type != TokenTypes::Comma {
            break;
        }
        parser.advance()?;
    }
    return Ok(identifiers);
}

// Returns a list of Strings from the tokens when they are formated as "value, value, ..."
pub fn tokens_to_value_list(parser: &mut Parser) -> Result<Vec<String>, String> {
    let mut values: Vec<String> = vec![];
    loop {
        values.push(token_to_value(parser)?);
        parser.advance()?;
        let token = parser.current_token()?;
        if token.token_type != TokenTypes::Comma {
            break;
        }
        parser.advance()?;
    }
    return Ok(values);
}

// Wraps a list parser in "( ... )"
pub fn parenthesized<T>(
    parser: &mut Parser,
    inner: fn(&mut Parser) -> Result<Vec<T>, String>,
) -> Result<Vec<T>, String> {
    expect_token_type(parser, TokenTypes::LeftParen)?;
    parser.advance()?;
    let items = inner(parser)?;
    expect_token_type(parser, TokenTypes::RightParen)?;
    parser.advance()?;
    Ok(items)
}
