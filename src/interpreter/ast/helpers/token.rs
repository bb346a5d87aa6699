use crate::interpreter::ast::parser::Parser;
use crate::interpreter::tokenizer::token::TokenTypes;

// Returns an error if the current token does not match the given token type
pub fn expect_token_type(parser: &Parser, token_type: TokenTypes) -> Result<(), String> {
    let token = parser.current_token()?;
    if token.token_type != token_type {
        return Err(parser.format_error());
    }
    Ok(())
}

// A statement ends at a semicolon or at the end of the input
pub fn expect_end_of_statement(parser: &Parser) -> Result<(), String> {
    let token = parser.current_token()?;
    match token.token_type {
        TokenTypes::SemiColon | TokenTypes::EOF => Ok(()),
        _ => Err(parser.format_error()),
    }
}

// Cell values are opaque, so every literal keeps its raw text. Only the
// doubled quotes of a string literal are collapsed.
pub fn token_to_value(parser: &Parser) -> Result<String, String> {
    let token = parser.current_token()?;
    if !token.token_type.is_literal() {
        return Err(parser.format_error());
    }
    if token.token_type == TokenTypes::String {
        return Ok(token.value.replace("''", "'"));
    }
    Ok(token.value.to_string())
}
