use crate::interpreter::ast::helpers::common::get_identifier;
use crate::interpreter::ast::helpers::token::{expect_token_type, token_to_value};
use crate::interpreter::ast::parser::Parser;
use crate::interpreter::ast::{WhereClause, WhereCondition};
use crate::interpreter::tokenizer::token::TokenTypes;

// An absent WHERE clause yields an empty clause, which matches every row
pub fn get_where_clause(parser: &mut Parser) -> Result<WhereClause, String> {
    if parser.current_token()?.token_type != TokenTypes::Where {
        return Ok(WhereClause::default());
    }
    parser.advance()?;
    let mut conditions = vec![];
    loop {
        conditions.push(get_where_condition(parser)?);
        if parser.current_token()?.token_type != TokenTypes::And {
            break;
        }
        parser.advance()?;
    }
    Ok(WhereClause::new(conditions))
}

// UPDATE and DELETE refuse to run without a filter
pub fn get_required_where_clause(parser: &mut Parser) -> Result<WhereClause, String> {
    expect_token_type(parser, TokenTypes::Where)?;
    get_where_clause(parser)
}

fn get_where_condition(parser: &mut Parser) -> Result<WhereCondition, String> {
    let column = get_identifier(parser)?;
    expect_token_type(parser, TokenTypes::Equals)?;
    parser.advance()?;
    let value = token_to_value(parser)?;
    parser.advance()?;
    Ok(WhereCondition { column, value })
}
