use crate::db::table::core::column::ColumnDefinition;
use crate::interpreter::{
    ast::{
        CreateTableStatement, DatabaseStatement, SqlStatement,
        helpers::common::{get_identifier, get_table_name},
        helpers::token::{expect_end_of_statement, expect_token_type},
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    let token = parser.current_token()?;
    let statement = match token.token_type {
        TokenTypes::Database => {
            parser.advance()?;
            let database_name = get_identifier(parser)?;
            SqlStatement::CreateDatabase(DatabaseStatement { database_name })
        }
        TokenTypes::Table => {
            parser.advance()?;
            let table_name = get_table_name(parser)?;
            let columns = get_column_definitions(parser)?;
            SqlStatement::CreateTable(CreateTableStatement { table_name, columns })
        }
        _ => return Err(parser.format_error()),
    };
    expect_end_of_statement(parser)?;
    return Ok(statement);
}

// Each definition runs from its column name up to the next top level comma; its raw
// text is kept as the column's specification.
fn get_column_definitions(parser: &mut Parser) -> Result<Vec<ColumnDefinition>, String> {
    expect_token_type(parser, TokenTypes::LeftParen)?;
    parser.advance()?;
    let mut columns: Vec<ColumnDefinition> = vec![];
    loop {
        let token = parser.current_token()?;
        expect_token_type(parser, TokenTypes::Identifier)?;
        let name = token.value.to_string();
        let definition_start = token.start;
        let mut definition_end = token.end;
        parser.advance()?;

        let mut depth = 0;
        loop {
            let token = parser.current_token()?;
            let (token_type, token_end) = (token.token_type, token.end);
            match token_type {
                TokenTypes::Comma | TokenTypes::RightParen if depth == 0 => break,
                TokenTypes::LeftParen => depth += 1,
                TokenTypes::RightParen => depth -= 1,
                _ => {}
            }
            definition_end = token_end;
            parser.advance()?;
        }
        columns.push(ColumnDefinition {
            name,
            spec: parser.source_text(definition_start, definition_end).to_string(),
        });

        let token = parser.current_token()?;
        match token.token_type {
            TokenTypes::Comma => {
                parser.advance()?;
            }
            _ => {
                parser.advance()?;
                break;
            }
        }
    }
    return Ok(columns);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, spec: &str) -> ColumnDefinition {
        ColumnDefinition {
            name: name.to_string(),
            spec: spec.to_string(),
        }
    }

    #[test]
    fn create_database_statement_is_generated_correctly() {
        let mut parser = Parser::new("CREATE DATABASE shop;");
        let expected = SqlStatement::CreateDatabase(DatabaseStatement {
            database_name: "shop".to_string(),
        });
        assert_eq!(Ok(expected), build(&mut parser));
    }

    #[test]
    fn create_table_statement_keeps_definitions_verbatim() {
        let mut parser = Parser::new("create table users (name text,  age   INTEGER NOT NULL, price decimal(10, 2))");
        let expected = SqlStatement::CreateTable(CreateTableStatement {
            table_name: "users".to_string(),
            columns: vec![
                column("name", "name text"),
                column("age", "age   INTEGER NOT NULL"),
                column("price", "price decimal(10, 2)"),
            ],
        });
        assert_eq!(Ok(expected), build(&mut parser));
    }

    #[test]
    fn create_table_accepts_bare_column_names() {
        let mut parser = Parser::new("CREATE TABLE t (a, b);");
        let expected = SqlStatement::CreateTable(CreateTableStatement {
            table_name: "t".to_string(),
            columns: vec![column("a", "a"), column("b", "b")],
        });
        assert_eq!(Ok(expected), build(&mut parser));
    }

    #[test]
    fn create_table_with_malformed_definitions_fails() {
        for sql in [
            "CREATE TABLE users",
            "CREATE TABLE users ()",
            "CREATE TABLE users (name text",
            "CREATE TABLE users (name text,)",
            "CREATE TABLE users (name text) extra",
            "CREATE TABLE (name text)",
            "CREATE INDEX users",
            "CREATE DATABASE",
        ] {
            let mut parser = Parser::new(sql);
            assert!(build(&mut parser).is_err(), "{} should fail", sql);
        }
    }
}
