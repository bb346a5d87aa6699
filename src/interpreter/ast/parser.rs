use crate::error::{Error, Result};
use crate::interpreter::{
    ast::{
        SqlStatement,
        statement_builder::{DefaultStatementBuilder, StatementBuilder},
    },
    tokenizer::{scanner::Token, token::TokenTypes, tokenize},
};

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    start: usize,
    current: usize,
    builder: &'a dyn StatementBuilder,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        return Self {
            source,
            tokens: tokenize(source),
            start: 0,
            current: 0,
            builder: &DefaultStatementBuilder {},
        };
    }

    pub fn current_token(&self) -> std::result::Result<&Token<'a>, String> {
        if self.current >= self.tokens.len() {
            return Err(self.format_error());
        }
        return Ok(&self.tokens[self.current]);
    }

    // Never moves past the end of the current statement
    pub fn advance(&mut self) -> std::result::Result<(), String> {
        let token = self.current_token()?;
        if matches!(token.token_type, TokenTypes::SemiColon | TokenTypes::EOF) {
            return Err(self.format_error());
        }
        self.current += 1;
        Ok(())
    }

    pub fn skip_semicolon(&mut self) {
        if let Ok(token) = self.current_token() {
            if token.token_type == TokenTypes::SemiColon {
                self.current += 1;
            }
        }
    }

    /// Raw input text covering the byte range, as the user typed it.
    pub fn source_text(&self, start: usize, end: usize) -> &'a str {
        return self.source.get(start..end).unwrap_or("").trim();
    }

    pub fn format_error(&self) -> String {
        if self.current < self.tokens.len() {
            let token = &self.tokens[self.current];
            if token.token_type == TokenTypes::EOF {
                return "Error at end of input.".to_string();
            }
            return format!(
                "Error at line {:?}, column {:?}: Unexpected value: {}",
                token.line_num,
                token.col_num,
                token.value.to_string()
            );
        } else {
            return "Error at end of input.".to_string();
        }
    }

    // CREATE reports which object it was creating when the second keyword is known
    fn command_name(&self) -> String {
        let first = &self.tokens[self.start];
        let second = self.tokens.get(self.start + 1).map(|token| token.token_type);
        return match (first.token_type, second) {
            (TokenTypes::Create, Some(TokenTypes::Database)) => "CREATE DATABASE".to_string(),
            (TokenTypes::Create, Some(TokenTypes::Table)) => "CREATE TABLE".to_string(),
            (TokenTypes::Drop, Some(TokenTypes::Table)) => "DROP TABLE".to_string(),
            _ => first.value.to_ascii_uppercase(),
        };
    }

    pub fn next_statement(&mut self) -> Option<Result<SqlStatement>> {
        while self.current_token().ok()?.token_type == TokenTypes::SemiColon {
            self.current += 1;
        }
        self.start = self.current;

        let token_type = self.current_token().ok()?.token_type;
        let statement = match token_type {
            TokenTypes::EOF => return None,
            TokenTypes::Create => self.builder.build_create(self),
            TokenTypes::Use => self.builder.build_use(self),
            TokenTypes::Insert => self.builder.build_insert(self),
            TokenTypes::Select => self.builder.build_select(self),
            TokenTypes::Update => self.builder.build_update(self),
            TokenTypes::Delete => self.builder.build_delete(self),
            TokenTypes::Drop => self.builder.build_drop(self),
            TokenTypes::Exit => self.builder.build_exit(self),
            _ => {
                let command = self.tokens[self.current].value.to_string();
                return Some(Err(Error::UnknownCommand(command)));
            }
        };
        return Some(statement.map_err(|detail| Error::InvalidSyntax {
            command: self.command_name(),
            detail,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ast::DropTableStatement;
    use crate::interpreter::ast::statement_builder::MockStatementBuilder;

    fn mock_parser(source: &'static str) -> Parser<'static> {
        Parser {
            source,
            tokens: tokenize(source),
            start: 0,
            current: 0,
            builder: &MockStatementBuilder,
        }
    }

    #[test]
    fn parser_formats_error_when_at_end_of_input() {
        let parser = Parser::new("");
        let result = parser.format_error();
        assert_eq!(result, "Error at end of input.");
    }

    #[test]
    fn parser_formats_error_when_unexpected_token_type() {
        let mut parser = Parser::new("DROP\n   TABLE users");
        parser.current = 1;
        let result = parser.format_error();
        assert_eq!(result, "Error at line 2, column 3: Unexpected value: TABLE");
    }

    #[test]
    fn parser_never_advances_past_a_semicolon() {
        let mut parser = Parser::new("EXIT; USE shop");
        assert!(parser.advance().is_ok());
        assert!(parser.advance().is_err());
        parser.skip_semicolon();
        assert_eq!(TokenTypes::Use, parser.current_token().unwrap().token_type);
    }

    #[test]
    fn parser_next_statement_dispatches_on_the_first_keyword() {
        let mut parser = mock_parser("DROP; DROP; EXIT");
        for _ in 0..2 {
            let result = parser.next_statement();
            let expected = SqlStatement::DropTable(DropTableStatement {
                table_name: "users".to_string(),
            });
            assert_eq!(expected, result.unwrap().unwrap());
            parser.skip_semicolon();
        }
        assert_eq!(SqlStatement::Exit, parser.next_statement().unwrap().unwrap());
        assert!(parser.next_statement().is_none());
    }

    #[test]
    fn parser_next_statement_wraps_builder_errors_with_the_command() {
        let mut parser = mock_parser("CREATE TABLE");
        let result = parser.next_statement().unwrap();
        match result {
            Err(Error::InvalidSyntax { command, detail }) => {
                assert_eq!("CREATE TABLE", command);
                assert_eq!("mock failure", detail);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn parser_next_statement_handles_unknown_commands() {
        let mut parser = Parser::new("users;");
        let result = parser.next_statement().unwrap();
        assert!(matches!(result, Err(Error::UnknownCommand(ref command)) if command == "users"));
    }
}
