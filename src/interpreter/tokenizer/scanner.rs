use crate::interpreter::tokenizer::token::TokenTypes;

#[derive(Debug, PartialEq, Clone)]
pub struct Token<'a> {
    pub token_type: TokenTypes,
    pub value: &'a str,
    // Byte offsets of the token within the scanned input, quotes included
    pub start: usize,
    pub end: usize,
    pub col_num: usize,
    pub line_num: usize,
}

pub struct Scanner<'a> {
    input: &'a str,
    current: usize,
    line_num: usize,
    line_start: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        return Self {
            input,
            current: 0,
            line_num: 1,
            line_start: 0,
        };
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn handle_skips(&mut self) -> bool {
        let c = self.current_char();
        if c == '\n' {
            self.advance();
            self.line_num += 1;
            self.line_start = self.current;
            return true;
        } else if c.is_whitespace() && !self.is_at_end() {
            self.advance();
            return true;
        }
        return false;
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += self.current_char().len_utf8();
        }
    }

    fn current_char(&self) -> char {
        return self.input[self.current..].chars().next().unwrap_or('\0');
    }

    fn peek_char(&self) -> char {
        let mut chars = self.input[self.current..].chars();
        chars.next();
        return chars.next().unwrap_or('\0');
    }

    fn build_token(&self, start: usize, token_type: TokenTypes) -> Token<'a> {
        return Token {
            token_type,
            value: &self.input[start..self.current],
            start,
            end: self.current,
            col_num: start - self.line_start,
            line_num: self.line_num,
        };
    }

    // Strips the surrounding quotes from the token value
    fn build_quoted_token(&self, start: usize, token_type: TokenTypes) -> Token<'a> {
        return Token {
            token_type,
            value: &self.input[start + 1..self.current - 1],
            start,
            end: self.current,
            col_num: start - self.line_start,
            line_num: self.line_num,
        };
    }

    // A doubled quote inside the literal stands for one quote character
    fn read_quoted(&mut self, start: usize, quote: char, token_type: TokenTypes) -> Token<'a> {
        self.advance();
        while !self.is_at_end() {
            if self.current_char() == quote {
                if self.peek_char() != quote {
                    break;
                }
                self.advance();
            }
            self.advance();
        }
        if self.is_at_end() {
            return self.build_token(start, TokenTypes::Error);
        }
        self.advance();
        return self.build_quoted_token(start, token_type);
    }

    fn read_identifier(&mut self, start: usize) -> TokenTypes {
        while self.current_char().is_alphanumeric() || self.current_char() == '_' {
            self.advance();
        }
        return match &self.input[start..self.current] {
            slice if slice.eq_ignore_ascii_case("CREATE") => TokenTypes::Create,
            slice if slice.eq_ignore_ascii_case("DATABASE") => TokenTypes::Database,
            slice if slice.eq_ignore_ascii_case("TABLE") => TokenTypes::Table,
            slice if slice.eq_ignore_ascii_case("USE") => TokenTypes::Use,
            slice if slice.eq_ignore_ascii_case("INSERT") => TokenTypes::Insert,
            slice if slice.eq_ignore_ascii_case("INTO") => TokenTypes::Into,
            slice if slice.eq_ignore_ascii_case("VALUES") => TokenTypes::Values,
            slice if slice.eq_ignore_ascii_case("SELECT") => TokenTypes::Select,
            slice if slice.eq_ignore_ascii_case("FROM") => TokenTypes::From,
            slice if slice.eq_ignore_ascii_case("WHERE") => TokenTypes::Where,
            slice if slice.eq_ignore_ascii_case("AND") => TokenTypes::And,
            slice if slice.eq_ignore_ascii_case("UPDATE") => TokenTypes::Update,
            slice if slice.eq_ignore_ascii_case("SET") => TokenTypes::Set,
            slice if slice.eq_ignore_ascii_case("DELETE") => TokenTypes::Delete,
            slice if slice.eq_ignore_ascii_case("DROP") => TokenTypes::Drop,
            slice if slice.eq_ignore_ascii_case("EXIT") => TokenTypes::Exit,
            _ => TokenTypes::Identifier,
        };
    }

    // Deliberately loose: dates such as 2024-01-31 scan as one literal
    fn read_digit(&mut self) -> TokenTypes {
        let mut token_type = TokenTypes::IntLiteral;
        while self.current_char().is_ascii_digit()
            || self.current_char() == '.'
            || self.current_char() == 'e'
            || self.current_char() == '-'
        {
            if self.current_char() == '-' && self.peek_char() == '-' {
                break;
            }
            if self.current_char() == '.' || self.current_char() == 'e' {
                token_type = TokenTypes::RealLiteral;
            }
            self.advance();
        }
        return token_type;
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.current_char() != '\n' {
            self.advance();
        }
    }

    fn single(&mut self, start: usize, token_type: TokenTypes) -> Token<'a> {
        self.advance();
        return self.build_token(start, token_type);
    }

    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            while self.handle_skips() {}

            if self.is_at_end() {
                return None;
            }
            if self.current_char() == '-' && self.peek_char() == '-' {
                self.skip_line_comment();
                continue;
            }
            break;
        }

        let start = self.current;
        return match self.current_char() {
            '\'' => Some(self.read_quoted(start, '\'', TokenTypes::String)),
            '"' => Some(self.read_quoted(start, '"', TokenTypes::Identifier)),
            c if c.is_alphabetic() || c == '_' => {
                let token_type = self.read_identifier(start);
                Some(self.build_token(start, token_type))
            }
            c if c.is_ascii_digit() || (c == '-' && self.peek_char().is_ascii_digit()) => {
                self.advance();
                let token_type = self.read_digit();
                Some(self.build_token(start, token_type))
            }
            '*' => Some(self.single(start, TokenTypes::Asterisk)),
            ';' => Some(self.single(start, TokenTypes::SemiColon)),
            '(' => Some(self.single(start, TokenTypes::LeftParen)),
            ')' => Some(self.single(start, TokenTypes::RightParen)),
            ',' => Some(self.single(start, TokenTypes::Comma)),
            '=' => Some(self.single(start, TokenTypes::Equals)),
            _ => Some(self.single(start, TokenTypes::Error)),
        };
    }
}
