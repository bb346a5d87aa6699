#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenTypes {
    // Keywords
    Create, Database, Table, Use, Insert, Into, Values,
    Select, From, Where, And, Update, Set, Delete, Drop, Exit,
    // Single Character Tokens
    Asterisk, SemiColon, LeftParen, RightParen, Comma, Equals,
    // Literals
    String, IntLiteral, RealLiteral,
    // Others
    Identifier,
    EOF, Error,
}

impl TokenTypes {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenTypes::Create
                | TokenTypes::Database
                | TokenTypes::Table
                | TokenTypes::Use
                | TokenTypes::Insert
                | TokenTypes::Into
                | TokenTypes::Values
                | TokenTypes::Select
                | TokenTypes::From
                | TokenTypes::Where
                | TokenTypes::And
                | TokenTypes::Update
                | TokenTypes::Set
                | TokenTypes::Delete
                | TokenTypes::Drop
                | TokenTypes::Exit
        )
    }

    // Tokens that may stand for a cell value
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenTypes::String
                | TokenTypes::IntLiteral
                | TokenTypes::RealLiteral
                | TokenTypes::Identifier
        )
    }
}
