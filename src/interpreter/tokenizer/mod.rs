pub mod scanner;
pub mod token;
use crate::interpreter::tokenizer::scanner::Token;

pub fn tokenize<'a>(line: &'a str) -> Vec<Token<'a>> {
    let mut tokens: Vec<Token<'a>> = vec![];
    let mut tokenizer = scanner::Scanner::new(line);
    loop {
        let next_token = tokenizer.next_token();
        if let Some(next_token) = next_token {
            tokens.push(next_token);
        } else {
            tokens.push(Token {
                token_type: token::TokenTypes::EOF,
                value: "",
                start: line.len(),
                end: line.len(),
                col_num: 0,
                line_num: 0,
            });
            break;
        }
    }
    return tokens;
}
