use crate::interpreter::ast::SqlStatement;
use crate::interpreter::ast::parser::Parser;
use crate::interpreter::ast::{
    create_statement, delete_statement, drop_statement, insert_statement, select_statement,
    session_statements, update_statement,
};

pub trait StatementBuilder {
    fn build_create(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_use(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_insert(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_select(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_update(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_delete(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_drop(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_exit(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
}

pub struct DefaultStatementBuilder;

impl StatementBuilder for DefaultStatementBuilder {
    fn build_create(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        create_statement::build(parser)
    }

    fn build_use(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        session_statements::build_use(parser)
    }

    fn build_insert(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        insert_statement::build(parser)
    }

    fn build_select(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        select_statement::build(parser)
    }

    fn build_update(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        update_statement::build(parser)
    }

    fn build_delete(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        delete_statement::build(parser)
    }

    fn build_drop(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        drop_statement::build(parser)
    }

    fn build_exit(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        session_statements::build_exit(parser)
    }
}

#[cfg(test)]
pub struct MockStatementBuilder;
#[cfg(test)]
use crate::interpreter::ast::DropTableStatement;

#[cfg(test)]
impl StatementBuilder for MockStatementBuilder {
    fn build_create(&self, _parser: &mut Parser) -> Result<SqlStatement, String> {
        return Err("mock failure".to_string());
    }

    fn build_use(&self, _parser: &mut Parser) -> Result<SqlStatement, String> {
        todo!();
    }

    fn build_insert(&self, _parser: &mut Parser) -> Result<SqlStatement, String> {
        todo!();
    }

    fn build_select(&self, _parser: &mut Parser) -> Result<SqlStatement, String> {
        todo!();
    }

    fn build_update(&self, _parser: &mut Parser) -> Result<SqlStatement, String> {
        todo!();
    }

    fn build_delete(&self, _parser: &mut Parser) -> Result<SqlStatement, String> {
        todo!();
    }

    fn build_drop(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        return Ok(SqlStatement::DropTable(DropTableStatement {
            table_name: "users".to_string(),
        }));
    }

    fn build_exit(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        return Ok(SqlStatement::Exit);
    }
}
