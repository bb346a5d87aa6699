use crate::config::SessionConfig;
use crate::db::database::Database;
use crate::db::result::QueryResult;
use crate::db::table::core::names::validate_object_name;
use crate::db::table::operations::{create_table, delete, drop_table, insert, select, update};
use crate::error::{Error, Result};
use crate::interpreter::ast::SqlStatement;
use tracing::{debug, warn};

/// Owns the one active database and runs statements against it.
pub struct Session {
    config: SessionConfig,
    database: Option<Database>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            database: None,
        }
    }

    pub fn database(&self) -> Option<&Database> {
        self.database.as_ref()
    }

    /// Closes the active database, then opens (or creates) `name`.
    pub fn open_database(&mut self, name: &str) -> Result<()> {
        validate_object_name(name)?;
        self.close()?;
        self.database = Some(Database::open(&self.config, name)?);
        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        if let Some(database) = self.database.take() {
            database.close()?;
        }
        Ok(())
    }

    fn active_database(&self) -> Result<&Database> {
        self.database.as_ref().ok_or(Error::NoDatabaseSelected)
    }

    pub fn execute(&mut self, sql_statement: SqlStatement) -> Result<QueryResult> {
        debug!(command = sql_statement.command_name(), "executing statement");
        return match sql_statement {
            SqlStatement::CreateDatabase(statement) => {
                self.open_database(&statement.database_name)?;
                Ok(QueryResult::Message(format!(
                    "Database {} created and selected",
                    statement.database_name
                )))
            }
            SqlStatement::UseDatabase(statement) => {
                self.open_database(&statement.database_name)?;
                Ok(QueryResult::Message(format!(
                    "Using database {}",
                    statement.database_name
                )))
            }
            SqlStatement::CreateTable(statement) => {
                let table_name = statement.table_name.clone();
                create_table::create_table(self.active_database()?, statement)?;
                Ok(QueryResult::Message(format!("Table {} created", table_name)))
            }
            SqlStatement::InsertInto(statement) => {
                let table_name = statement.table_name.clone();
                insert::insert(self.active_database()?, statement)?;
                Ok(QueryResult::Message(format!(
                    "Record inserted into table {}",
                    table_name
                )))
            }
            SqlStatement::Select(statement) => {
                let result = select::select(self.active_database()?, statement)?;
                Ok(QueryResult::Rows(result))
            }
            SqlStatement::UpdateStatement(statement) => {
                let table_name = statement.table_name.clone();
                let updated = update::update(self.active_database()?, statement)?;
                Ok(QueryResult::Message(format!(
                    "Table {} updated ({} {} affected)",
                    table_name,
                    updated,
                    rows_word(updated)
                )))
            }
            SqlStatement::DeleteStatement(statement) => {
                let table_name = statement.table_name.clone();
                let deleted = delete::delete(self.active_database()?, statement)?;
                Ok(QueryResult::Message(format!(
                    "Records deleted from table {} ({} {} affected)",
                    table_name,
                    deleted,
                    rows_word(deleted)
                )))
            }
            SqlStatement::DropTable(statement) => {
                let table_name = statement.table_name.clone();
                drop_table::drop_table(self.active_database()?, statement)?;
                Ok(QueryResult::Message(format!("Table {} dropped", table_name)))
            }
            SqlStatement::Exit => {
                self.close()?;
                Ok(QueryResult::Exit)
            }
        };
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            warn!(%error, "failed to close database");
        }
    }
}

fn rows_word(count: usize) -> &'static str {
    if count == 1 { "row" } else { "rows" }
}
