//! A small SQL-like shell over an embedded key-value store. Each database is a
//! fjall keyspace, each table a partition, each row a set of `<id>:<column>` cells.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod interpreter;

pub use config::SessionConfig;
pub use db::result::{QueryResult, ResultSet};
pub use db::session::Session;
pub use error::{Error, Result};
pub use interpreter::run_sql;
