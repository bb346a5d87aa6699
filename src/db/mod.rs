pub mod database;
pub mod result;
pub mod session;
pub mod table;
