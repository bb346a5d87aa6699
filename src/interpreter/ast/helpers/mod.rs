pub mod common;
pub mod token;
pub mod where_clause;
