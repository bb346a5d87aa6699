pub mod column;
pub mod names;
pub mod row;
pub mod table;
