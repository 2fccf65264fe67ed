pub mod alter_table;
pub mod column;
pub mod common;
pub mod create_table;
pub mod drop_table;
pub mod expr;
pub mod field;
pub mod select;
