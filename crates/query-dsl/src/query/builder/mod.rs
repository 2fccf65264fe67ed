pub mod alter_table;
pub mod drop_table;
pub mod select;
pub mod table;
