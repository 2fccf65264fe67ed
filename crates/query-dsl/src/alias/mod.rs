//! Binding tables, expressions and subqueries to new names.
//!
//! Every alias clones the columns it exposes and re-homes them under its own
//! [`Owner`](crate::query::ast::column::Owner), so the aliased source and the
//! alias never share a column value.

pub mod expression;
pub mod join;
pub mod query;
pub mod table;
