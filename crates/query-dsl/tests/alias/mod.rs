//! Aliasing tests
//!
//! These tests verify that tables, expressions and subqueries keep their
//! column identity and types when bound to a new name, and that aliases
//! render and join correctly.

mod helpers;

mod expression_alias;
mod join_query;
mod query_alias;
mod table_alias;
