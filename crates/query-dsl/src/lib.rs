//! Typed SQL query construction with table, expression and subquery aliasing.
//!
//! A [`Table`](schema::table::Table), an [`Expr`](query::ast::expr::Expr) or a
//! [`Query`](query::ast::select::Query) can be bound to a new name with
//! `alias(..)`. The resulting [`Alias`], [`ExpressionAlias`] and [`QueryAlias`]
//! re-home the source's columns so the same source can appear several times in
//! one statement.

pub mod alias;
pub mod error;
pub mod query;
pub mod schema;
pub mod settings;

pub use alias::{
    expression::ExpressionAlias,
    join::wrap_as_expression,
    query::QueryAlias,
    table::Alias,
};
pub use error::QueryError;
