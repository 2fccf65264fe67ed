//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::{
    query::ast::{column::Column, common::OrderDir, expr::Expr, field::Field},
    schema::{ColumnSet, Source},
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Query {
    /// The projected fields, classified once at build time.
    /// e.g., `id`, `name`, `COUNT(*) AS total`
    pub fields: Vec<Field>,

    /// The table, alias, derived table or join the query reads from.
    pub source: Option<Source>,

    /// The WHERE clause condition.
    pub where_clause: Option<Expr>,

    /// The GROUP BY clause.
    pub group_by: Vec<Expr>,

    /// The ORDER BY clause.
    pub order_by: Vec<OrderByExpr>,

    /// The LIMIT clause.
    pub limit: Option<Expr>,

    /// The OFFSET clause.
    pub offset: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<OrderDir>,
}

impl Query {
    /// Columns of the source the query reads from, not of its projection.
    pub fn source_columns(&self) -> Vec<Column> {
        self.source
            .as_ref()
            .map(|source| source.columns())
            .unwrap_or_default()
    }
}
