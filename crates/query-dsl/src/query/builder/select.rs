//! Provides a type-safe, fluent builder for constructing `Query` ASTs.

// --- Typestate Marker Structs ---
// These zero-sized structs represent the state of the builder.
// They ensure that methods are called in the correct SQL order at compile time.

use crate::{
    query::ast::{
        common::OrderDir,
        expr::Expr,
        field::Field,
        select::{OrderByExpr, Query},
    },
    schema::Source,
};

/// The initial state of the builder before any clauses have been added.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state after the `SELECT` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after the `FROM` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct FromState;

// --- The Main Builder ---

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Query,
    state: State,
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

/// Implementation for the initial state of the builder.
impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Query::default(),
            state: InitialState,
        }
    }

    /// Adds a `SELECT` clause with a list of fields.
    /// This is the entry point for building a select query.
    pub fn select<F: Into<Field>>(
        mut self,
        fields: impl IntoIterator<Item = F>,
    ) -> SelectBuilder<SelectState> {
        self.ast.fields = fields.into_iter().map(Into::into).collect();
        SelectBuilder {
            ast: self.ast,
            state: SelectState,
        }
    }
}

/// Implementation for the state after `SELECT` has been called.
impl SelectBuilder<SelectState> {
    /// Adds a `FROM` clause specifying the table, alias, subquery or join.
    pub fn from(mut self, source: impl Into<Source>) -> SelectBuilder<FromState> {
        self.ast.source = Some(source.into());
        SelectBuilder {
            ast: self.ast,
            state: FromState,
        }
    }

    /// Finalizes a query without a `FROM` clause, e.g. `SELECT 1`.
    pub fn build(self) -> Query {
        self.ast
    }
}

/// Implementation for the state after `FROM` has been called.
/// From here, we can add optional clauses like `WHERE`, `GROUP BY`, etc.
impl SelectBuilder<FromState> {
    /// Adds a `WHERE` clause to the query.
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    /// Adds a `GROUP BY` expression to the query.
    pub fn group_by(mut self, expr: impl Into<Expr>) -> Self {
        self.ast.group_by.push(expr.into());
        self
    }

    /// Adds an `ORDER BY` clause to the query.
    pub fn order_by(mut self, expr: impl Into<Expr>, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr {
            expr: expr.into(),
            direction,
        });
        self
    }

    /// Adds a `LIMIT` clause to the query.
    pub fn limit(mut self, limit: Expr) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    /// Adds an `OFFSET` clause to the query.
    pub fn offset(mut self, offset: Expr) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    /// Finalizes and returns the constructed `Query` AST.
    pub fn build(self) -> Query {
        self.ast
    }
}
