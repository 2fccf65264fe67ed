//! Column sets: tables, aliases, derived tables and joins.

use crate::{
    alias::{query::QueryAlias, table::Alias},
    error::QueryError,
    query::{
        ast::{column::Column, common::JoinType, expr::Expr, field::Field},
        renderer::Renderer,
    },
    schema::{join::Join, table::Table},
    settings::RenderSettings,
};

pub mod join;
pub mod table;

/// A named source of fields that can be selected from and joined.
pub trait ColumnSet {
    /// Projected fields, in order.
    fn fields(&self) -> Vec<Field>;

    /// The column-typed subset of [`ColumnSet::fields`], in the same order.
    fn columns(&self) -> Vec<Column> {
        self.fields()
            .iter()
            .filter_map(Field::as_column)
            .cloned()
            .collect()
    }

    /// Renders this set as a `FROM` or `JOIN` operand.
    fn describe(&self, r: &mut Renderer);

    fn to_source(&self) -> Source;

    /// Joins `other` with this set as the left operand. The optional
    /// `on_column = other_column` pair and `additional_constraint` are
    /// combined with `AND`.
    fn join(
        &self,
        other: impl Into<Source>,
        join_type: JoinType,
        on_column: Option<Expr>,
        other_column: Option<Expr>,
        additional_constraint: Option<Expr>,
    ) -> Join
    where
        Self: Sized,
    {
        Join::new(self.to_source()).join(
            other,
            join_type,
            on_column,
            other_column,
            additional_constraint,
        )
    }

    fn join_on(&self, other: impl Into<Source>, join_type: JoinType, condition: Expr) -> Join
    where
        Self: Sized,
    {
        self.join(other, join_type, None, None, Some(condition))
    }

    fn inner_join(&self, other: impl Into<Source>) -> Join
    where
        Self: Sized,
    {
        self.join(other, JoinType::Inner, None, None, None)
    }

    fn left_join(&self, other: impl Into<Source>) -> Join
    where
        Self: Sized,
    {
        self.join(other, JoinType::Left, None, None, None)
    }

    fn right_join(&self, other: impl Into<Source>) -> Join
    where
        Self: Sized,
    {
        self.join(other, JoinType::Right, None, None, None)
    }

    fn full_join(&self, other: impl Into<Source>) -> Join
    where
        Self: Sized,
    {
        self.join(other, JoinType::Full, None, None, None)
    }

    fn cross_join(&self, other: impl Into<Source>) -> Join
    where
        Self: Sized,
    {
        self.join(other, JoinType::Cross, None, None, None)
    }
}

/// DDL generation for objects that exist in the database schema.
pub trait SchemaObject {
    fn create_statement(&self, settings: &RenderSettings) -> Result<Vec<String>, QueryError>;

    fn drop_statement(&self, settings: &RenderSettings) -> Result<Vec<String>, QueryError>;

    fn modify_statement(&self, settings: &RenderSettings) -> Result<Vec<String>, QueryError>;
}

/// Any column set usable as a query source or join operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Table(Table),
    Alias(Alias),
    Query(Box<QueryAlias>),
    Join(Box<Join>),
}

impl Source {
    pub fn as_query_alias(&self) -> Option<&QueryAlias> {
        match self {
            Source::Query(query_alias) => Some(query_alias),
            _ => None,
        }
    }

    pub fn as_alias(&self) -> Option<&Alias> {
        match self {
            Source::Alias(alias) => Some(alias),
            _ => None,
        }
    }
}

impl ColumnSet for Source {
    fn fields(&self) -> Vec<Field> {
        match self {
            Source::Table(table) => table.fields(),
            Source::Alias(alias) => alias.fields(),
            Source::Query(query_alias) => query_alias.fields(),
            Source::Join(join) => join.fields(),
        }
    }

    fn columns(&self) -> Vec<Column> {
        match self {
            Source::Table(table) => ColumnSet::columns(table),
            Source::Alias(alias) => ColumnSet::columns(alias),
            Source::Query(query_alias) => ColumnSet::columns(&**query_alias),
            Source::Join(join) => ColumnSet::columns(&**join),
        }
    }

    fn describe(&self, r: &mut Renderer) {
        match self {
            Source::Table(table) => table.describe(r),
            Source::Alias(alias) => alias.describe(r),
            Source::Query(query_alias) => query_alias.describe(r),
            Source::Join(join) => join.describe(r),
        }
    }

    fn to_source(&self) -> Source {
        self.clone()
    }
}

impl From<Table> for Source {
    fn from(table: Table) -> Self {
        Source::Table(table)
    }
}

impl From<&Table> for Source {
    fn from(table: &Table) -> Self {
        Source::Table(table.clone())
    }
}

impl From<Alias> for Source {
    fn from(alias: Alias) -> Self {
        Source::Alias(alias)
    }
}

impl From<&Alias> for Source {
    fn from(alias: &Alias) -> Self {
        Source::Alias(alias.clone())
    }
}

impl From<QueryAlias> for Source {
    fn from(query_alias: QueryAlias) -> Self {
        Source::Query(Box::new(query_alias))
    }
}

impl From<&QueryAlias> for Source {
    fn from(query_alias: &QueryAlias) -> Self {
        Source::Query(Box::new(query_alias.clone()))
    }
}

impl From<Join> for Source {
    fn from(join: Join) -> Self {
        Source::Join(Box::new(join))
    }
}

impl From<&Join> for Source {
    fn from(join: &Join) -> Self {
        Source::Join(Box::new(join.clone()))
    }
}
