use crate::{
    alias::expression::ExpressionAlias,
    query::ast::{column::Column, expr::Expr},
};
use model::core::data_type::DataType;

/// One projected item of a column set, classified once when the projection
/// is captured.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Column(Column),
    Aliased(ExpressionAlias),
    Expr(Expr),
}

impl Field {
    pub fn as_column(&self) -> Option<&Column> {
        match self {
            Field::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn as_expression_alias(&self) -> Option<&ExpressionAlias> {
        match self {
            Field::Aliased(alias) => Some(alias),
            _ => None,
        }
    }

    pub fn to_expr(&self) -> Expr {
        match self {
            Field::Column(column) => Expr::Column(column.clone()),
            Field::Aliased(alias) => Expr::Alias(Box::new(alias.clone())),
            Field::Expr(expr) => expr.clone(),
        }
    }

    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Field::Column(column) => Some(column.data_type.clone()),
            Field::Aliased(alias) => alias.delegate().data_type(),
            Field::Expr(expr) => expr.data_type(),
        }
    }
}

impl From<Expr> for Field {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Column(column) => Field::Column(column),
            Expr::Alias(alias) => Field::Aliased(*alias),
            other => Field::Expr(other),
        }
    }
}

impl From<Column> for Field {
    fn from(column: Column) -> Self {
        Field::Column(column)
    }
}

impl From<&Column> for Field {
    fn from(column: &Column) -> Self {
        Field::Column(column.clone())
    }
}

impl From<ExpressionAlias> for Field {
    fn from(alias: ExpressionAlias) -> Self {
        Field::Aliased(alias)
    }
}
