//! Defines the AST for SQL expressions.

use crate::{
    alias::expression::ExpressionAlias,
    query::ast::{column::Column, select::Query},
};
use model::core::{data_type::DataType, value::Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column of a table or alias, rendered as `owner.column`.
    Column(Column),

    /// A literal value, such as a string, number, boolean, or NULL.
    Value(Value),

    /// A binary operation, e.g., `column = 'value'` or `a AND b`.
    BinaryOp(Box<BinaryOp>),

    /// A function call, e.g., `COUNT(*)` or `MAX(price)`.
    FunctionCall(FunctionCall),

    /// An aliased expression, e.g. `COUNT(*) AS total_count`
    Alias(Box<ExpressionAlias>),

    /// A bare reference to a name bound by an earlier alias, e.g. `total_count`.
    AliasRef(AliasRef),

    /// A parenthesized subquery used where a single value is expected.
    Subquery(ScalarSubquery),

    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
    pub wildcard: bool, // represents the '*' in 'COUNT(*)'
    pub return_type: Option<DataType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Logical
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasRef {
    /// The derived table the alias is reached through, e.g. `qa` in `qa.total`.
    pub qualifier: Option<String>,
    pub name: String,
    pub data_type: Option<DataType>,
}

/// A subquery in scalar position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarSubquery {
    pub query: Box<Query>,
    pub data_type: Option<DataType>,

    /// Whether the value can be NULL, e.g. when the subquery returns no row.
    pub nullable: bool,
}

impl Expr {
    /// The declared value type, if this expression carries one.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Expr::Column(column) => Some(column.data_type.clone()),
            Expr::Value(value) => Some(value.data_type()),
            Expr::BinaryOp(_) => Some(DataType::Boolean),
            Expr::FunctionCall(func) => func.return_type.clone(),
            Expr::Alias(alias) => alias.delegate().data_type(),
            Expr::AliasRef(alias_ref) => alias_ref.data_type.clone(),
            Expr::Subquery(subquery) => subquery.data_type.clone(),
            Expr::Cast { data_type, .. } => Some(data_type.clone()),
        }
    }

    pub fn as_column(&self) -> Option<&Column> {
        match self {
            Expr::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Eq, other.into())
    }

    pub fn not_eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::NotEq, other.into())
    }

    pub fn lt(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Lt, other.into())
    }

    pub fn lt_eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::LtEq, other.into())
    }

    pub fn gt(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Gt, other.into())
    }

    pub fn gt_eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::GtEq, other.into())
    }

    pub fn and(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::And, other.into())
    }

    pub fn or(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOperator::Or, other.into())
    }

    pub fn cast(self, data_type: DataType) -> Expr {
        Expr::Cast {
            expr: Box::new(self),
            data_type,
        }
    }

    fn binary(self, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: self,
            op,
            right,
        }))
    }
}

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Expr::Column(column)
    }
}

impl From<&Column> for Expr {
    fn from(column: &Column) -> Self {
        Expr::Column(column.clone())
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

impl From<ExpressionAlias> for Expr {
    fn from(alias: ExpressionAlias) -> Self {
        Expr::Alias(Box::new(alias))
    }
}

fn call(name: &str, args: Vec<Expr>, return_type: Option<DataType>) -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: name.to_string(),
        args,
        wildcard: false,
        return_type,
    })
}

pub fn count_all() -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: "COUNT".to_string(),
        args: vec![],
        wildcard: true,
        return_type: Some(DataType::Long),
    })
}

pub fn count(expr: impl Into<Expr>) -> Expr {
    call("COUNT", vec![expr.into()], Some(DataType::Long))
}

pub fn max(expr: impl Into<Expr>) -> Expr {
    let expr = expr.into();
    let return_type = expr.data_type();
    call("MAX", vec![expr], return_type)
}

pub fn min(expr: impl Into<Expr>) -> Expr {
    let expr = expr.into();
    let return_type = expr.data_type();
    call("MIN", vec![expr], return_type)
}

pub fn sum(expr: impl Into<Expr>) -> Expr {
    let expr = expr.into();
    let return_type = expr.data_type();
    call("SUM", vec![expr], return_type)
}

pub fn avg(expr: impl Into<Expr>) -> Expr {
    call("AVG", vec![expr.into()], Some(DataType::Decimal))
}

/// An untyped call to any SQL function.
pub fn function(name: &str, args: Vec<Expr>) -> Expr {
    call(name, args, None)
}
