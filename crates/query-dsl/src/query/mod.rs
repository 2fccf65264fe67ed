use crate::query::ast::expr::Expr;
use model::core::value::Value;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod macros;
pub mod renderer;

pub fn value(val: impl Into<Value>) -> Expr {
    Expr::Value(val.into())
}
