use crate::query::{
    ast::expr::{AliasRef, Expr},
    renderer::{Render, Renderer},
};
use model::core::data_type::DataType;

/// An expression bound to a name, rendered as `<expr> AS <alias>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionAlias {
    delegate: Expr,
    alias: String,
}

impl ExpressionAlias {
    pub fn new(delegate: Expr, alias: impl Into<String>) -> Self {
        Self {
            delegate,
            alias: alias.into(),
        }
    }

    pub fn delegate(&self) -> &Expr {
        &self.delegate
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn data_type(&self) -> Option<DataType> {
        self.delegate.data_type()
    }

    /// A reference to this alias by name only, for clauses that cannot repeat
    /// the aliased expression. Keeps the delegate's type when it has one.
    pub fn alias_only_expression(&self) -> Expr {
        self.reference(None)
    }

    /// Like [`ExpressionAlias::alias_only_expression`], reached through the
    /// derived table `qualifier`, e.g. `qa.total`.
    pub fn qualified_expression(&self, qualifier: impl Into<String>) -> Expr {
        self.reference(Some(qualifier.into()))
    }

    fn reference(&self, qualifier: Option<String>) -> Expr {
        Expr::AliasRef(AliasRef {
            qualifier,
            name: self.alias.clone(),
            data_type: self.delegate.data_type(),
        })
    }
}

impl Render for ExpressionAlias {
    fn render(&self, r: &mut Renderer) {
        self.delegate.render(r);
        r.sql.push_str(" AS ");
        r.push_identifier(&self.alias);
    }
}

impl Expr {
    pub fn alias(&self, name: impl Into<String>) -> ExpressionAlias {
        ExpressionAlias::new(self.clone(), name)
    }
}
