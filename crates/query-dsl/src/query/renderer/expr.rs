use crate::query::{
    ast::{
        column::{Column, Owner},
        expr::{AliasRef, BinaryOp, BinaryOperator, Expr, FunctionCall, ScalarSubquery},
    },
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Column(column) => column.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::BinaryOp(op) => op.render(r),
            Expr::FunctionCall(func) => func.render(r),
            Expr::Alias(alias) => alias.render(r),
            Expr::AliasRef(alias_ref) => alias_ref.render(r),
            Expr::Subquery(subquery) => subquery.render(r),
            Expr::Cast { expr, data_type } => {
                r.sql.push_str("CAST(");
                expr.render(r);
                r.sql.push_str(" AS ");
                let type_name = r.dialect.render_data_type(data_type, None);
                r.sql.push_str(&type_name);
                r.sql.push(')');
            }
        }
    }
}

impl Render for Column {
    fn render(&self, r: &mut Renderer) {
        match &self.owner {
            Owner::Table(table) => r.render_table_ref(table),
            Owner::Alias { alias, .. } => r.push_identifier(alias),
        }
        r.sql.push('.');
        r.push_identifier(&self.name);
    }
}

impl Render for AliasRef {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.push_identifier(qualifier);
            r.sql.push('.');
        }
        r.push_identifier(&self.name);
    }
}

impl Render for ScalarSubquery {
    fn render(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.query.render(r);
        r.sql.push(')');
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
            BinaryOperator::And => " AND ",
            BinaryOperator::Or => " OR ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
        r.sql.push(')');
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push('(');
        if self.wildcard {
            r.sql.push('*');
        } else {
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                arg.render(r);
            }
        }
        r.sql.push(')');
    }
}
