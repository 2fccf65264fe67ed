use crate::{
    query::{
        ast::{
            common::OrderDir,
            field::Field,
            select::{OrderByExpr, Query},
        },
        renderer::{Render, Renderer},
    },
    schema::ColumnSet,
};

impl Render for Query {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            field.render(r);
        }

        // 2. FROM
        if let Some(source) = &self.source {
            r.sql.push_str(" FROM ");
            source.describe(r);
        }

        // 3. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }

        // 4. GROUP BY
        if !self.group_by.is_empty() {
            r.sql.push_str(" GROUP BY ");
            for (i, expr) in self.group_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                expr.render(r);
            }
        }

        // 5. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.render(r);
            }
        }

        // 6. LIMIT
        if let Some(limit) = &self.limit {
            r.sql.push_str(" LIMIT ");
            limit.render(r);
        }

        // 7. OFFSET
        if let Some(offset) = &self.offset {
            r.sql.push_str(" OFFSET ");
            offset.render(r);
        }
    }
}

impl Render for Field {
    fn render(&self, r: &mut Renderer) {
        match self {
            Field::Column(column) => column.render(r),
            Field::Aliased(alias) => alias.render(r),
            Field::Expr(expr) => expr.render(r),
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = &self.direction {
            let dir_str = match dir {
                OrderDir::Asc => "ASC",
                OrderDir::Desc => "DESC",
            };
            r.sql.push(' ');
            r.sql.push_str(dir_str);
        }
    }
}
