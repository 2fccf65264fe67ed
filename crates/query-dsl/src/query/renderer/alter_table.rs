use crate::query::{
    ast::alter_table::{AlterTable, AlterTableOperation},
    renderer::{Render, Renderer},
};

impl Render for AlterTable {
    fn render(&self, r: &mut Renderer) {
        // Each operation becomes its own ALTER TABLE statement; not every
        // dialect accepts several clauses in one statement.
        for (i, op) in self.operations.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(";\n");
            }
            r.sql.push_str("ALTER TABLE ");
            r.render_table_ref(&self.table);
            r.sql.push(' ');
            op.render(r);
        }
        r.sql.push(';');
    }
}

impl Render for AlterTableOperation {
    fn render(&self, r: &mut Renderer) {
        match self {
            AlterTableOperation::AddColumn(col_def) => {
                r.sql.push_str("ADD COLUMN ");
                col_def.render(r);
            }
            AlterTableOperation::AddConstraint(constraint) => {
                r.sql.push_str("ADD ");
                constraint.render(r);
            }
        }
    }
}
