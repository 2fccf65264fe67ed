//! Provides a fluent builder for constructing `AlterTable` ASTs.

use crate::query::ast::{
    alter_table::{AlterTable, AlterTableOperation},
    common::TableRef,
    create_table::{ColumnDef, TableConstraint},
};

#[derive(Debug, Clone)]
pub struct AlterTableBuilder {
    ast: AlterTable,
}

impl AlterTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: AlterTable {
                table,
                ..Default::default()
            },
        }
    }

    pub fn add_column(mut self, column: ColumnDef) -> Self {
        self.ast.operations.push(AlterTableOperation::AddColumn(ColumnDef {
            // Cannot add PK via ADD COLUMN
            is_primary_key: false,
            ..column
        }));
        self
    }

    pub fn add_constraint(mut self, constraint: TableConstraint) -> Self {
        self.ast
            .operations
            .push(AlterTableOperation::AddConstraint(constraint));
        self
    }

    pub fn build(self) -> AlterTable {
        self.ast
    }
}
