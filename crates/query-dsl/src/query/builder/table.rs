//! Provides a fluent builder for defining a `Table`.

use crate::{
    query::ast::{
        common::TableRef,
        create_table::{ColumnDef, TableConstraint},
        expr::Expr,
    },
    schema::table::Table,
};
use model::core::data_type::DataType;

#[derive(Debug, Clone)]
pub struct TableBuilder {
    table: TableRef,
    columns: Vec<ColumnDef>,
    constraints: Vec<TableConstraint>,
}

impl TableBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            table: TableRef {
                schema: None,
                name: name.to_string(),
            },
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn schema(mut self, schema: &str) -> Self {
        self.table.schema = Some(schema.to_string());
        self
    }

    pub fn column(
        self,
        name: &str,
        data_type: DataType,
        max_length: Option<usize>,
    ) -> ColumnBuilder {
        ColumnBuilder::new(self, name, data_type, max_length)
    }

    pub fn primary_key(mut self, columns: &[&str]) -> Self {
        self.constraints.push(TableConstraint::PrimaryKey {
            columns: columns.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn foreign_key(
        mut self,
        columns: &[&str],
        references: TableRef,
        referenced_columns: &[&str],
    ) -> Self {
        self.constraints.push(TableConstraint::ForeignKey {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            references,
            referenced_columns: referenced_columns.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn build(self) -> Table {
        Table::new(self.table, self.columns, self.constraints)
    }
}

pub struct ColumnBuilder {
    table_builder: TableBuilder,
    column: ColumnDef,
}

impl ColumnBuilder {
    pub fn new(
        table_builder: TableBuilder,
        name: &str,
        data_type: DataType,
        max_length: Option<usize>,
    ) -> Self {
        Self {
            table_builder,
            column: ColumnDef {
                name: name.to_string(),
                data_type,
                is_nullable: false, // Columns are NOT NULL by default
                is_primary_key: false,
                default_value: None,
                max_length,
            },
        }
    }

    pub fn nullable(mut self) -> Self {
        self.column.is_nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.column.is_primary_key = true;
        self
    }

    pub fn default_value(mut self, default_value: Expr) -> Self {
        self.column.default_value = Some(default_value);
        self
    }

    pub fn add(mut self) -> TableBuilder {
        self.table_builder.columns.push(self.column);
        self.table_builder
    }
}
