use crate::{
    error::QueryError,
    query::{
        ast::{
            column::{Column, Owner},
            common::TableRef,
            create_table::{ColumnDef, CreateTable, TableConstraint},
            field::Field,
        },
        builder::{
            alter_table::AlterTableBuilder, drop_table::DropTableBuilder, table::TableBuilder,
        },
        renderer::{Render, Renderer},
    },
    schema::{ColumnSet, SchemaObject, Source},
    settings::RenderSettings,
};

/// A table backed by persistent storage: a stable name and a fixed,
/// ordered list of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    table: TableRef,
    definitions: Vec<ColumnDef>,
    constraints: Vec<TableConstraint>,
    columns: Vec<Column>,
}

impl Table {
    pub fn builder(name: &str) -> TableBuilder {
        TableBuilder::new(name)
    }

    pub fn new(
        table: TableRef,
        definitions: Vec<ColumnDef>,
        constraints: Vec<TableConstraint>,
    ) -> Self {
        let owner = Owner::Table(table.clone());
        let columns = definitions
            .iter()
            .map(|def| Column {
                nullable: def.is_nullable,
                ..Column::new(owner.clone(), def.name.clone(), def.data_type.clone())
            })
            .collect();

        Self {
            table,
            definitions,
            constraints,
            columns,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table.name
    }

    pub fn table_ref(&self) -> &TableRef {
        &self.table
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn definitions(&self) -> &[ColumnDef] {
        &self.definitions
    }

    fn render_ddl<T: Render>(&self, ast: &T, settings: &RenderSettings) -> String {
        let mut renderer = Renderer::with_settings(settings).inline_values();
        ast.render(&mut renderer);
        renderer.finish().0
    }

    /// Constraints an `ALTER TABLE` has to add on its own, since `ADD COLUMN`
    /// cannot carry a primary key.
    fn alter_constraints(&self) -> Vec<TableConstraint> {
        let mut constraints = self.constraints.clone();
        let has_primary_key = constraints
            .iter()
            .any(|c| matches!(c, TableConstraint::PrimaryKey { .. }));
        let key_columns: Vec<String> = self
            .definitions
            .iter()
            .filter(|def| def.is_primary_key)
            .map(|def| def.name.clone())
            .collect();

        if !has_primary_key && !key_columns.is_empty() {
            constraints.insert(0, TableConstraint::PrimaryKey { columns: key_columns });
        }
        constraints
    }
}

impl ColumnSet for Table {
    fn fields(&self) -> Vec<Field> {
        self.columns.iter().map(Field::from).collect()
    }

    fn columns(&self) -> Vec<Column> {
        self.columns.clone()
    }

    fn describe(&self, r: &mut Renderer) {
        r.render_table_ref(&self.table);
    }

    fn to_source(&self) -> Source {
        Source::Table(self.clone())
    }
}

impl SchemaObject for Table {
    fn create_statement(&self, settings: &RenderSettings) -> Result<Vec<String>, QueryError> {
        let ast = CreateTable {
            table: self.table.clone(),
            columns: self.definitions.clone(),
            constraints: self.constraints.clone(),
            if_not_exists: true,
        };
        Ok(vec![self.render_ddl(&ast, settings)])
    }

    fn drop_statement(&self, settings: &RenderSettings) -> Result<Vec<String>, QueryError> {
        let ast = DropTableBuilder::new(self.table.clone()).if_exists().build();
        Ok(vec![self.render_ddl(&ast, settings)])
    }

    /// One `ALTER TABLE ... ADD COLUMN` per column, then one `ADD` per
    /// constraint, for bringing an existing table up to this definition.
    fn modify_statement(&self, settings: &RenderSettings) -> Result<Vec<String>, QueryError> {
        let columns = self.definitions.iter().map(|def| {
            AlterTableBuilder::new(self.table.clone())
                .add_column(def.clone())
                .build()
        });
        let constraints = self.alter_constraints().into_iter().map(|constraint| {
            AlterTableBuilder::new(self.table.clone())
                .add_constraint(constraint)
                .build()
        });

        Ok(columns
            .chain(constraints)
            .map(|ast| self.render_ddl(&ast, settings))
            .collect())
    }
}
