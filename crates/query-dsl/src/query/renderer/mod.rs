//! Defines the core rendering trait and context for converting AST to SQL.

use model::core::value::Value;

use crate::{
    query::{ast::common::TableRef, dialect::Dialect},
    settings::RenderSettings,
};

pub mod alter_table;
pub mod create_table;
pub mod drop_table;
pub mod expr;
pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details. Fragments are
/// appended strictly in call order.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    quote_identifiers: bool,
    inline_values: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            quote_identifiers: true,
            inline_values: false,
        }
    }

    pub fn with_settings(settings: &RenderSettings) -> Renderer<'static> {
        Renderer {
            quote_identifiers: settings.quote_identifiers,
            ..Renderer::new(settings.dialect())
        }
    }

    /// Writes literals straight into the SQL text instead of binding them.
    /// DDL statements cannot carry bind parameters.
    pub fn inline_values(mut self) -> Self {
        self.inline_values = true;
        self
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        if self.inline_values {
            self.sql.push_str(&value.to_string());
            return;
        }

        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    pub fn push_identifier(&mut self, ident: &str) {
        if self.quote_identifiers {
            let quoted = self.dialect.quote_identifier(ident);
            self.sql.push_str(&quoted);
        } else {
            self.sql.push_str(ident);
        }
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        if let Some(schema) = &table.schema {
            self.push_identifier(schema);
            self.sql.push('.');
        }
        self.push_identifier(&table.name);
    }
}

/// Renders a single node with a fresh renderer.
pub fn render_sql<T: Render + ?Sized>(node: &T, dialect: &dyn Dialect) -> (String, Vec<Value>) {
    let mut renderer = Renderer::new(dialect);
    node.render(&mut renderer);
    renderer.finish()
}

/// Renders a single node with a renderer configured by `settings`.
pub fn render_sql_with_settings<T: Render + ?Sized>(
    node: &T,
    settings: &RenderSettings,
) -> (String, Vec<Value>) {
    let mut renderer = Renderer::with_settings(settings);
    node.render(&mut renderer);
    renderer.finish()
}
