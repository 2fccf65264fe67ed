use crate::{
    error::QueryError,
    query::{
        ast::{
            column::{Column, Owner},
            field::Field,
        },
        renderer::Renderer,
    },
    schema::{ColumnSet, SchemaObject, Source, table::Table},
    settings::RenderSettings,
};
use std::hash::{Hash, Hasher};
use tracing::{debug, trace, warn};

/// A table renamed for the scope of one query, e.g. `users u`.
///
/// Two aliases are equal when their `"<table> <alias>"` keys match, even if
/// they wrap different table definitions.
#[derive(Debug, Clone)]
pub struct Alias {
    delegate: Table,
    alias: String,
    table_name_with_alias: String,
    fields: Vec<Field>,
    columns: Vec<Column>,
}

impl Alias {
    pub fn new(delegate: &Table, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        let owner = Owner::Alias {
            table: delegate.table_ref().qualified_name(),
            alias: alias.clone(),
        };

        let fields: Vec<Field> = delegate
            .fields()
            .into_iter()
            .map(|field| match field {
                Field::Column(column) => Field::Column(column.with_owner(owner.clone())),
                other => other,
            })
            .collect();
        let columns = fields.iter().filter_map(Field::as_column).cloned().collect();

        debug!(
            "Aliased table '{}' as '{}' ({} fields)",
            delegate.table_name(),
            alias,
            fields.len()
        );

        Self {
            table_name_with_alias: owner.key().into_owned(),
            delegate: delegate.clone(),
            alias,
            fields,
            columns,
        }
    }

    pub fn delegate(&self) -> &Table {
        &self.delegate
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The name columns of this alias are qualified with.
    pub fn table_name(&self) -> &str {
        &self.alias
    }

    pub fn table_name_with_alias(&self) -> &str {
        &self.table_name_with_alias
    }

    pub fn owner(&self) -> Owner {
        Owner::Alias {
            table: self.delegate.table_ref().qualified_name(),
            alias: self.alias.clone(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The delegate column behind `column`, if `column` belongs to this alias.
    pub fn original_column(&self, column: &Column) -> Option<&Column> {
        if column.owner != self.owner() {
            return None;
        }
        self.delegate.column_by_name(&column.name)
    }

    /// This alias's clone of a delegate column.
    pub fn get(&self, original: &Column) -> Result<Column, QueryError> {
        trace!(
            "Resolving '{}' against alias '{}'",
            original.qualified_name(),
            self.table_name_with_alias
        );

        let found = self
            .delegate
            .columns()
            .iter()
            .any(|column| column == original)
            .then(|| self.columns.iter().find(|c| c.name == original.name))
            .flatten();

        match found {
            Some(column) => Ok(column.clone()),
            None => {
                warn!(
                    "Column '{}' does not belong to '{}'",
                    original.qualified_name(),
                    self.delegate.table_name()
                );
                Err(QueryError::ColumnNotFound {
                    column: original.qualified_name(),
                    source_name: self.table_name_with_alias.clone(),
                })
            }
        }
    }

    fn unsupported() -> Result<Vec<String>, QueryError> {
        Err(QueryError::Unsupported("Unsupported for aliases".to_string()))
    }
}

impl PartialEq for Alias {
    fn eq(&self, other: &Self) -> bool {
        self.table_name_with_alias == other.table_name_with_alias
    }
}

impl Eq for Alias {}

impl Hash for Alias {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table_name_with_alias.hash(state);
    }
}

impl ColumnSet for Alias {
    fn fields(&self) -> Vec<Field> {
        self.fields.clone()
    }

    fn columns(&self) -> Vec<Column> {
        self.columns.clone()
    }

    fn describe(&self, r: &mut Renderer) {
        r.render_table_ref(self.delegate.table_ref());
        r.sql.push(' ');
        r.push_identifier(&self.alias);
    }

    fn to_source(&self) -> Source {
        Source::Alias(self.clone())
    }
}

impl SchemaObject for Alias {
    fn create_statement(&self, _settings: &RenderSettings) -> Result<Vec<String>, QueryError> {
        Self::unsupported()
    }

    fn drop_statement(&self, _settings: &RenderSettings) -> Result<Vec<String>, QueryError> {
        Self::unsupported()
    }

    fn modify_statement(&self, _settings: &RenderSettings) -> Result<Vec<String>, QueryError> {
        Self::unsupported()
    }
}

impl Table {
    pub fn alias(&self, name: impl Into<String>) -> Alias {
        Alias::new(self, name)
    }
}
