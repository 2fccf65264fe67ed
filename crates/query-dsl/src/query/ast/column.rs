//! Columns and the column sets that own them.

use crate::query::ast::common::TableRef;
use model::core::data_type::DataType;
use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
};

/// The column set a [`Column`] belongs to.
///
/// Owners are plain values so a column never holds a back-reference into
/// the table or alias that produced it. Table owners keep their schema, so
/// `a.users` and `b.users` are different owners. Two alias owners are the
/// same owner when their `"<table> <alias>"` keys match, whatever table they
/// wrap.
#[derive(Debug, Clone)]
pub enum Owner {
    Table(TableRef),
    /// `table` is the schema-qualified name of the aliased source.
    Alias { table: String, alias: String },
}

impl Owner {
    /// The unqualified name references to this owner are qualified with.
    pub fn name(&self) -> &str {
        match self {
            Owner::Table(table) => &table.name,
            Owner::Alias { alias, .. } => alias,
        }
    }

    /// The name including the schema of a table owner.
    pub fn qualified_name(&self) -> Cow<'_, str> {
        match self {
            Owner::Table(table) => Cow::Owned(table.qualified_name()),
            Owner::Alias { alias, .. } => Cow::Borrowed(alias),
        }
    }

    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Owner::Table(table) => Cow::Owned(table.qualified_name()),
            Owner::Alias { table, alias } => Cow::Owned(format!("{table} {alias}")),
        }
    }

    /// The owner of columns re-exposed by this owner under `alias`.
    pub fn aliased(&self, alias: &str) -> Owner {
        Owner::Alias {
            table: self.qualified_name().into_owned(),
            alias: alias.to_string(),
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Owner::Alias { .. })
    }
}

impl PartialEq for Owner {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Owner::Table(a), Owner::Table(b)) => a == b,
            (Owner::Alias { .. }, Owner::Alias { .. }) => self.key() == other.key(),
            _ => false,
        }
    }
}

impl Eq for Owner {}

impl Hash for Owner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_alias().hash(state);
        self.key().hash(state);
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A named, typed column of exactly one owner.
///
/// Equality is owner + name + type, so a clone re-homed under an alias is a
/// different column from its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub owner: Owner,
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl Column {
    pub fn new(owner: Owner, name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            owner,
            name: name.into(),
            data_type,
            nullable: false,
        }
    }

    /// A structurally independent copy of this column owned by `owner`.
    pub fn with_owner(&self, owner: Owner) -> Column {
        Column {
            owner,
            name: self.name.clone(),
            data_type: self.data_type.clone(),
            nullable: self.nullable,
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.owner.qualified_name(), self.name)
    }
}
