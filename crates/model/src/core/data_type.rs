use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

/// Value type carried by a column or a typed expression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Decimal,
    Short,
    Long,
    Float,
    Double,
    Boolean,
    Null,
    Date,
    Timestamp,
    Int,
    IntUnsigned,
    Time,
    VarChar,
    Char,
    String,
    Json,
    Enum,
    Bytea,
    Uuid,
    Array(Option<String>),
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    MySql,
    Postgres,
}

impl DataType {
    pub fn mysql_name(&self) -> Cow<'_, str> {
        match self {
            DataType::Decimal => Cow::Borrowed("DECIMAL"),
            DataType::Short => Cow::Borrowed("SMALLINT"),
            DataType::Long => Cow::Borrowed("BIGINT"),
            DataType::Int => Cow::Borrowed("INT"),
            DataType::IntUnsigned => Cow::Borrowed("INT UNSIGNED"),
            DataType::Float => Cow::Borrowed("FLOAT"),
            DataType::Double => Cow::Borrowed("DOUBLE"),
            DataType::Boolean => Cow::Borrowed("BOOLEAN"),
            DataType::Null => Cow::Borrowed("NULL"),
            DataType::Timestamp => Cow::Borrowed("TIMESTAMP"),
            DataType::Date => Cow::Borrowed("DATE"),
            DataType::Time => Cow::Borrowed("TIME"),
            DataType::VarChar => Cow::Borrowed("VARCHAR"),
            DataType::Char => Cow::Borrowed("CHAR"),
            DataType::String => Cow::Borrowed("TEXT"),
            DataType::Json => Cow::Borrowed("JSON"),
            DataType::Enum => Cow::Borrowed("ENUM"),
            DataType::Bytea => Cow::Borrowed("BLOB"),
            DataType::Uuid => Cow::Borrowed("CHAR(36)"),
            DataType::Array(array_name) => match array_name {
                Some(name) => Cow::Owned(name.clone()),
                None => Cow::Borrowed("JSON"),
            },
            DataType::Custom(name) => Cow::Borrowed(name),
        }
    }

    pub fn postgres_name(&self) -> Cow<'_, str> {
        match self {
            DataType::Decimal => Cow::Borrowed("DECIMAL"),
            DataType::Short => Cow::Borrowed("SMALLINT"),
            DataType::Long => Cow::Borrowed("BIGINT"),
            DataType::Int | DataType::IntUnsigned => Cow::Borrowed("INTEGER"),
            DataType::Float => Cow::Borrowed("REAL"),
            DataType::Double => Cow::Borrowed("DOUBLE PRECISION"),
            DataType::Boolean => Cow::Borrowed("BOOLEAN"),
            DataType::Null => Cow::Borrowed("NULL"),
            DataType::Timestamp => Cow::Borrowed("TIMESTAMP"),
            DataType::Date => Cow::Borrowed("DATE"),
            DataType::Time => Cow::Borrowed("TIME"),
            DataType::VarChar => Cow::Borrowed("VARCHAR"),
            DataType::Char => Cow::Borrowed("CHAR"),
            DataType::String => Cow::Borrowed("TEXT"),
            DataType::Json => Cow::Borrowed("JSONB"),
            DataType::Enum => Cow::Borrowed("ENUM"),
            DataType::Bytea => Cow::Borrowed("BYTEA"),
            DataType::Uuid => Cow::Borrowed("UUID"),
            DataType::Array(Some(name)) => Cow::Owned(name.clone()),
            DataType::Array(None) => Cow::Borrowed("TEXT[]"),
            DataType::Custom(name) => Cow::Borrowed(name),
        }
    }

    /// Whether a value of `other` can stand where `self` is expected,
    /// e.g. comparing an aliased column against its source column.
    pub fn is_compatible(&self, other: &DataType) -> bool {
        match (self, other) {
            (DataType::Int, DataType::IntUnsigned)
            | (DataType::IntUnsigned, DataType::Int)
            | (DataType::Int, DataType::Short)
            | (DataType::Short, DataType::Int)
            | (DataType::Long, DataType::Int)
            | (DataType::Int, DataType::Long) => true,
            (DataType::String, DataType::VarChar) | (DataType::VarChar, DataType::String) => true,
            (DataType::Char, DataType::VarChar) | (DataType::VarChar, DataType::Char) => true,
            (DataType::Enum, DataType::String) | (DataType::String, DataType::Enum) => true,
            (DataType::Date, DataType::Timestamp) | (DataType::Timestamp, DataType::Date) => true,
            (DataType::Float, DataType::Double) | (DataType::Double, DataType::Float) => true,
            (DataType::Null, _) | (_, DataType::Null) => true,
            _ => self == other,
        }
    }

    pub fn supports_length(&self, dialect: SqlDialect) -> bool {
        match dialect {
            SqlDialect::Postgres => matches!(self, DataType::VarChar | DataType::Char),
            SqlDialect::MySql => matches!(self, DataType::VarChar | DataType::Char),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.postgres_name())
    }
}
