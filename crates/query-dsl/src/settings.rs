//! Render configuration.

use crate::{
    error::QueryError,
    query::dialect::{Dialect, MySql, Postgres},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Postgres,
    MySql,
}

/// Controls how statements are rendered into SQL text.
///
/// Every field has a default, so an empty JSON object is a valid configuration:
///
/// ```
/// use query_dsl::settings::{DialectKind, RenderSettings};
///
/// let settings = RenderSettings::from_json(r#"{ "dialect": "mysql" }"#).unwrap();
/// assert_eq!(settings.dialect, DialectKind::MySql);
/// assert!(settings.quote_identifiers);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub dialect: DialectKind,

    /// Wrap table, column and alias names in the dialect's quotes.
    pub quote_identifiers: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            dialect: DialectKind::Postgres,
            quote_identifiers: true,
        }
    }
}

impl RenderSettings {
    pub fn from_json(source: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        match self.dialect {
            DialectKind::Postgres => &Postgres,
            DialectKind::MySql => &MySql,
        }
    }
}
