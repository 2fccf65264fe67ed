use crate::{
    alias::expression::ExpressionAlias,
    error::QueryError,
    query::{
        ast::{column::Column, expr::Expr, field::Field, select::Query},
        renderer::{Render, Renderer},
    },
    schema::{ColumnSet, Source},
};
use tracing::{debug, trace, warn};

/// A subquery bound to a name and used as a derived table,
/// rendered as `(<subquery>) <alias>`.
///
/// The projection is re-homed once at construction: columns are cloned under
/// this alias, aliased expressions of the subquery are exposed by name only,
/// and any other expression is kept as is.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAlias {
    query: Query,
    alias: String,
    fields: Vec<Field>,
}

impl QueryAlias {
    pub fn new(query: Query, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        let fields: Vec<Field> = query
            .fields
            .iter()
            .map(|field| match field {
                Field::Column(column) => {
                    Field::Column(column.with_owner(column.owner.aliased(&alias)))
                }
                Field::Aliased(expression_alias) => {
                    Field::Expr(expression_alias.alias_only_expression())
                }
                Field::Expr(expr) => Field::Expr(expr.clone()),
            })
            .collect();

        debug!("Aliased subquery as '{}' ({} fields)", alias, fields.len());

        Self {
            query,
            alias,
            fields,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// This alias's clone of a column of the subquery's source.
    pub fn get(&self, original: &Column) -> Result<Column, QueryError> {
        trace!(
            "Resolving column '{}' against subquery '{}'",
            original.qualified_name(),
            self.alias
        );

        if self.query.source_columns().contains(original) {
            return Ok(original.with_owner(original.owner.aliased(&self.alias)));
        }

        warn!(
            "Column '{}' is not a column of the source of subquery '{}'",
            original.qualified_name(),
            self.alias
        );
        Err(QueryError::ColumnNotFound {
            column: original.qualified_name(),
            source_name: self.alias.clone(),
        })
    }

    /// Resolves an expression projected by the subquery to a by-name
    /// reference usable outside of it.
    ///
    /// Passing one of the subquery's [`ExpressionAlias`]es yields the
    /// qualified `<this alias>.<its alias>` reference. Passing the aliased
    /// expression itself yields the unqualified `<its alias>` reference.
    pub fn get_expr(&self, original: &Expr) -> Result<Expr, QueryError> {
        trace!("Resolving expression against subquery '{}'", self.alias);

        let aliased: Vec<&ExpressionAlias> = self
            .query
            .fields
            .iter()
            .filter_map(Field::as_expression_alias)
            .collect();

        if let Expr::Alias(requested) = original
            && let Some(found) = aliased.iter().find(|a| ***a == **requested)
        {
            return Ok(found.qualified_expression(self.alias.as_str()));
        }

        if let Some(found) = aliased.iter().find(|a| a.delegate() == original) {
            return Ok(found.alias_only_expression());
        }

        warn!(
            "Expression {:?} is not projected by subquery '{}'",
            original, self.alias
        );
        Err(QueryError::FieldNotFound {
            field: format!("{original:?}"),
            source_name: self.alias.clone(),
        })
    }
}

impl ColumnSet for QueryAlias {
    fn fields(&self) -> Vec<Field> {
        self.fields.clone()
    }

    fn describe(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.query.render(r);
        r.sql.push_str(") ");
        r.push_identifier(&self.alias);
    }

    fn to_source(&self) -> Source {
        Source::Query(Box::new(self.clone()))
    }
}

impl Query {
    pub fn alias(&self, name: impl Into<String>) -> QueryAlias {
        QueryAlias::new(self.clone(), name)
    }
}
