//! Joining derived tables without naming them by hand.

use crate::{
    alias::query::QueryAlias,
    error::QueryError,
    query::ast::{
        common::JoinType,
        expr::{Expr, ScalarSubquery},
        select::Query,
    },
    schema::{ColumnSet, join::Join, table::Table},
};
use tracing::debug;

impl Join {
    /// Joins the subquery built by `join_part` as `q<N>`, `N` being the number
    /// of subqueries already joined. `on` builds the join condition and can
    /// reference the new alias.
    pub fn join_query<F, P>(
        &self,
        on: F,
        join_type: JoinType,
        join_part: P,
    ) -> Result<Join, QueryError>
    where
        F: FnOnce(&QueryAlias) -> Result<Expr, QueryError>,
        P: FnOnce() -> Query,
    {
        let index = self
            .parts
            .iter()
            .filter(|part| part.operand.as_query_alias().is_some())
            .count();
        let query_alias = join_part().alias(format!("q{index}"));

        debug!(
            "Joining subquery as '{}' ({:?})",
            query_alias.alias(),
            join_type
        );

        let condition = on(&query_alias)?;
        Ok(self.join(query_alias, join_type, None, None, Some(condition)))
    }

    /// The first subquery operand of this join, if any.
    pub fn last_query_alias(&self) -> Option<&QueryAlias> {
        self.parts
            .iter()
            .find_map(|part| part.operand.as_query_alias())
    }
}

impl Table {
    pub fn join_query<F, P>(
        &self,
        on: F,
        join_type: JoinType,
        join_part: P,
    ) -> Result<Join, QueryError>
    where
        F: FnOnce(&QueryAlias) -> Result<Expr, QueryError>,
        P: FnOnce() -> Query,
    {
        Join::new(self).join_query(on, join_type, join_part)
    }
}

/// A subquery in scalar position, rendered as `(<subquery>)`.
///
/// Typed after the single projected field when there is exactly one. Always
/// nullable, since the subquery may yield no row.
pub fn wrap_as_expression(query: Query) -> Expr {
    let data_type = match query.fields.as_slice() {
        [field] => field.data_type(),
        _ => None,
    };

    Expr::Subquery(ScalarSubquery {
        query: Box::new(query),
        data_type,
        nullable: true,
    })
}
