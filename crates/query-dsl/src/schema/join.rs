//! Join trees built by pure composition.

use crate::{
    query::{
        ast::{common::JoinType, expr::Expr, field::Field},
        renderer::{Render, Renderer},
    },
    schema::{ColumnSet, Source},
};
use tracing::warn;

/// A root column set followed by joined operands. Every join operation
/// returns a new `Join`; the receiver is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: Source,
    pub parts: Vec<JoinPart>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinPart {
    pub join_type: JoinType,
    pub operand: Source,
    /// `left = right` pairs, combined with `AND`.
    pub conditions: Vec<(Expr, Expr)>,
    pub additional_constraint: Option<Expr>,
}

impl Join {
    pub fn new(table: impl Into<Source>) -> Self {
        Self {
            table: table.into(),
            parts: Vec::new(),
        }
    }

    /// Root operand followed by every joined operand, in join order.
    pub fn operands(&self) -> impl Iterator<Item = &Source> {
        std::iter::once(&self.table).chain(self.parts.iter().map(|part| &part.operand))
    }
}

impl JoinPart {
    fn has_condition(&self) -> bool {
        !self.conditions.is_empty() || self.additional_constraint.is_some()
    }
}

impl ColumnSet for Join {
    fn fields(&self) -> Vec<Field> {
        self.operands().flat_map(|operand| operand.fields()).collect()
    }

    fn describe(&self, r: &mut Renderer) {
        self.table.describe(r);
        for part in &self.parts {
            r.sql.push(' ');
            part.render(r);
        }
    }

    fn to_source(&self) -> Source {
        Source::Join(Box::new(self.clone()))
    }

    /// Appends `other` to this join instead of nesting it.
    fn join(
        &self,
        other: impl Into<Source>,
        join_type: JoinType,
        on_column: Option<Expr>,
        other_column: Option<Expr>,
        additional_constraint: Option<Expr>,
    ) -> Join {
        let conditions = match (on_column, other_column) {
            (Some(on), Some(other)) => {
                if let (Some(left), Some(right)) = (on.data_type(), other.data_type())
                    && !left.is_compatible(&right)
                {
                    warn!("Joining on columns of incompatible types {} and {}", left, right);
                }
                vec![(on, other)]
            }
            (None, None) => Vec::new(),
            (on, other) => {
                warn!(
                    "Ignoring one-sided join condition (on: {:?}, other: {:?})",
                    on, other
                );
                Vec::new()
            }
        };

        let mut joined = self.clone();
        joined.parts.push(JoinPart {
            join_type,
            operand: other.into(),
            conditions,
            additional_constraint,
        });
        joined
    }
}

impl Render for JoinPart {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(self.join_type.keyword());
        r.sql.push(' ');
        self.operand.describe(r);

        if self.join_type == JoinType::Cross || !self.has_condition() {
            return;
        }

        r.sql.push_str(" ON ");
        let mut first = true;
        for (left, right) in &self.conditions {
            if !first {
                r.sql.push_str(" AND ");
            }
            first = false;
            left.clone().eq(right.clone()).render(r);
        }
        if let Some(constraint) = &self.additional_constraint {
            if !first {
                r.sql.push_str(" AND ");
            }
            constraint.render(r);
        }
    }
}
