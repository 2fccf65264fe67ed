//! Tests for joining subqueries and scalar subqueries

use super::helpers::*;
use model::core::{data_type::DataType, value::Value};
use query_dsl::{
    QueryAlias, QueryError, wrap_as_expression,
    query::{
        ast::{
            common::JoinType,
            expr::{Expr, count_all, max},
            field::Field,
        },
        builder::select::SelectBuilder,
        dialect::Postgres,
        renderer::render_sql,
        value,
    },
    schema::{ColumnSet, join::Join},
};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_join_query_names_subqueries_in_order() {
    let users = users();
    let posts = posts();
    let user_id = posts.column_by_name("user_id").unwrap();
    let id = users.column_by_name("id").unwrap();
    let on = |qa: &QueryAlias| -> Result<Expr, QueryError> {
        Ok(Expr::from(id).eq(qa.get(user_id)?))
    };

    let first = users
        .join_query(on, JoinType::Left, || posts_per_user(&posts))
        .unwrap();
    let second = first
        .join_query(on, JoinType::Inner, || posts_per_user(&posts))
        .unwrap();

    let names: Vec<&str> = second
        .parts
        .iter()
        .filter_map(|part| part.operand.as_query_alias())
        .map(QueryAlias::alias)
        .collect();
    assert_eq!(names, vec!["q0", "q1"]);
    assert_eq!(first.parts.len(), 1);
    assert!(logs_contain("Joining subquery as 'q0'"));
    assert!(logs_contain("Joining subquery as 'q1'"));

    let rendered = describe(&second);
    assert!(rendered.contains(r#") "q0" ON ("users"."id" = "q0"."user_id")"#));
    assert!(rendered.contains(r#") "q1" ON ("users"."id" = "q1"."user_id")"#));
}

#[test]
fn test_join_query_counts_only_subqueries() {
    let users = users();
    let posts = posts();
    let join = Join::new(&users).inner_join(&posts);

    let join = join
        .join_query(
            |qa| Ok(Expr::from(qa.get(posts.column_by_name("user_id").unwrap())?).gt(Value::Int(0))),
            JoinType::Inner,
            || posts_per_user(&posts),
        )
        .unwrap();

    assert_eq!(join.last_query_alias().map(QueryAlias::alias), Some("q0"));
}

#[test]
fn test_join_query_condition_sees_projection() {
    let users = users();
    let posts = posts();

    let join = users
        .join_query(
            |qa| {
                let post_count = qa.get_expr(&count_all())?;
                Ok(post_count.gt(value(10)))
            },
            JoinType::Inner,
            || posts_per_user(&posts),
        )
        .unwrap();

    let (sql, params) = render_sql(
        &SelectBuilder::new()
            .select(ColumnSet::columns(&users))
            .from(join)
            .build(),
        &Postgres,
    );
    assert!(sql.ends_with(r#") "q0" ON ("post_count" > $1)"#));
    assert_eq!(params, vec![Value::Int(10)]);
}

#[test]
fn test_join_query_propagates_lookup_failure() {
    let users = users();
    let posts = posts();
    let result = users.join_query(
        |qa| Ok(Expr::from(qa.get(users.column_by_name("name").unwrap())?)),
        JoinType::Inner,
        || posts_per_user(&posts),
    );
    assert!(matches!(result, Err(QueryError::ColumnNotFound { .. })));
}

#[test]
fn test_last_query_alias_is_first_subquery() {
    let users = users();
    let posts = posts();
    let join = users.inner_join(&posts);
    assert!(join.last_query_alias().is_none());

    let join = join
        .join_query(|_| Ok(Expr::from(Value::Boolean(true))), JoinType::Cross, || {
            posts_per_user(&posts)
        })
        .unwrap()
        .join_query(|_| Ok(Expr::from(Value::Boolean(true))), JoinType::Cross, || {
            posts_per_user(&posts)
        })
        .unwrap();

    assert_eq!(join.last_query_alias().map(QueryAlias::alias), Some("q0"));
    assert!(!describe(&join).contains(" ON "));
}

#[test]
fn test_wrap_as_expression() {
    let users = users();
    let posts = posts();
    let latest = SelectBuilder::new()
        .select(vec![max(posts.column_by_name("id").unwrap())])
        .from(&posts)
        .build();

    let scalar = wrap_as_expression(latest);
    assert_eq!(scalar.data_type(), Some(DataType::Int));
    assert!(!posts.column_by_name("id").unwrap().nullable);
    assert!(matches!(&scalar, Expr::Subquery(s) if s.nullable));

    let query = SelectBuilder::new()
        .select(vec![
            Field::from(users.column_by_name("id").unwrap()),
            scalar.alias("latest_post").into(),
        ])
        .from(&users)
        .build();
    let (sql, _) = render_sql(&query, &Postgres);
    assert_eq!(
        sql,
        r#"SELECT "users"."id", (SELECT MAX("posts"."id") FROM "posts") AS "latest_post" FROM "users""#
    );

    let untyped = wrap_as_expression(posts_per_user(&posts));
    assert_eq!(untyped.data_type(), None);
    assert!(matches!(&untyped, Expr::Subquery(s) if s.nullable));
}
