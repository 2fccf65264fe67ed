//! Tests for subquery aliases

use super::helpers::*;
use model::core::{data_type::DataType, value::Value};
use query_dsl::{
    QueryError,
    query::{
        ast::{
            column::{Column, Owner},
            common::JoinType,
            expr::{Expr, count_all},
            field::Field,
        },
        builder::select::SelectBuilder,
        dialect::Postgres,
        renderer::render_sql,
    },
    schema::ColumnSet,
};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_projection_is_rehomed() {
    let posts = posts();
    let qa = posts_per_user(&posts).alias("qa");

    let fields = qa.fields();
    assert_eq!(fields.len(), 2);

    let user_id = fields[0].as_column().unwrap();
    assert_eq!(user_id.owner.name(), "qa");
    assert_eq!(user_id.data_type, DataType::Int);

    match &fields[1] {
        Field::Expr(reference) => {
            assert_eq!(render_unquoted(reference), "post_count");
            assert_eq!(reference.data_type(), Some(DataType::Long));
        }
        other => panic!("expected a by-name reference, got {other:?}"),
    }

    assert_eq!(qa.columns(), vec![user_id.clone()]);
    assert!(logs_contain("Aliased subquery as 'qa'"));
}

#[test]
fn test_get_column_clones_under_alias() {
    let posts = posts();
    let qa = posts_per_user(&posts).alias("qa");

    let user_id = posts.column_by_name("user_id").unwrap();
    let resolved = qa.get(user_id).unwrap();
    assert_eq!(resolved.name, "user_id");
    assert_eq!(resolved.data_type, user_id.data_type);
    assert_eq!(resolved.owner.name(), "qa");
    assert_eq!(render(&resolved), r#""qa"."user_id""#);
}

#[test]
#[traced_test]
fn test_get_column_from_elsewhere_fails() {
    let posts = posts();
    let qa = posts_per_user(&posts).alias("qa");

    let id = users().column_by_name("id").unwrap().clone();
    let err = qa.get(&id).unwrap_err();
    assert!(matches!(err, QueryError::ColumnNotFound { ref source_name, .. } if source_name == "qa"));
    assert!(logs_contain("is not a column of the source of subquery 'qa'"));

    let detached = Column::new(Owner::Table("posts".into()), "user_id", DataType::String);
    assert!(qa.get(&detached).is_err());
}

#[test]
fn test_nested_expression_lookup() {
    let posts = posts();
    let qa = posts_per_user(&posts).alias("qa");

    // The alias object resolves to a qualified reference.
    let qualified = qa
        .get_expr(&Expr::from(count_all().alias("post_count")))
        .unwrap();
    assert_eq!(render_unquoted(&qualified), "qa.post_count");
    assert_eq!(render(&qualified), r#""qa"."post_count""#);
    assert_eq!(qualified.data_type(), Some(DataType::Long));

    // The aliased expression itself resolves to the bare alias.
    let unqualified = qa.get_expr(&count_all()).unwrap();
    assert_eq!(render_unquoted(&unqualified), "post_count");
}

#[test]
#[traced_test]
fn test_unknown_expression_fails() {
    let posts = posts();
    let qa = posts_per_user(&posts).alias("qa");

    let other_alias = Expr::from(count_all().alias("something_else"));
    for expr in [other_alias, Expr::from(Value::Int(1))] {
        let err = qa.get_expr(&expr).unwrap_err();
        assert!(matches!(err, QueryError::FieldNotFound { .. }));
        assert!(err.to_string().contains("Field not found in original table fields"));
    }
    assert!(logs_contain("is not projected by subquery 'qa'"));
}

#[test]
fn test_select_from_derived_table() {
    let posts = posts();
    let qa = posts_per_user(&posts).alias("qa");
    let post_count = qa.get_expr(&count_all()).unwrap();

    let query = SelectBuilder::new()
        .select(qa.fields())
        .from(&qa)
        .where_clause(post_count.gt(Value::Int(3)))
        .build();

    let (sql, params) = render_sql(&query, &Postgres);
    assert_eq!(
        sql,
        r#"SELECT "qa"."user_id", "post_count" FROM (SELECT "posts"."user_id", COUNT(*) AS "post_count" FROM "posts" GROUP BY "posts"."user_id") "qa" WHERE ("post_count" > $1)"#
    );
    assert_eq!(params, vec![Value::Int(3)]);
}

#[test]
fn test_joins_are_rooted_at_the_alias() {
    let posts = posts();
    let users = users();
    let qa = posts_per_user(&posts).alias("qa");

    let condition = Expr::from(qa.get(posts.column_by_name("user_id").unwrap()).unwrap())
        .eq(users.column_by_name("id").unwrap());

    let inner = qa.inner_join(&users);
    let on = qa.join_on(&users, JoinType::Right, condition);
    let cross = qa.cross_join(&users);

    for join in [&inner, &on, &cross] {
        assert_eq!(join.table.as_query_alias(), Some(&qa));
        assert_eq!(join.parts.len(), 1);
    }
    assert_eq!(inner.parts[0].join_type, JoinType::Inner);
    assert_eq!(on.parts[0].join_type, JoinType::Right);
    assert!(describe(&on).ends_with(r#"RIGHT JOIN "users" ON ("qa"."user_id" = "users"."id")"#));
    assert!(describe(&cross).ends_with(r#""qa" CROSS JOIN "users""#));

    assert_eq!(qa.left_join(&users).parts[0].join_type, JoinType::Left);
    assert_eq!(qa.full_join(&users).parts[0].join_type, JoinType::Full);
}
