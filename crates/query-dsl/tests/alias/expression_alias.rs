//! Tests for expression aliases

use super::helpers::*;
use model::core::{data_type::DataType, value::Value};
use query_dsl::{
    ExpressionAlias,
    query::{
        ast::{
            expr::{Expr, count_all, function, max},
            field::Field,
        },
        builder::select::SelectBuilder,
        dialect::{MySql, Postgres},
        renderer::render_sql,
        value,
    },
};

#[test]
fn test_alias_only_expression_renders_name() {
    let total = count_all().alias("a");
    let reference = total.alias_only_expression();

    assert_eq!(render_unquoted(&reference), "a");
    assert_eq!(render(&reference), r#""a""#);
    assert_eq!(reference.data_type(), Some(DataType::Long));
}

#[test]
fn test_alias_only_expression_preserves_delegate_type() {
    let users = users();
    let name = users.column_by_name("name").unwrap();

    let aliased = Expr::from(name).alias("display_name");
    assert_eq!(
        aliased.alias_only_expression().data_type(),
        Some(DataType::VarChar)
    );

    let untyped = ExpressionAlias::new(function("NOW", vec![]), "now");
    assert_eq!(untyped.alias_only_expression().data_type(), None);
    assert_eq!(untyped.data_type(), None);
}

#[test]
fn test_render_full_form() {
    let posts = posts();
    let id = posts.column_by_name("id").unwrap();
    let latest = max(id).alias("latest");

    assert_eq!(render(&latest), r#"MAX("posts"."id") AS "latest""#);
    assert_eq!(render_sql(&latest, &MySql).0, "MAX(`posts`.`id`) AS `latest`");
    assert_eq!(latest.delegate(), &max(id));
    assert_eq!(latest.alias(), "latest");
}

#[test]
fn test_group_by_references_alias_by_name() {
    let users = users();
    let name = users.column_by_name("name").unwrap();
    let is_root = Expr::from(name)
        .eq(value("root"))
        .alias("is_root");

    let query = SelectBuilder::new()
        .select(vec![Field::from(is_root.clone()), count_all().into()])
        .from(&users)
        .group_by(is_root.alias_only_expression())
        .order_by(is_root.alias_only_expression(), None)
        .build();

    let (sql, params) = render_sql(&query, &Postgres);
    assert_eq!(
        sql,
        r#"SELECT ("users"."name" = $1) AS "is_root", COUNT(*) FROM "users" GROUP BY "is_root" ORDER BY "is_root""#
    );
    assert_eq!(params, vec![Value::String("root".into())]);
}

#[test]
fn test_alias_with_dot_stays_one_identifier() {
    let total = count_all().alias("a.b");

    assert_eq!(render(&total), r#"COUNT(*) AS "a.b""#);
    assert_eq!(render(&total.alias_only_expression()), r#""a.b""#);
    assert_eq!(render(&total.qualified_expression("q0")), r#""q0"."a.b""#);
    assert_eq!(render_unquoted(&total.qualified_expression("q0")), "q0.a.b");
}
