//! Tests for table aliases

use super::helpers::*;
use model::core::data_type::DataType;
use query_dsl::{
    Alias, QueryError,
    query::{
        ast::{
            column::{Column, Owner},
            common::JoinType,
            expr::Expr,
            field::Field,
        },
        builder::select::SelectBuilder,
        dialect::Postgres,
        renderer::render_sql,
    },
    schema::{ColumnSet, SchemaObject, table::Table},
    settings::{DialectKind, RenderSettings},
};
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};
use tracing_test::traced_test;

fn hash_of(alias: &Alias) -> u64 {
    let mut hasher = DefaultHasher::new();
    alias.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_table_name_with_alias() {
    for (table, name) in [(users(), "u"), (posts(), "p"), (users(), "manager")] {
        let alias = table.alias(name);
        assert_eq!(
            alias.table_name_with_alias(),
            format!("{} {}", table.table_name(), name)
        );
        assert_eq!(alias.table_name(), name);
    }
}

#[test]
#[traced_test]
fn test_get_returns_rehomed_clone() {
    let users = users();
    let u = users.alias("u");

    for original in users.columns() {
        let cloned = u.get(original).unwrap();
        assert_eq!(cloned.name, original.name);
        assert_eq!(cloned.data_type, original.data_type);
        assert_eq!(cloned.nullable, original.nullable);
        assert_eq!(cloned.owner, u.owner());
        assert_ne!(&cloned, original);
    }

    assert!(logs_contain("Aliased table 'users' as 'u'"));
}

#[test]
#[traced_test]
fn test_get_unknown_column_fails() {
    let u = users().alias("u");
    let title = posts().column_by_name("title").unwrap().clone();

    let err = u.get(&title).unwrap_err();
    assert!(matches!(err, QueryError::ColumnNotFound { .. }));
    assert!(err.to_string().contains("Column not found in original table"));
    assert!(logs_contain("does not belong to 'users'"));

    // A column of the alias itself is not a delegate column.
    let aliased = u.columns()[0].clone();
    assert!(u.get(&aliased).is_err());
}

#[test]
fn test_original_column() {
    let users = users();
    let u = users.alias("u");
    let m = users.alias("m");

    let name = u.get(users.column_by_name("name").unwrap()).unwrap();
    assert_eq!(u.original_column(&name), users.column_by_name("name"));
    assert!(m.original_column(&name).is_none());

    let detached = Column::new(Owner::Table("u".into()), "name", DataType::VarChar);
    assert!(u.original_column(&detached).is_none());
}

#[test]
fn test_equality_and_hash_follow_composite_name() {
    let other_users = Table::builder("users")
        .column("email", DataType::String, None)
        .add()
        .build();

    let a = users().alias("u");
    let b = other_users.alias("u");
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = users().alias("v");
    assert_ne!(a, c);
}

#[test]
fn test_ddl_always_fails() {
    let u = users().alias("u");
    let postgres = RenderSettings::default();
    let mysql = RenderSettings {
        dialect: DialectKind::MySql,
        ..Default::default()
    };
    for result in [
        u.create_statement(&postgres),
        u.drop_statement(&mysql),
        u.modify_statement(&postgres),
    ] {
        match result {
            Err(QueryError::Unsupported(message)) => {
                assert_eq!(message, "Unsupported for aliases")
            }
            other => panic!("expected Unsupported, got {other:?}"),
        }
    }

    let empty = Table::builder("empty").build().alias("e");
    assert!(empty.create_statement(&postgres).is_err());
}

#[test]
fn test_same_table_name_in_two_schemas() {
    let users_in = |schema: &str| {
        Table::builder("users")
            .schema(schema)
            .column("id", DataType::Int, None)
            .add()
            .column("name", DataType::VarChar, Some(64))
            .add()
            .build()
    };
    let sales = users_in("sales");
    let hr = users_in("hr");
    let (s, h) = (sales.alias("u"), hr.alias("u"));

    assert_eq!(s.table_name_with_alias(), "sales.users u");
    assert_eq!(h.table_name_with_alias(), "hr.users u");
    assert_ne!(s, h);
    assert_ne!(hash_of(&s), hash_of(&h));

    let hr_name = hr.column_by_name("name").unwrap();
    assert!(matches!(
        s.get(hr_name),
        Err(QueryError::ColumnNotFound { .. })
    ));
    let hr_u_name = h.get(hr_name).unwrap();
    assert!(s.original_column(&hr_u_name).is_none());
    assert_eq!(h.original_column(&hr_u_name), Some(hr_name));

    assert_eq!(describe(&s), r#""sales"."users" "u""#);
    assert_eq!(describe(&h), r#""hr"."users" "u""#);
}

#[test]
fn test_self_join() {
    let users = users();
    let employee = users.alias("e");
    let manager = users.alias("m");
    let column = |name: &str| users.column_by_name(name).unwrap();

    let join = employee.join(
        &manager,
        JoinType::Left,
        Some(employee.get(column("manager_id")).unwrap().into()),
        Some(manager.get(column("id")).unwrap().into()),
        None,
    );

    let employee_name = employee.get(column("name")).unwrap();
    let manager_name = manager.get(column("name")).unwrap();
    let query = SelectBuilder::new()
        .select(vec![
            Field::from(employee_name),
            Expr::from(manager_name).alias("manager").into(),
        ])
        .from(join)
        .build();

    let (sql, params) = render_sql(&query, &Postgres);
    assert_eq!(
        sql,
        r#"SELECT "e"."name", "m"."name" AS "manager" FROM "users" "e" LEFT JOIN "users" "m" ON ("e"."manager_id" = "m"."id")"#
    );
    assert!(params.is_empty());
    assert_eq!(describe(&employee), r#""users" "e""#);
}
