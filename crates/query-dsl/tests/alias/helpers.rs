use model::core::data_type::DataType;
use query_dsl::{
    query::{
        ast::{expr::count_all, field::Field, select::Query},
        builder::select::SelectBuilder,
        dialect::Postgres,
        renderer::{Render, Renderer},
    },
    schema::{ColumnSet, table::Table},
    settings::RenderSettings,
};

pub fn users() -> Table {
    Table::builder("users")
        .column("id", DataType::Int, None)
        .primary_key()
        .add()
        .column("name", DataType::VarChar, Some(64))
        .add()
        .column("manager_id", DataType::Int, None)
        .nullable()
        .add()
        .build()
}

pub fn posts() -> Table {
    Table::builder("posts")
        .column("id", DataType::Int, None)
        .primary_key()
        .add()
        .column("user_id", DataType::Int, None)
        .add()
        .column("title", DataType::String, None)
        .add()
        .build()
}

/// `SELECT posts.user_id, COUNT(*) AS post_count FROM posts GROUP BY posts.user_id`
pub fn posts_per_user(posts: &Table) -> Query {
    let user_id = posts.column_by_name("user_id").unwrap();
    SelectBuilder::new()
        .select(vec![
            Field::from(user_id),
            count_all().alias("post_count").into(),
        ])
        .from(posts)
        .group_by(user_id)
        .build()
}

pub fn render<T: Render + ?Sized>(node: &T) -> String {
    let mut renderer = Renderer::new(&Postgres);
    node.render(&mut renderer);
    renderer.finish().0
}

pub fn render_unquoted<T: Render + ?Sized>(node: &T) -> String {
    let settings = RenderSettings {
        quote_identifiers: false,
        ..Default::default()
    };
    let mut renderer = Renderer::with_settings(&settings);
    node.render(&mut renderer);
    renderer.finish().0
}

pub fn describe<C: ColumnSet>(set: &C) -> String {
    let mut renderer = Renderer::new(&Postgres);
    set.describe(&mut renderer);
    renderer.finish().0
}
