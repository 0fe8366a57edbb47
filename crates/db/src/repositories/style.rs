use crate::models::DbStyle;
use eyre::Result;
use sqlx::{Executor, Sqlite};

pub async fn insert_style<'e, E>(executor: E, name: &str, category: &str) -> Result<DbStyle>
where
    E: Executor<'e, Database = Sqlite>,
{
    let style = sqlx::query_as::<_, DbStyle>(
        r#"
        INSERT INTO styles (name, category)
        VALUES (?, ?)
        RETURNING id, name, category
        "#,
    )
    .bind(name)
    .bind(category)
    .fetch_one(executor)
    .await?;

    Ok(style)
}

pub async fn list_styles<'e, E>(executor: E) -> Result<Vec<DbStyle>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let styles = sqlx::query_as::<_, DbStyle>(
        r#"
        SELECT id, name, category
        FROM styles
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(styles)
}

pub async fn count_styles<'e, E>(executor: E) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM styles")
        .fetch_one(executor)
        .await?;

    Ok(count)
}
