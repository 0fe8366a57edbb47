use crate::models::DbClient;
use eyre::Result;
use sqlx::{Executor, Sqlite};

pub async fn create_client<'e, E>(executor: E, name: &str, phone: &str) -> Result<DbClient>
where
    E: Executor<'e, Database = Sqlite>,
{
    tracing::debug!("Creating client: name={}", name);

    let client = sqlx::query_as::<_, DbClient>(
        r#"
        INSERT INTO clients (name, phone)
        VALUES (?, ?)
        RETURNING id, name, phone
        "#,
    )
    .bind(name)
    .bind(phone)
    .fetch_one(executor)
    .await?;

    Ok(client)
}

pub async fn get_client_by_id<'e, E>(executor: E, id: i64) -> Result<Option<DbClient>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let client = sqlx::query_as::<_, DbClient>(
        r#"
        SELECT id, name, phone
        FROM clients
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(client)
}

pub async fn update_client<'e, E>(executor: E, id: i64, name: &str, phone: &str) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        UPDATE clients
        SET name = ?, phone = ?
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(phone)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn delete_client<'e, E>(executor: E, id: i64) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    tracing::debug!("Deleting client without appointments: id={}", id);

    sqlx::query("DELETE FROM clients WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn count_clients<'e, E>(executor: E) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients")
        .fetch_one(executor)
        .await?;

    Ok(count)
}
