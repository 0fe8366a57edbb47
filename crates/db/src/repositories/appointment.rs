use crate::models::{DbAppointment, DbAppointmentDetail};
use eyre::Result;
use sqlx::{Executor, Sqlite};

pub async fn create_appointment<'e, E>(
    executor: E,
    client_id: i64,
    service: &str,
    date: &str,
    time: &str,
    style_id: Option<i64>,
) -> Result<DbAppointment>
where
    E: Executor<'e, Database = Sqlite>,
{
    tracing::debug!(
        "Creating appointment: client_id={}, date={}, time={}, style_id={:?}",
        client_id, date, time, style_id
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (client_id, service, date, time, style_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, client_id, service, date, time, style_id
        "#,
    )
    .bind(client_id)
    .bind(service)
    .bind(date)
    .bind(time)
    .bind(style_id)
    .fetch_one(executor)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_id<'e, E>(executor: E, id: i64) -> Result<Option<DbAppointment>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, service, date, time, style_id
        FROM appointments
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(appointment)
}

pub async fn list_appointment_details<'e, E>(executor: E) -> Result<Vec<DbAppointmentDetail>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let details = sqlx::query_as::<_, DbAppointmentDetail>(
        r#"
        SELECT
            a.id,
            a.date,
            a.time,
            c.name AS client_name,
            c.phone AS client_phone,
            a.service,
            a.style_id,
            s.name AS style_name,
            s.category AS style_category
        FROM appointments a
        JOIN clients c ON c.id = a.client_id
        LEFT JOIN styles s ON s.id = a.style_id
        ORDER BY a.date ASC, a.time ASC, a.id ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(details)
}

pub async fn update_appointment<'e, E>(
    executor: E,
    id: i64,
    service: &str,
    date: &str,
    time: &str,
    style_id: Option<i64>,
) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        UPDATE appointments
        SET service = ?, date = ?, time = ?, style_id = ?
        WHERE id = ?
        "#,
    )
    .bind(service)
    .bind(date)
    .bind(time)
    .bind(style_id)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn delete_appointment<'e, E>(executor: E, id: i64) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("DELETE FROM appointments WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn count_appointments_for_client<'e, E>(executor: E, client_id: i64) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM appointments WHERE client_id = ?",
    )
    .bind(client_id)
    .fetch_one(executor)
    .await?;

    Ok(count)
}
