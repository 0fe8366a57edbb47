//! SQLite-backed Appointment Store.
//!
//! Each mutating operation runs in one transaction. The transaction is only
//! committed on the success path; every early return or `?` drops it, which
//! rolls back whatever was written so far.

use async_trait::async_trait;
use eyre::Result;
use salon_core::{
    errors::{SalonError, SalonResult},
    models::{
        appointment::{Appointment, AppointmentDetail, AppointmentRequest, NOT_FOUND_MESSAGE},
        client::Client,
        style::Style,
    },
    store::AppointmentStore,
};
use tracing::{debug, error, info};

use crate::repositories::{appointment, client, style};
use crate::DbPool;

/// Appointment Store over an injected SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_appointment(&self, id: i64) -> SalonResult<Option<Appointment>> {
        appointment::get_appointment_by_id(&self.pool, id)
            .await
            .map(|row| row.map(Appointment::from))
            .map_err(|err| storage_failure("get_appointment", err))
    }

    pub async fn get_client(&self, id: i64) -> SalonResult<Option<Client>> {
        client::get_client_by_id(&self.pool, id)
            .await
            .map(|row| row.map(Client::from))
            .map_err(|err| storage_failure("get_client", err))
    }

    async fn insert_booking(&self, request: &AppointmentRequest) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let new_client = client::create_client(&mut *tx, &request.name, &request.phone).await?;
        let new_appointment = appointment::create_appointment(
            &mut *tx,
            new_client.id,
            &request.service,
            &request.date,
            &request.time,
            request.style_id,
        )
        .await?;

        tx.commit().await?;
        Ok(new_appointment.id)
    }

    /// Returns `false` without writing when the appointment does not exist.
    async fn apply_update(&self, id: i64, request: &AppointmentRequest) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let Some(existing) = appointment::get_appointment_by_id(&mut *tx, id).await? else {
            return Ok(false);
        };

        client::update_client(&mut *tx, existing.client_id, &request.name, &request.phone)
            .await?;
        appointment::update_appointment(
            &mut *tx,
            id,
            &request.service,
            &request.date,
            &request.time,
            request.style_id,
        )
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Returns `false` without writing when the appointment does not exist.
    async fn apply_delete(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let Some(existing) = appointment::get_appointment_by_id(&mut *tx, id).await? else {
            return Ok(false);
        };

        appointment::delete_appointment(&mut *tx, id).await?;

        let remaining =
            appointment::count_appointments_for_client(&mut *tx, existing.client_id).await?;
        if remaining == 0 {
            client::delete_client(&mut *tx, existing.client_id).await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}

#[async_trait]
impl AppointmentStore for SqliteStore {
    async fn book_appointment(&self, request: AppointmentRequest) -> SalonResult<i64> {
        request.validate()?;

        let id = self
            .insert_booking(&request)
            .await
            .map_err(|err| storage_failure("book_appointment", err))?;

        info!(appointment_id = id, "Appointment booked");
        Ok(id)
    }

    async fn list_appointments(&self) -> SalonResult<Vec<AppointmentDetail>> {
        let rows = appointment::list_appointment_details(&self.pool)
            .await
            .map_err(|err| storage_failure("list_appointments", err))?;

        debug!(count = rows.len(), "Listed appointments");
        Ok(rows.into_iter().map(AppointmentDetail::from).collect())
    }

    async fn list_styles(&self) -> SalonResult<Vec<Style>> {
        let rows = style::list_styles(&self.pool)
            .await
            .map_err(|err| storage_failure("list_styles", err))?;

        Ok(rows.into_iter().map(Style::from).collect())
    }

    async fn update_appointment(&self, id: i64, request: AppointmentRequest) -> SalonResult<()> {
        // Unknown ids are reported before the payload is looked at
        if self.get_appointment(id).await?.is_none() {
            debug!(appointment_id = id, "Update of unknown appointment");
            return Err(SalonError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }
        request.validate()?;

        let found = self
            .apply_update(id, &request)
            .await
            .map_err(|err| storage_failure("update_appointment", err))?;

        if !found {
            debug!(appointment_id = id, "Appointment vanished before update");
            return Err(SalonError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!(appointment_id = id, "Appointment updated");
        Ok(())
    }

    async fn delete_appointment(&self, id: i64) -> SalonResult<()> {
        let found = self
            .apply_delete(id)
            .await
            .map_err(|err| storage_failure("delete_appointment", err))?;

        if !found {
            debug!(appointment_id = id, "Delete of unknown appointment");
            return Err(SalonError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        info!(appointment_id = id, "Appointment deleted");
        Ok(())
    }
}

fn storage_failure(operation: &'static str, err: eyre::Report) -> SalonError {
    error!(operation, error = %err, "Storage operation failed");
    SalonError::Storage(err)
}
