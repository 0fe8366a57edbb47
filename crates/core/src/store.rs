//! The Appointment Store contract.
//!
//! Implementations own their storage handle and enforce the client/appointment
//! invariants: every appointment references exactly one client, and a client
//! is removed in the same transaction that deletes its last appointment.

use async_trait::async_trait;

use crate::errors::SalonResult;
use crate::models::appointment::{AppointmentDetail, AppointmentRequest};
use crate::models::style::Style;

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Inserts a new client and an appointment referencing it, returning the
    /// appointment id. Existing clients are never reused.
    async fn book_appointment(&self, request: AppointmentRequest) -> SalonResult<i64>;

    /// All appointments ordered by date, then time, then insertion order.
    async fn list_appointments(&self) -> SalonResult<Vec<AppointmentDetail>>;

    /// The seeded style catalog in insertion order.
    async fn list_styles(&self) -> SalonResult<Vec<Style>>;

    /// Rewrites the owning client's name/phone and the appointment's fields in place.
    async fn update_appointment(&self, id: i64, request: AppointmentRequest) -> SalonResult<()>;

    /// Deletes the appointment and, if it was the client's last one, the client.
    async fn delete_appointment(&self, id: i64) -> SalonResult<()>;
}
