use salon_core::models::{
    appointment::{Appointment, AppointmentDetail},
    client::Client,
    style::Style,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClient {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStyle {
    pub id: i64,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub client_id: i64,
    pub service: String,
    pub date: String,
    pub time: String,
    pub style_id: Option<i64>,
}

/// Appointment joined with its client and (left-joined) style.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointmentDetail {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
    pub style_id: Option<i64>,
    pub style_name: Option<String>,
    pub style_category: Option<String>,
}

impl From<DbClient> for Client {
    fn from(row: DbClient) -> Self {
        Client {
            id: row.id,
            name: row.name,
            phone: row.phone,
        }
    }
}

impl From<DbStyle> for Style {
    fn from(row: DbStyle) -> Self {
        Style {
            id: row.id,
            name: row.name,
            category: row.category,
        }
    }
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Appointment {
            id: row.id,
            client_id: row.client_id,
            service: row.service,
            date: row.date,
            time: row.time,
            style_id: row.style_id,
        }
    }
}

impl From<DbAppointmentDetail> for AppointmentDetail {
    fn from(row: DbAppointmentDetail) -> Self {
        AppointmentDetail::new(
            row.id,
            row.date,
            row.time,
            row.client_name,
            row.client_phone,
            row.service,
            row.style_id,
            row.style_name,
            row.style_category,
        )
    }
}
