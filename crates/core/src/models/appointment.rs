use serde::{de, Deserialize, Deserializer, Serialize};

use crate::errors::{SalonError, SalonResult};
use crate::models::style::style_label;

pub const BOOKED_MESSAGE: &str = "Cita agendada con éxito";
pub const UPDATED_MESSAGE: &str = "Cita actualizada con éxito";
pub const DELETED_MESSAGE: &str = "Cita eliminada con éxito";
pub const NOT_FOUND_MESSAGE: &str = "Cita no encontrada";

/// Stored appointment row with its client and optional style references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    #[serde(rename = "servicio")]
    pub service: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "cortes_id")]
    pub style_id: Option<i64>,
}

/// Client and appointment fields submitted when booking or editing.
///
/// Missing or null text fields deserialize as empty strings so they are
/// reported by [`AppointmentRequest::validate`] rather than by the body
/// extractor. `corte_id` accepts a number, a numeric string (as sent by a
/// `<select>`), an empty string or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    #[serde(rename = "nombre", default, deserialize_with = "text_or_null")]
    pub name: String,
    #[serde(rename = "telefono", default, deserialize_with = "text_or_null")]
    pub phone: String,
    #[serde(rename = "servicio", default, deserialize_with = "text_or_null")]
    pub service: String,
    #[serde(rename = "fecha", default, deserialize_with = "text_or_null")]
    pub date: String,
    #[serde(rename = "hora", default, deserialize_with = "text_or_null")]
    pub time: String,
    #[serde(rename = "corte_id", default, deserialize_with = "style_reference")]
    pub style_id: Option<i64>,
}

impl AppointmentRequest {
    /// Rejects the request when any required text field is blank.
    ///
    /// Date and time are only checked for presence; their format is not
    /// interpreted.
    pub fn validate(&self) -> SalonResult<()> {
        let required = [
            ("nombre", &self.name),
            ("telefono", &self.phone),
            ("servicio", &self.service),
            ("fecha", &self.date),
            ("hora", &self.time),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SalonError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StyleReference {
    Id(i64),
    Text(String),
}

fn style_reference<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StyleReference>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StyleReference::Id(id)) => Ok(Some(id)),
        Some(StyleReference::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid corte_id: {:?}", text)))
        }
    }
}

/// An appointment joined with its client and, when it resolves, its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDetail {
    pub id: i64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "nombre")]
    pub client_name: String,
    #[serde(rename = "telefono")]
    pub client_phone: String,
    #[serde(rename = "servicio")]
    pub service: String,
    #[serde(rename = "cortes_id")]
    pub style_id: Option<i64>,
    #[serde(rename = "nombre_corte")]
    pub style_name: Option<String>,
    #[serde(rename = "tipo_corte")]
    pub style_category: Option<String>,
    #[serde(rename = "corte_info")]
    pub style_info: String,
}

impl AppointmentDetail {
    /// Builds a listing record, deriving `corte_info` from the joined style columns.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        date: String,
        time: String,
        client_name: String,
        client_phone: String,
        service: String,
        style_id: Option<i64>,
        style_name: Option<String>,
        style_category: Option<String>,
    ) -> Self {
        let style_info = style_label(style_name.as_deref(), style_category.as_deref());
        Self {
            id,
            date,
            time,
            client_name,
            client_phone,
            service,
            style_id,
            style_name,
            style_category,
            style_info,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            mensaje: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentResponse {
    pub mensaje: String,
    pub id: i64,
}
