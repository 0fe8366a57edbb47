use serde::{Deserialize, Serialize};

/// Person an appointment is booked for.
///
/// Clients are never created or deleted on their own: booking inserts one, and
/// deleting their last appointment removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}
