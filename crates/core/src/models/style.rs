use serde::{Deserialize, Serialize};

/// Haircut offering from the seeded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub category: String,
}

pub const CATEGORY_WOMEN: &str = "Dama";
pub const CATEGORY_MEN: &str = "Caballero";
pub const CATEGORY_CHILDREN: &str = "Niño";

/// Label shown for appointments whose style is missing or does not resolve.
pub const NO_STYLE_LABEL: &str = "Sin corte especificado";

/// Display label for an appointment's style, e.g. `Pixie (Dama)`.
pub fn style_label(name: Option<&str>, category: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} ({})", name, category.unwrap_or_default()),
        None => NO_STYLE_LABEL.to_string(),
    }
}
