use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Corte,
    Color,
    Barba,
    Peinado,
    Tratamiento,
    Combo,
}

/// (category, db code, label)
const CATEGORIES: [(ServiceCategory, &str, &str); 6] = [
    (ServiceCategory::Corte, "corte", "Haircut"),
    (ServiceCategory::Color, "color", "Color"),
    (ServiceCategory::Barba, "barba", "Beard"),
    (ServiceCategory::Peinado, "peinado", "Styling"),
    (ServiceCategory::Tratamiento, "tratamiento", "Treatment"),
    (ServiceCategory::Combo, "combo", "Combo"),
];

impl ServiceCategory {
    pub fn to_db_str(self) -> &'static str {
        CATEGORIES[self as usize].1
    }

    pub fn label(self) -> &'static str {
        CATEGORIES[self as usize].2
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|(_, code, _)| *code == s)
            .map(|(c, _, _)| *c)
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        Self::from_db_str(&code.trim().to_lowercase())
            .ok_or_else(|| AppError::InvalidCategory(code.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    /// Minutes
    pub duration: u32,
    pub category: ServiceCategory,
    pub is_active: bool,
}

/// Editable fields of a service; `None` leaves a field untouched on update.
#[derive(Debug, Clone, Default)]
pub struct ServiceFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration: Option<u32>,
    pub category: Option<ServiceCategory>,
    pub is_active: Option<bool>,
}
