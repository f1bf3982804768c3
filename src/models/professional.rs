use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Professional {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProfessionalFields {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}
