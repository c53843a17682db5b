use serde::{Deserialize, Serialize};

/// Custom-order form posted from the contact page. Missing fields come
/// through as empty strings; `validate` decides which ones are required.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub beer_type: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}
