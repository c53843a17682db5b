use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::recipes::repo::RecipeRow;

/// Food recipe that pairs with one of the house beers.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub pairing_notes: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            difficulty: row.difficulty,
            ingredients: row.ingredients.unwrap_or_default(),
            instructions: row.instructions.unwrap_or_default(),
            pairing_notes: row.pairing_notes.unwrap_or_default(),
            image_url: row.image_url.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecipeQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub difficulty: Option<String>,
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Serialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
    pub count: i64,
}
