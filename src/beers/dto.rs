use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::beers::repo::BeerRow;

/// A beer in the taproom lineup as shown on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct Beer {
    pub id: i64,
    pub name: String,
    pub style: String,
    pub abv: f64,
    pub description: String,
    pub season: String,
    pub hops: String,
    pub malts: String,
    pub extras: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<BeerRow> for Beer {
    fn from(row: BeerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            style: row.style.unwrap_or_default(),
            abv: row.abv.unwrap_or(0.0),
            description: row.description.unwrap_or_default(),
            season: row.season.unwrap_or_default(),
            hops: row.hops.unwrap_or_default(),
            malts: row.malts.unwrap_or_default(),
            extras: row.extras.unwrap_or_default(),
            image_url: row.image_url.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BeerQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub season: Option<String>,
    pub style: Option<String>,
    pub search: Option<String>,
}

// The lineup page shows fewer cards than the recipe browser.
fn default_limit() -> i64 {
    10
}

#[derive(Debug, Serialize)]
pub struct BeersResponse {
    pub beers: Vec<Beer>,
    pub count: i64,
}
