use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Water volumes in liters, split the way the brew day uses them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterAmount {
    pub mash: f64,
    pub sparge: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Yeast {
    pub name: String,
    pub amount: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrainBill {
    pub grain_name: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HopAddition {
    pub hop_name: String,
    pub amount: f64,
    /// Minutes left in the boil when the addition goes in; 0 means
    /// flameout, whirlpool, or dry hop.
    pub time: f64,
    pub usage: String,
    /// Badge classes derived from `usage`; gray for anything outside the
    /// known set.
    pub usage_badge: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtraIngredient {
    pub ingredient_name: String,
    pub amount: String,
    pub timing: String,
}

/// Fully-resolved brewing recipe as the site renders it. Every field the
/// database allows to be NULL is already defaulted here; consumers never
/// see an absent value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeerRecipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub style: String,
    pub difficulty: String,
    pub grains: Vec<GrainBill>,
    pub hops: Vec<HopAddition>,
    pub additional_ingredients: Vec<ExtraIngredient>,
    pub water_amount: WaterAmount,
    pub mash_time: f64,
    pub mash_temp: f64,
    pub boil_time: f64,
    pub yeast: Yeast,
    pub original_gravity: f64,
    pub final_gravity: f64,
    pub abv: f64,
    pub ibu: f64,
    pub srm: f64,
    pub additional_notes: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A recipe as served over the API: the view model plus the swatch color
/// derived from its SRM value.
#[derive(Debug, Clone, Serialize)]
pub struct BeerRecipeItem {
    #[serde(flatten)]
    pub recipe: BeerRecipe,
    pub srm_color: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct BeerRecipeQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub difficulty: Option<String>,
    pub style: Option<String>,
    pub search: Option<String>,
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Serialize)]
pub struct BeerRecipesResponse {
    pub recipes: Vec<BeerRecipeItem>,
    pub count: i64,
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn recipe_item_flattens_view_model_fields() {
        let item = BeerRecipeItem {
            recipe: BeerRecipe {
                id: 7,
                title: "House Pils".into(),
                description: String::new(),
                style: "Pilsner".into(),
                difficulty: "Easy".into(),
                grains: vec![],
                hops: vec![],
                additional_ingredients: vec![],
                water_amount: WaterAmount {
                    mash: 0.0,
                    sparge: 0.0,
                    total: 0.0,
                },
                mash_time: 0.0,
                mash_temp: 0.0,
                boil_time: 0.0,
                yeast: Yeast {
                    name: String::new(),
                    amount: String::new(),
                    temperature: 0.0,
                },
                original_gravity: 0.0,
                final_gravity: 0.0,
                abv: 0.0,
                ibu: 0.0,
                srm: 4.0,
                additional_notes: String::new(),
                image_url: String::new(),
                created_at: datetime!(2024-06-01 12:00 UTC),
            },
            srm_color: "#EACE3F",
        };

        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["title"], "House Pils");
        assert_eq!(json["srm_color"], "#EACE3F");
        assert_eq!(json["water_amount"]["total"], 0.0);
    }
}
