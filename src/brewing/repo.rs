use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// A `beer_recipes` row as stored. The table allows NULL in every column
/// except id, title, difficulty, and created_at; normalization fills the
/// gaps before anything renders.
#[derive(Debug, Clone, FromRow)]
pub struct BeerRecipeRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub style: Option<String>,
    pub difficulty: String,
    pub water_mash: Option<f64>,
    pub water_sparge: Option<f64>,
    pub water_total: Option<f64>,
    pub mash_time: Option<f64>,
    pub mash_temp: Option<f64>,
    pub boil_time: Option<f64>,
    pub yeast_name: Option<String>,
    pub yeast_amount: Option<String>,
    pub yeast_temp: Option<f64>,
    pub original_gravity: Option<f64>,
    pub final_gravity: Option<f64>,
    pub abv: Option<f64>,
    pub ibu: Option<f64>,
    pub srm: Option<f64>,
    pub additional_notes: Option<String>,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct GrainRow {
    pub recipe_id: i64,
    pub grain_name: Option<String>,
    pub amount: Option<f64>,
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, FromRow)]
pub struct HopRow {
    pub recipe_id: i64,
    pub hop_name: Option<String>,
    pub amount: Option<f64>,
    pub time: Option<f64>,
    pub usage: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct IngredientRow {
    pub recipe_id: i64,
    pub ingredient_name: Option<String>,
    pub amount: Option<String>,
    pub timing: Option<String>,
}

/// Optional filters for the recipe browser. `None` means "no filter";
/// handlers translate the UI's "All" sentinel before it gets here.
#[derive(Debug, Default)]
pub struct RecipeFilter {
    pub difficulty: Option<String>,
    pub style: Option<String>,
    pub search: Option<String>,
}

const RECIPE_COLUMNS: &str = r#"
    id, title, description, style, difficulty,
    water_mash, water_sparge, water_total,
    mash_time, mash_temp, boil_time,
    yeast_name, yeast_amount, yeast_temp,
    original_gravity, final_gravity, abv, ibu, srm,
    additional_notes, image_url, created_at
"#;

pub async fn list(
    db: &PgPool,
    filter: &RecipeFilter,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<BeerRecipeRow>> {
    let search = filter.search.as_ref().map(|s| format!("%{}%", s));
    let rows = sqlx::query_as::<_, BeerRecipeRow>(&format!(
        r#"
        SELECT {RECIPE_COLUMNS}
        FROM beer_recipes
        WHERE ($1::text IS NULL OR difficulty = $1)
          AND ($2::text IS NULL OR style = $2)
          AND ($3::text IS NULL OR title ILIKE $3 OR description ILIKE $3)
        ORDER BY created_at DESC
        LIMIT $4 OFFSET $5
        "#
    ))
    .bind(&filter.difficulty)
    .bind(&filter.style)
    .bind(&search)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn count(db: &PgPool, filter: &RecipeFilter) -> anyhow::Result<i64> {
    let search = filter.search.as_ref().map(|s| format!("%{}%", s));
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM beer_recipes
        WHERE ($1::text IS NULL OR difficulty = $1)
          AND ($2::text IS NULL OR style = $2)
          AND ($3::text IS NULL OR title ILIKE $3 OR description ILIKE $3)
        "#,
    )
    .bind(&filter.difficulty)
    .bind(&filter.style)
    .bind(&search)
    .fetch_one(db)
    .await?;
    Ok(count)
}

pub async fn get_by_id(db: &PgPool, id: i64) -> anyhow::Result<Option<BeerRecipeRow>> {
    let row = sqlx::query_as::<_, BeerRecipeRow>(&format!(
        r#"
        SELECT {RECIPE_COLUMNS}
        FROM beer_recipes
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn grains_for(db: &PgPool, recipe_ids: &[i64]) -> anyhow::Result<Vec<GrainRow>> {
    let rows = sqlx::query_as::<_, GrainRow>(
        r#"
        SELECT recipe_id, grain_name, amount, percentage
        FROM recipe_grains
        WHERE recipe_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(recipe_ids)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn hops_for(db: &PgPool, recipe_ids: &[i64]) -> anyhow::Result<Vec<HopRow>> {
    let rows = sqlx::query_as::<_, HopRow>(
        r#"
        SELECT recipe_id, hop_name, amount, time, usage
        FROM recipe_hops
        WHERE recipe_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(recipe_ids)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn ingredients_for(db: &PgPool, recipe_ids: &[i64]) -> anyhow::Result<Vec<IngredientRow>> {
    let rows = sqlx::query_as::<_, IngredientRow>(
        r#"
        SELECT recipe_id, ingredient_name, amount, timing
        FROM recipe_ingredients
        WHERE recipe_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(recipe_ids)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
