use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub pairing_notes: Option<String>,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
}

pub async fn list(
    db: &PgPool,
    difficulty: &Option<String>,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<RecipeRow>> {
    let rows = sqlx::query_as::<_, RecipeRow>(
        r#"
        SELECT id, title, description, difficulty, ingredients, instructions,
               pairing_notes, image_url, created_at
        FROM recipes
        WHERE ($1::text IS NULL OR difficulty = $1)
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(difficulty)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn count(db: &PgPool, difficulty: &Option<String>) -> anyhow::Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM recipes
        WHERE ($1::text IS NULL OR difficulty = $1)
        "#,
    )
    .bind(difficulty)
    .fetch_one(db)
    .await?;
    Ok(count)
}
