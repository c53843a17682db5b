use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct BeerRow {
    pub id: i64,
    pub name: String,
    pub style: Option<String>,
    pub abv: Option<f64>,
    pub description: Option<String>,
    pub season: Option<String>,
    pub hops: Option<String>,
    pub malts: Option<String>,
    pub extras: Option<String>,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Default)]
pub struct BeerFilter {
    pub season: Option<String>,
    pub style: Option<String>,
    pub search: Option<String>,
}

pub async fn list(
    db: &PgPool,
    filter: &BeerFilter,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<BeerRow>> {
    let search = filter.search.as_ref().map(|s| format!("%{}%", s));
    let rows = sqlx::query_as::<_, BeerRow>(
        r#"
        SELECT id, name, style, abv, description, season, hops, malts,
               extras, image_url, created_at
        FROM beers
        WHERE ($1::text IS NULL OR season = $1)
          AND ($2::text IS NULL OR style = $2)
          AND ($3::text IS NULL OR name ILIKE $3 OR description ILIKE $3)
        ORDER BY created_at DESC
        LIMIT $4 OFFSET $5
        "#,
    )
    .bind(&filter.season)
    .bind(&filter.style)
    .bind(&search)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn count(db: &PgPool, filter: &BeerFilter) -> anyhow::Result<i64> {
    let search = filter.search.as_ref().map(|s| format!("%{}%", s));
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM beers
        WHERE ($1::text IS NULL OR season = $1)
          AND ($2::text IS NULL OR style = $2)
          AND ($3::text IS NULL OR name ILIKE $3 OR description ILIKE $3)
        "#,
    )
    .bind(&filter.season)
    .bind(&filter.style)
    .bind(&search)
    .fetch_one(db)
    .await?;
    Ok(count)
}
