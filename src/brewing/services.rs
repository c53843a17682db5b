use std::collections::HashMap;

use sqlx::PgPool;

use crate::brewing::color::srm_color;
use crate::brewing::dto::{BeerRecipeItem, BeerRecipeQuery};
use crate::brewing::normalize::normalize;
use crate::brewing::repo::{self, BeerRecipeRow, GrainRow, HopRow, IngredientRow, RecipeFilter};
use crate::brewing::schedule::order_for_timeline;

/// The UI sends "All" for an unset filter; the repo expects None.
fn active(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "All")
}

pub async fn list_recipes(
    db: &PgPool,
    q: BeerRecipeQuery,
    max_page_size: i64,
) -> anyhow::Result<(Vec<BeerRecipeItem>, i64)> {
    let filter = RecipeFilter {
        difficulty: active(q.difficulty),
        style: active(q.style),
        search: q.search.filter(|s| !s.is_empty()),
    };
    let limit = q.limit.clamp(1, max_page_size);
    let offset = q.offset.max(0);

    let rows = repo::list(db, &filter, limit, offset).await?;
    let count = repo::count(db, &filter).await?;

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let mut grains = group_by_recipe(repo::grains_for(db, &ids).await?, |g: &GrainRow| {
        g.recipe_id
    });
    let mut hops = group_by_recipe(repo::hops_for(db, &ids).await?, |h: &HopRow| h.recipe_id);
    let mut extras = group_by_recipe(repo::ingredients_for(db, &ids).await?, |i: &IngredientRow| {
        i.recipe_id
    });

    let items = rows
        .into_iter()
        .map(|row| {
            let id = row.id;
            present(
                row,
                grains.remove(&id).unwrap_or_default(),
                hops.remove(&id).unwrap_or_default(),
                extras.remove(&id).unwrap_or_default(),
            )
        })
        .collect();

    Ok((items, count))
}

pub async fn get_recipe(db: &PgPool, id: i64) -> anyhow::Result<Option<BeerRecipeItem>> {
    let Some(row) = repo::get_by_id(db, id).await? else {
        return Ok(None);
    };
    let ids = [id];
    let grains = repo::grains_for(db, &ids).await?;
    let hops = repo::hops_for(db, &ids).await?;
    let extras = repo::ingredients_for(db, &ids).await?;
    Ok(Some(present(row, grains, hops, extras)))
}

/// Normalizes a raw row into the view model, puts the hop schedule in
/// timeline order, and derives the SRM swatch.
fn present(
    row: BeerRecipeRow,
    grains: Vec<GrainRow>,
    hops: Vec<HopRow>,
    extras: Vec<IngredientRow>,
) -> BeerRecipeItem {
    let mut recipe = normalize(row, grains, hops, extras);
    recipe.hops = order_for_timeline(&recipe.hops);
    let srm_color = srm_color(recipe.srm);
    BeerRecipeItem { recipe, srm_color }
}

fn group_by_recipe<T>(rows: Vec<T>, key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}
