use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};

use crate::brewing::dto::{BeerRecipeItem, BeerRecipeQuery, BeerRecipesResponse};
use crate::brewing::services;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_beer_recipes(
    State(state): State<AppState>,
    Query(q): Query<BeerRecipeQuery>,
) -> Result<Json<BeerRecipesResponse>, (StatusCode, String)> {
    let (recipes, count) = services::list_recipes(&state.db, q, state.config.max_page_size)
        .await
        .map_err(|e| {
            error!(error = %e, "list beer recipes failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch beer recipes".into(),
            )
        })?;
    Ok(Json(BeerRecipesResponse { recipes, count }))
}

#[instrument(skip(state))]
pub async fn get_beer_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BeerRecipeItem>, (StatusCode, String)> {
    let recipe = services::get_recipe(&state.db, id).await.map_err(|e| {
        error!(error = %e, %id, "get beer recipe failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch beer recipe".into(),
        )
    })?;

    match recipe {
        Some(recipe) => Ok(Json(recipe)),
        None => Err((StatusCode::NOT_FOUND, "Recipe not found".into())),
    }
}
