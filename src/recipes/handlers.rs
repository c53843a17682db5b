use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};

use crate::recipes::dto::{Recipe, RecipeQuery, RecipesResponse};
use crate::recipes::repo;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(q): Query<RecipeQuery>,
) -> Result<Json<RecipesResponse>, (StatusCode, String)> {
    let difficulty = q.difficulty.filter(|d| !d.is_empty() && d != "All");
    let limit = q.limit.clamp(1, state.config.max_page_size);
    let offset = q.offset.max(0);

    let rows = repo::list(&state.db, &difficulty, limit, offset)
        .await
        .map_err(|e| {
            error!(error = %e, "list recipes failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch recipes".into(),
            )
        })?;
    let count = repo::count(&state.db, &difficulty).await.map_err(|e| {
        error!(error = %e, "count recipes failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch recipes".into(),
        )
    })?;

    let recipes = rows.into_iter().map(Recipe::from).collect();
    Ok(Json(RecipesResponse { recipes, count }))
}
