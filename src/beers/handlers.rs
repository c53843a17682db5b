use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};

use crate::beers::dto::{Beer, BeerQuery, BeersResponse};
use crate::beers::repo::{self, BeerFilter};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_beers(
    State(state): State<AppState>,
    Query(q): Query<BeerQuery>,
) -> Result<Json<BeersResponse>, (StatusCode, String)> {
    let filter = BeerFilter {
        season: q.season.filter(|s| !s.is_empty()),
        style: q.style.filter(|s| !s.is_empty()),
        search: q.search.filter(|s| !s.is_empty()),
    };
    let limit = q.limit.clamp(1, state.config.max_page_size);
    let offset = q.offset.max(0);

    let rows = repo::list(&state.db, &filter, limit, offset)
        .await
        .map_err(|e| {
            error!(error = %e, "list beers failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch beers".into(),
            )
        })?;
    let count = repo::count(&state.db, &filter).await.map_err(|e| {
        error!(error = %e, "count beers failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch beers".into(),
        )
    })?;

    let beers = rows.into_iter().map(Beer::from).collect();
    Ok(Json(BeersResponse { beers, count }))
}
