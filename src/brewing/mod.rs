pub mod color;
mod dto;
pub mod handlers;
mod normalize;
mod repo;
pub mod schedule;
mod services;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/beer-recipes", get(handlers::list_beer_recipes))
        .route("/beer-recipes/:id", get(handlers::get_beer_recipe))
}
