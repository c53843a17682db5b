mod dto;
pub mod handlers;
mod repo;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/recipes", get(handlers::list_recipes))
}
