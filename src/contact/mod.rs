mod dto;
pub mod handlers;
mod repo;
mod services;

use crate::state::AppState;
use axum::{routing::post, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(handlers::submit_contact))
}
