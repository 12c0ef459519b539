pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::experts::handlers as experts;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap API
        .route("/api/v1/roadmap", post(roadmap::handle_generate_roadmap))
        .route("/api/v1/roadmap/options", get(roadmap::handle_form_options))
        .route("/api/v1/tracks", get(roadmap::handle_list_tracks))
        .route("/api/v1/tracks/:id", get(roadmap::handle_get_track))
        // Experts API
        .route("/api/v1/experts", get(experts::handle_list_experts))
        .with_state(state)
}
