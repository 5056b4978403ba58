use crate::{dto::HealthResponse, state::AppState};
use axum::{extract::State, Json};

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        blocked_domains: state.get_blocklist_size.execute(),
    })
}
