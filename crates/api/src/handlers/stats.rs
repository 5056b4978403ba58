use crate::{
    dto::{StatsQuery, StatsResponse},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> Json<StatsResponse> {
    let snapshot = state.get_activity.execute(params.limit);

    debug!(
        total = snapshot.stats.total,
        blocked = snapshot.stats.blocked,
        logs = snapshot.logs.len(),
        "Activity snapshot retrieved"
    );

    Json(StatsResponse::from(snapshot))
}
