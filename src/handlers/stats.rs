use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    handlers::extract::ValidQuery,
    services::{
        prediction::{self, DEFAULT_PREDICTION_LIMIT},
        statistics, DashboardSummary, MemberStat, PredictionResult, SongStat,
    },
    state::AppState,
};

const MAX_PREDICTION_LIMIT: usize = 50;

#[derive(Serialize)]
pub struct StatsResponse {
    pub summary: DashboardSummary,
    pub songs: Vec<SongStat>,
    pub members: Vec<MemberStat>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionQuery {
    pub event_id: Option<String>,
    pub limit: Option<usize>,
}

/// Adoption and participation statistics over every setlist
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let doc = state.repository.all().await;

    let songs = statistics::song_adoption(&doc.songs, &doc.setlists);
    let members = statistics::member_participation(&doc.members, &doc.setlists);
    let summary = statistics::summarize(&doc.songs, &doc.members, &doc.setlists, &songs);

    Json(StatsResponse {
        summary,
        songs,
        members,
    })
}

/// Predicted setlist for an event. `null` when no event is selected or the
/// event does not exist; an empty `predictions` list when no song fits.
pub async fn get_prediction(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<PredictionQuery>,
) -> Json<Option<PredictionResult>> {
    let Some(event_id) = query.event_id.filter(|id| !id.is_empty()) else {
        return Json(None);
    };
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PREDICTION_LIMIT)
        .clamp(1, MAX_PREDICTION_LIMIT);

    let doc = state.repository.all().await;
    let result = prediction::predict_for_event(&doc, &event_id, limit);

    match &result {
        Some(r) => tracing::info!(
            "Predicted {} songs for event {}",
            r.predictions.len(),
            event_id
        ),
        None => tracing::info!("No event {} to predict for", event_id),
    }

    Json(result)
}
