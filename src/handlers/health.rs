use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub persistent_storage: bool,
    pub unpersisted_changes: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        persistent_storage: state.store.is_persistent(),
        unpersisted_changes: state.store.has_unpersisted_changes(),
    })
}
