use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::{
    db::CollectionCounts,
    error::Result,
    handlers::extract::ValidJson,
    services::{backup, BackupDocument, ImportSummary},
    state::AppState,
};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct InitResponse {
    pub message: String,
    pub seeded: CollectionCounts,
}

pub async fn export_data(State(state): State<AppState>) -> Json<BackupDocument> {
    let doc = state.repository.all().await;
    tracing::info!("Exporting data: {:?}", doc.counts());

    Json(backup::export(doc, Utc::now()))
}

/// Append every record in the backup. Existing records are never replaced, so
/// importing the same backup twice duplicates it.
pub async fn import_data(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<Value>,
) -> Result<Json<ImportSummary>> {
    let incoming = backup::parse_backup(payload)?;
    tracing::info!("Importing data: {:?}", incoming.counts());

    let summary = backup::import_summary(&incoming);
    state.repository.add_all(incoming).await?;
    tracing::info!("Import completed successfully");

    Ok(Json(summary))
}

pub async fn init_hint() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "POST to /api/init to initialize storage".to_string(),
    })
}

/// Append the example dataset. Calling this twice appends it twice.
pub async fn init_storage(State(state): State<AppState>) -> Result<Json<InitResponse>> {
    let seeded = seed_example_data(&state).await?;

    Ok(Json(InitResponse {
        message: "Storage initialized successfully".to_string(),
        seeded,
    }))
}

pub async fn seed_example_data(state: &AppState) -> Result<CollectionCounts> {
    let dataset = backup::example_dataset()?;
    let counts = dataset.counts();

    state.repository.add_all(dataset).await?;
    tracing::info!("Storage initialized with example data: {:?}", counts);

    Ok(counts)
}
