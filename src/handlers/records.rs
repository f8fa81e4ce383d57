//! CRUD handlers shared by every record kind.
//!
//! Writes answer with the full updated collection so clients can replace
//! their local copy wholesale.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    db::entities::Record,
    error::{AppError, Result},
    handlers::extract::ValidJson,
    state::AppState,
};

pub async fn list<E: Record>(State(state): State<AppState>) -> Json<Vec<E>> {
    let records = state.repository.list::<E>().await;
    tracing::debug!("Returning {} {} records", records.len(), E::KIND);
    Json(records)
}

pub async fn create<E: Record>(
    State(state): State<AppState>,
    ValidJson(record): ValidJson<E>,
) -> Result<(StatusCode, Json<Vec<E>>)> {
    tracing::info!("Adding {} {}", E::KIND, record.id());
    let mut doc = state.repository.add(record).await?;
    tracing::info!("Now have {} {} records", E::collection(&doc).len(), E::KIND);

    Ok((StatusCode::CREATED, Json(std::mem::take(E::collection_mut(&mut doc)))))
}

pub async fn replace<E: Record>(
    State(state): State<AppState>,
    ValidJson(record): ValidJson<E>,
) -> Result<Json<Vec<E>>> {
    tracing::info!("Updating {} {}", E::KIND, record.id());
    let mut doc = state.repository.update(record).await?;

    Ok(Json(std::mem::take(E::collection_mut(&mut doc))))
}

/// Delete with the id in the body, e.g. `{"memberId": "3"}`. A plain `id` key
/// is accepted as well.
pub async fn remove<E: Record>(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<HashMap<String, Value>>,
) -> Result<Json<Vec<E>>> {
    let id = body
        .get(E::ID_FIELD)
        .or_else(|| body.get("id"))
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::InvalidInput(format!("Missing {} field", E::ID_FIELD)))?;

    delete_by_id::<E>(&state, id).await
}

pub async fn remove_by_id<E: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<E>>> {
    delete_by_id::<E>(&state, &id).await
}

async fn delete_by_id<E: Record>(state: &AppState, id: &str) -> Result<Json<Vec<E>>> {
    tracing::info!("Deleting {} {}", E::KIND, id);
    let mut doc = state.repository.delete::<E>(id).await?;
    tracing::info!("Now have {} {} records", E::collection(&doc).len(), E::KIND);

    Ok(Json(std::mem::take(E::collection_mut(&mut doc))))
}
