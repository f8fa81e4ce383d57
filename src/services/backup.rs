//! Whole-document export, additive import and the example dataset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::document::{CollectionCounts, StorageDocument};
use crate::error::{AppError, Result};

pub const BACKUP_VERSION: &str = "1.0";

const COLLECTIONS: [&str; 4] = ["members", "songs", "events", "setlists"];

const EXAMPLE_DATASET: &str = include_str!("../../data/example_dataset.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub data: StorageDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub message: String,
    pub imported: CollectionCounts,
}

pub fn export(doc: StorageDocument, exported_at: DateTime<Utc>) -> BackupDocument {
    BackupDocument {
        version: BACKUP_VERSION.to_string(),
        exported_at,
        data: doc,
    }
}

/// Validate a backup payload and decode its records.
///
/// `version` and `data` must be present. Missing collections count as empty;
/// present ones must be arrays of well-formed records. Any failure rejects the
/// whole payload.
pub fn parse_backup(payload: Value) -> Result<StorageDocument> {
    let version_present = payload
        .get("version")
        .is_some_and(|v| !v.is_null() && v.as_str() != Some(""));
    let data = match payload.get("data") {
        Some(data) if version_present && data.is_object() => data,
        _ => {
            return Err(AppError::InvalidInput(
                "Missing version or data field".to_string(),
            ))
        }
    };

    let mut normalized = serde_json::Map::new();
    for name in COLLECTIONS {
        let collection = data.get(name).cloned().unwrap_or(Value::Array(Vec::new()));
        if !collection.is_array() {
            return Err(AppError::InvalidInput("Data fields must be arrays".to_string()));
        }
        normalized.insert(name.to_string(), collection);
    }

    serde_json::from_value(Value::Object(normalized))
        .map_err(|e| AppError::InvalidInput(format!("Invalid record in backup: {}", e)))
}

pub fn import_summary(imported: &StorageDocument) -> ImportSummary {
    ImportSummary {
        message: "Data imported successfully".to_string(),
        imported: imported.counts(),
    }
}

/// Fixed dataset used to bootstrap a fresh deployment
pub fn example_dataset() -> Result<StorageDocument> {
    Ok(serde_json::from_str(EXAMPLE_DATASET)?)
}
