use serde::Serialize;

use crate::db::document::StorageDocument;
use crate::db::entities::{Event, Setlist, Song};
use crate::services::statistics::{performances, round_one_decimal};

pub const AVAILABILITY_WEIGHT: f64 = 0.7;
pub const ADOPTION_WEIGHT: f64 = 0.3;
/// Songs with less of their default lineup available than this are dropped
pub const MIN_AVAILABILITY_PERCENT: f64 = 60.0;
pub const DEFAULT_PREDICTION_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPrediction {
    pub song_id: String,
    pub title: String,
    pub default_members: Vec<String>,
    /// Default members who attend the event, in default-lineup order
    pub available_members: Vec<String>,
    /// Percent of the default lineup attending
    pub availability_rate: f64,
    /// Percent of past setlists that included the song, one decimal place
    pub adoption_rate: f64,
    /// Weighted score in `0.0..=1.0`
    pub prediction_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub event: Event,
    /// Empty when no song has enough of its lineup available
    pub predictions: Vec<SongPrediction>,
}

/// Shortlist of songs for `event`, best candidates first.
pub fn predict(event: &Event, songs: &[Song], setlists: &[Setlist], limit: usize) -> PredictionResult {
    let total_setlists = setlists.len().max(1);

    let mut candidates: Vec<SongPrediction> = songs
        .iter()
        .map(|song| {
            let available_members: Vec<String> = song
                .default_select_members
                .iter()
                .filter(|m| event.is_attending(m))
                .cloned()
                .collect();

            let default_count = song.default_select_members.len();
            let (availability, availability_percent) = if default_count == 0 {
                (0.0, 0.0)
            } else {
                let available = available_members.len() as f64;
                (
                    available / default_count as f64,
                    available * 100.0 / default_count as f64,
                )
            };

            let historical_adoption = performances(&song.id, setlists) as f64 / total_setlists as f64;

            SongPrediction {
                song_id: song.id.clone(),
                title: song.title_ja.clone(),
                default_members: song.default_select_members.clone(),
                available_members,
                availability_rate: availability_percent,
                adoption_rate: round_one_decimal(historical_adoption * 100.0),
                prediction_score: availability * AVAILABILITY_WEIGHT
                    + historical_adoption * ADOPTION_WEIGHT,
            }
        })
        .filter(|p| p.availability_rate >= MIN_AVAILABILITY_PERCENT)
        .collect();

    candidates.sort_by(|a, b| b.prediction_score.total_cmp(&a.prediction_score));
    candidates.truncate(limit);

    PredictionResult {
        event: event.clone(),
        predictions: candidates,
    }
}

/// Prediction for the event with `event_id`, or `None` if there is no such event.
pub fn predict_for_event(doc: &StorageDocument, event_id: &str, limit: usize) -> Option<PredictionResult> {
    let event = doc.events.iter().find(|e| e.id == event_id)?;
    Some(predict(event, &doc.songs, &doc.setlists, limit))
}
