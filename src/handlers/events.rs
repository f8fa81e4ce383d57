use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    db::{
        entities::{Event, Setlist},
        enums::SortOrder,
    },
    handlers::extract::ValidQuery,
    services::timeline,
    state::AppState,
};

#[derive(Deserialize)]
pub struct ListByDateQuery {
    /// Without an order the collection is returned in insertion order
    pub order: Option<SortOrder>,
}

pub async fn list_events(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListByDateQuery>,
) -> Json<Vec<Event>> {
    let mut events = state.repository.list::<Event>().await;

    if let Some(order) = query.order {
        tracing::debug!("Sorting {} events by date {}", events.len(), order.as_str());
        timeline::sort_events(&mut events, order);
    }

    Json(events)
}

pub async fn list_setlists(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListByDateQuery>,
) -> Json<Vec<Setlist>> {
    let doc = state.repository.all().await;
    let mut setlists = doc.setlists;

    if let Some(order) = query.order {
        tracing::debug!("Sorting {} setlists by event date {}", setlists.len(), order.as_str());
        timeline::sort_setlists(&mut setlists, &doc.events, order);
    }

    Json(setlists)
}
