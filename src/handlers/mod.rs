pub mod backup;
pub mod events;
pub mod extract;
pub mod health;
pub mod records;
pub mod stats;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{
    db::entities::{Event, Member, Setlist, Song},
    state::AppState,
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Member endpoints
        .route(
            "/members",
            get(records::list::<Member>)
                .post(records::create::<Member>)
                .put(records::replace::<Member>)
                .delete(records::remove::<Member>),
        )
        .route("/members/:id", delete(records::remove_by_id::<Member>))

        // Song endpoints
        .route(
            "/songs",
            get(records::list::<Song>)
                .post(records::create::<Song>)
                .put(records::replace::<Song>)
                .delete(records::remove::<Song>),
        )
        .route("/songs/:id", delete(records::remove_by_id::<Song>))

        // Event endpoints
        .route(
            "/events",
            get(events::list_events)
                .post(records::create::<Event>)
                .put(records::replace::<Event>)
                .delete(records::remove::<Event>),
        )
        .route("/events/:id", delete(records::remove_by_id::<Event>))

        // Setlist endpoints
        .route(
            "/setlists",
            get(events::list_setlists)
                .post(records::create::<Setlist>)
                .put(records::replace::<Setlist>)
                .delete(records::remove::<Setlist>),
        )
        .route("/setlists/:id", delete(records::remove_by_id::<Setlist>))

        // Statistics and prediction
        .route("/stats", get(stats::get_stats))
        .route("/prediction", get(stats::get_prediction))

        // Backup
        .route("/export", get(backup::export_data))
        .route("/import", post(backup::import_data))
        .route("/init", get(backup::init_hint).post(backup::init_storage))
}
