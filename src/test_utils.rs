//! Test utilities for Setlist Manager
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory stores (one per test)
//! - AppState factories
//! - Record factories with sensible defaults

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    config::{Config, LogFormat},
    db::{
        entities::{Event, Member, Setlist, SetlistSong, Song},
        enums::MemberStatus,
        StorageDocument, Store,
    },
    state::AppState,
};

/// Create a test configuration that never touches the filesystem
pub fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        storage_path: None,
        seed_on_empty: false,
        log_format: LogFormat::Pretty,
    }
}

/// Create a test AppState backed by a fresh in-memory store
pub fn setup_test_app_state() -> AppState {
    AppState::new(Store::in_memory(), test_config())
}

/// Create a test AppState around an existing store (e.g. one opened on a temp dir)
pub fn setup_test_app_state_with_store(store: Store) -> AppState {
    AppState::new(store, test_config())
}

/// Create a test AppState whose store already holds `doc`
pub async fn setup_seeded_app_state(doc: StorageDocument) -> AppState {
    let store = Store::in_memory();
    store.save(doc).await;
    setup_test_app_state_with_store(store)
}

// ============================================================================
// Test Data Factories
// ============================================================================

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("Invalid test date")
}

fn timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("Invalid test timestamp")
        .with_timezone(&Utc)
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn test_member(id: &str, name_ja: &str) -> Member {
    Member {
        id: id.to_string(),
        name: format!("Member {}", id),
        name_ja: name_ja.to_string(),
        birth_date: date("2002-07-22"),
        join_date: date("2019-06-01"),
        image_url: None,
        status: MemberStatus::Active,
    }
}

pub fn test_song(id: &str, default_members: &[&str]) -> Song {
    Song {
        id: id.to_string(),
        title: format!("Song {}", id),
        title_ja: format!("ソング {}", id),
        release_date: None,
        duration: 240,
        default_select_members: ids(default_members),
        image_url: None,
    }
}

pub fn test_event(id: &str, event_date: &str, participating: &[&str]) -> Event {
    Event {
        id: id.to_string(),
        date: date(event_date),
        name: format!("Event {}", id),
        venue: "Bangkok Studio".to_string(),
        participating_members: ids(participating),
        notes: None,
    }
}

/// Setlist whose slots are `(song id, performing member ids)` in performance order
pub fn test_setlist(id: &str, event_id: &str, slots: &[(&str, &[&str])]) -> Setlist {
    let now = timestamp("2024-01-15T10:00:00Z");
    Setlist {
        id: id.to_string(),
        event_id: event_id.to_string(),
        songs: slots
            .iter()
            .map(|(song_id, members)| SetlistSong {
                song_id: song_id.to_string(),
                selected_members: ids(members),
                notes: None,
            })
            .collect(),
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_app_state_is_empty() {
        let state = setup_test_app_state();

        assert!(state.repository.all().await.is_empty());
        assert!(!state.store.is_persistent());
    }

    #[tokio::test]
    async fn test_seeded_app_state_holds_document() {
        let mut doc = StorageDocument::default();
        doc.members.push(test_member("1", "ミント"));

        let state = setup_seeded_app_state(doc.clone()).await;

        assert_eq!(state.repository.all().await, doc);
    }

    #[test]
    fn test_setlist_factory_keeps_slot_order() {
        let setlist = test_setlist("sl1", "e1", &[("s2", &["1"]), ("s1", &["1", "2"])]);

        assert_eq!(setlist.songs[0].song_id, "s2");
        assert_eq!(setlist.songs[1].selected_members, vec!["1", "2"]);
    }
}
