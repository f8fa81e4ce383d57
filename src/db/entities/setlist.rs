use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One performance slot. Position in `Setlist::songs` is the performance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetlistSong {
    pub song_id: String,
    pub selected_members: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SetlistSong {
    pub fn features(&self, member_id: &str) -> bool {
        self.selected_members.iter().any(|m| m == member_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setlist {
    pub id: String,
    pub event_id: String,
    pub songs: Vec<SetlistSong>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Setlist {
    /// True if any slot plays `song_id`; repeated slots still count once
    pub fn includes_song(&self, song_id: &str) -> bool {
        self.songs.iter().any(|s| s.song_id == song_id)
    }
}
