use serde::{Deserialize, Serialize};

use crate::db::entities::{Event, Member, Setlist, Song};

/// The single JSON document holding every collection.
///
/// Collections keep insertion order. A missing collection decodes as empty so
/// partially written documents still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDocument {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub setlists: Vec<Setlist>,
}

impl StorageDocument {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
            && self.songs.is_empty()
            && self.events.is_empty()
            && self.setlists.is_empty()
    }

    /// Append every record of `other`, keeping duplicates
    pub fn extend(&mut self, other: StorageDocument) {
        self.members.extend(other.members);
        self.songs.extend(other.songs);
        self.events.extend(other.events);
        self.setlists.extend(other.setlists);
    }

    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            members: self.members.len(),
            songs: self.songs.len(),
            events: self.events.len(),
            setlists: self.setlists.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCounts {
    pub members: usize,
    pub songs: usize,
    pub events: usize,
    pub setlists: usize,
}
