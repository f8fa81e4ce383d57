pub mod event;
pub mod member;
pub mod setlist;
pub mod song;

pub use event::Event;
pub use member::Member;
pub use setlist::{Setlist, SetlistSong};
pub use song::Song;

use serde::{de::DeserializeOwned, Serialize};

use crate::db::document::StorageDocument;

/// An entity kind stored as one collection of the storage document.
///
/// Records are identified by a caller-assigned string id. Nothing enforces
/// uniqueness: two records may share an id and both are kept.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Singular name used in log lines
    const KIND: &'static str;

    /// Key carrying the id in a delete request body, e.g. `{"memberId": "1"}`
    const ID_FIELD: &'static str;

    fn id(&self) -> &str;

    fn collection(doc: &StorageDocument) -> &Vec<Self>;

    fn collection_mut(doc: &mut StorageDocument) -> &mut Vec<Self>;
}

impl Record for Member {
    const KIND: &'static str = "member";
    const ID_FIELD: &'static str = "memberId";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(doc: &StorageDocument) -> &Vec<Self> {
        &doc.members
    }

    fn collection_mut(doc: &mut StorageDocument) -> &mut Vec<Self> {
        &mut doc.members
    }
}

impl Record for Song {
    const KIND: &'static str = "song";
    const ID_FIELD: &'static str = "songId";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(doc: &StorageDocument) -> &Vec<Self> {
        &doc.songs
    }

    fn collection_mut(doc: &mut StorageDocument) -> &mut Vec<Self> {
        &mut doc.songs
    }
}

impl Record for Event {
    const KIND: &'static str = "event";
    const ID_FIELD: &'static str = "eventId";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(doc: &StorageDocument) -> &Vec<Self> {
        &doc.events
    }

    fn collection_mut(doc: &mut StorageDocument) -> &mut Vec<Self> {
        &mut doc.events
    }
}

impl Record for Setlist {
    const KIND: &'static str = "setlist";
    const ID_FIELD: &'static str = "setlistId";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(doc: &StorageDocument) -> &Vec<Self> {
        &doc.setlists
    }

    fn collection_mut(doc: &mut StorageDocument) -> &mut Vec<Self> {
        &mut doc.setlists
    }
}
