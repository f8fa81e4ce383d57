use crate::db::document::StorageDocument;
use crate::db::entities::Record;
use crate::db::store::Store;
use crate::error::{AppError, Result};

/// Add/update/delete for every record kind. Each call is one full
/// load-mutate-save cycle against the store and returns the saved document.
#[derive(Clone)]
pub struct Repository {
    store: Store,
}

impl Repository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> StorageDocument {
        self.store.load().await
    }

    pub async fn list<E: Record>(&self) -> Vec<E> {
        let mut doc = self.store.load().await;
        std::mem::take(E::collection_mut(&mut doc))
    }

    /// Append `record`. An existing record with the same id is kept alongside it.
    pub async fn add<E: Record>(&self, record: E) -> Result<StorageDocument> {
        require_id::<E>(record.id())?;

        let doc = self
            .store
            .transaction(|doc| E::collection_mut(doc).push(record))
            .await;

        Ok(doc)
    }

    /// Append every record of `batch` in one cycle, collection by collection.
    pub async fn add_all(&self, batch: StorageDocument) -> Result<StorageDocument> {
        batch.members.iter().try_for_each(|r| require_id::<crate::db::Member>(r.id()))?;
        batch.songs.iter().try_for_each(|r| require_id::<crate::db::Song>(r.id()))?;
        batch.events.iter().try_for_each(|r| require_id::<crate::db::Event>(r.id()))?;
        batch.setlists.iter().try_for_each(|r| require_id::<crate::db::Setlist>(r.id()))?;

        let doc = self.store.transaction(|doc| doc.extend(batch)).await;
        Ok(doc)
    }

    /// Replace the first record whose id matches. No match leaves the
    /// collection unchanged; the document is saved either way.
    pub async fn update<E: Record>(&self, record: E) -> Result<StorageDocument> {
        require_id::<E>(record.id())?;

        let doc = self
            .store
            .transaction(|doc| {
                let collection = E::collection_mut(doc);
                match collection.iter_mut().find(|existing| existing.id() == record.id()) {
                    Some(existing) => *existing = record,
                    None => tracing::debug!(
                        "No {} with id {} to update",
                        E::KIND,
                        record.id()
                    ),
                }
            })
            .await;

        Ok(doc)
    }

    /// Remove every record with this id. Unknown ids are a no-op.
    pub async fn delete<E: Record>(&self, id: &str) -> Result<StorageDocument> {
        require_id::<E>(id)?;

        let doc = self
            .store
            .transaction(|doc| E::collection_mut(doc).retain(|r| r.id() != id))
            .await;

        Ok(doc)
    }
}

fn require_id<E: Record>(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} id must not be empty", E::KIND)));
    }
    Ok(())
}
