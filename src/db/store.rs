//! File-backed document store with an in-process cache.
//!
//! The cache is authoritative for the life of the process: `save` updates it
//! before touching disk, and a failed disk write is logged rather than
//! returned. A cold start reads the file once; an unreadable or corrupt file
//! yields an empty document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};

use crate::db::document::StorageDocument;

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: Option<PathBuf>,
    cache: RwLock<Option<StorageDocument>>,
    write_lock: Mutex<()>,
    /// Set while the cache holds changes the last durable write did not land
    dirty: AtomicBool,
}

impl Store {
    /// Open a store persisted at `path`. The file is read lazily on first load.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                tracing::warn!("Could not create storage directory {:?}: {}", parent, e);
            }
        }

        tracing::info!("Opened document store at {:?}", path);
        Self::with_path(Some(path))
    }

    /// A store without durable backing; contents live as long as the process.
    pub fn in_memory() -> Self {
        Self::with_path(None)
    }

    fn with_path(path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                path,
                cache: RwLock::new(None),
                write_lock: Mutex::new(()),
                dirty: AtomicBool::new(false),
            }),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.inner.path.is_some()
    }

    /// True when the last durable write failed and has not been retried
    pub fn has_unpersisted_changes(&self) -> bool {
        self.inner.dirty.load(Ordering::SeqCst)
    }

    /// Current document. Never fails: unreadable storage loads as empty.
    pub async fn load(&self) -> StorageDocument {
        if let Some(doc) = self.inner.cache.read().await.as_ref() {
            tracing::debug!("Store cache hit: {:?}", doc.counts());
            return doc.clone();
        }

        let mut cache = self.inner.cache.write().await;
        if let Some(doc) = cache.as_ref() {
            return doc.clone();
        }

        let doc = self.read_durable().await;
        *cache = Some(doc.clone());
        doc
    }

    /// Replace the document. The cache is updated even if the disk write fails.
    pub async fn save(&self, doc: StorageDocument) {
        let _guard = self.inner.write_lock.lock().await;
        self.replace(doc).await;
    }

    /// Run a read-modify-write cycle under the store's write lock and return
    /// the saved document.
    pub async fn transaction<F>(&self, mutate: F) -> StorageDocument
    where
        F: FnOnce(&mut StorageDocument),
    {
        let _guard = self.inner.write_lock.lock().await;

        let mut doc = self.load().await;
        mutate(&mut doc);
        self.replace(doc.clone()).await;

        doc
    }

    /// Caller must hold `write_lock`
    async fn replace(&self, doc: StorageDocument) {
        *self.inner.cache.write().await = Some(doc.clone());
        self.persist(&doc).await;
    }

    /// Retry a pending durable write, then release the store.
    pub async fn close(&self) {
        let _guard = self.inner.write_lock.lock().await;

        if self.has_unpersisted_changes() {
            let cached = self.inner.cache.read().await.clone();
            if let Some(doc) = cached {
                tracing::info!("Flushing unpersisted changes before shutdown");
                self.persist(&doc).await;
            }
        }

        if self.has_unpersisted_changes() {
            tracing::error!("Store closed with changes that were never written to disk");
        } else {
            tracing::info!("Store closed");
        }
    }

    async fn read_durable(&self) -> StorageDocument {
        let Some(path) = self.inner.path.as_deref() else {
            return StorageDocument::default();
        };

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No storage file at {:?}, starting empty", path);
                return StorageDocument::default();
            }
            Err(e) => {
                tracing::warn!("Error loading data from {:?}: {}", path, e);
                return StorageDocument::default();
            }
        };

        match serde_json::from_str::<StorageDocument>(&content) {
            Ok(doc) => {
                tracing::info!("Loaded storage from {:?}: {:?}", path, doc.counts());
                doc
            }
            Err(e) => {
                tracing::warn!("Storage file {:?} is corrupt, starting empty: {}", path, e);
                StorageDocument::default()
            }
        }
    }

    async fn persist(&self, doc: &StorageDocument) {
        let Some(path) = self.inner.path.as_deref() else {
            return;
        };

        match write_atomic(path, doc).await {
            Ok(()) => {
                self.inner.dirty.store(false, Ordering::SeqCst);
                tracing::debug!("Saved storage to {:?}: {:?}", path, doc.counts());
            }
            Err(e) => {
                self.inner.dirty.store(true, Ordering::SeqCst);
                tracing::error!("Error saving data to {:?}: {}", path, e);
            }
        }
    }
}

/// Write to a sibling temp file and rename it over `path`.
async fn write_atomic(path: &Path, doc: &StorageDocument) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    let tmp_path = path.with_extension("json.tmp");

    {
        let mut tmp_file = tokio::fs::File::create(&tmp_path).await?;
        tmp_file.write_all(json.as_bytes()).await?;
        tmp_file.sync_all().await?;
    }

    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}
