use std::sync::Arc;

use crate::config::Config;
use crate::db::{Repository, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub repository: Repository,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            repository: Repository::new(store.clone()),
            store,
            config: Arc::new(config),
        }
    }
}
