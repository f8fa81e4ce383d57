pub mod document;
pub mod entities;
pub mod enums;
pub mod repositories;
pub mod store;

pub use document::{CollectionCounts, StorageDocument};
pub use entities::*;
pub use enums::*;
pub use repositories::Repository;
pub use store::Store;
