//! In-memory presentation storage.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::Presentation;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Keeps presentations in a map. Useful for tests and scratch sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    decks: RwLock<BTreeMap<String, Presentation>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock poisoned: {e}"))
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, presentation: &Presentation) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let presentation = presentation.clone();
        Box::pin(async move {
            self.decks.write().map_err(lock_error)?.insert(id, presentation);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Presentation>> {
        let id = id.to_string();
        Box::pin(async move {
            let decks = self.decks.read().map_err(lock_error)?;
            decks.get(&id).cloned().ok_or(StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.decks.write().map_err(lock_error)?.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let decks = self.decks.read().map_err(lock_error)?;
            Ok(decks.keys().cloned().collect())
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move { Ok(self.decks.read().map_err(lock_error)?.contains_key(&id)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollster::block_on;

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let mut deck = Presentation::new();
        deck.title = "Quarterly review".to_string();

        block_on(storage.save("q3", &deck)).unwrap();
        let loaded = block_on(storage.load("q3")).unwrap();
        assert_eq!(loaded, deck);
    }

    #[test]
    fn test_saved_copy_is_detached() {
        let storage = MemoryStorage::new();
        let mut deck = Presentation::new();
        block_on(storage.save("deck", &deck)).unwrap();
        deck.title = "changed".to_string();

        let loaded = block_on(storage.load("deck")).unwrap();
        assert_eq!(loaded.title, "Untitled Presentation");
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = block_on(storage.load("missing"));
        assert!(matches!(result, Err(StorageError::NotFound(id)) if id == "missing"));
    }

    #[test]
    fn test_delete_and_exists() {
        let storage = MemoryStorage::new();
        let deck = Presentation::new();

        assert!(!block_on(storage.exists("a")).unwrap());
        block_on(storage.save("a", &deck)).unwrap();
        assert!(block_on(storage.exists("a")).unwrap());
        block_on(storage.delete("a")).unwrap();
        assert!(!block_on(storage.exists("a")).unwrap());
        block_on(storage.delete("a")).unwrap();
    }

    #[test]
    fn test_list_is_sorted() {
        let storage = MemoryStorage::new();
        let deck = Presentation::new();
        block_on(storage.save("b", &deck)).unwrap();
        block_on(storage.save("a", &deck)).unwrap();
        assert_eq!(block_on(storage.list()).unwrap(), vec!["a", "b"]);
    }
}
