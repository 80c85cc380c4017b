use log::warn;

use crate::models::book::BookRecord;
use crate::models::errors::StorageError;
use crate::search_client::storage::FavoritesStorage;

pub const FAVORITES_KEY: &str = "favorites";

/// Favorites list, unique under [`BookRecord::is_same_book`], written back
/// to storage in full after every change.
pub struct FavoritesRepository<S: FavoritesStorage> {
    storage: S,
    books: Vec<BookRecord>,
}

impl<S: FavoritesStorage> FavoritesRepository<S> {
    /// A missing or malformed entry yields an empty list. Stored duplicates
    /// are dropped, keeping the first occurrence.
    pub fn load(storage: S) -> Self {
        let books = match storage.get(FAVORITES_KEY) {
            Ok(Some(json)) => serde_json::from_str::<Vec<BookRecord>>(&json).unwrap_or_else(|err| {
                warn!("ignoring unreadable favorites: {}", err);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("could not read favorites: {}", err);
                Vec::new()
            }
        };

        let mut unique: Vec<BookRecord> = Vec::with_capacity(books.len());
        for book in books {
            if !unique.iter().any(|fav| fav.is_same_book(&book)) {
                unique.push(book);
            }
        }

        Self { storage, books: unique }
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn contains(&self, book: &BookRecord) -> bool {
        self.books.iter().any(|fav| fav.is_same_book(book))
    }

    /// Returns `false` if the book was already a favorite.
    pub fn add(&mut self, book: BookRecord) -> Result<bool, StorageError> {
        if self.contains(&book) {
            return Ok(false);
        }
        self.books.push(book);
        self.save()?;
        Ok(true)
    }

    /// Returns `false` if the book was not a favorite.
    pub fn remove(&mut self, book: &BookRecord) -> Result<bool, StorageError> {
        let before = self.books.len();
        self.books.retain(|fav| !fav.is_same_book(book));
        if self.books.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Returns whether the book is a favorite afterwards. The in-memory list
    /// changes even when writing it back to storage fails.
    pub fn toggle(&mut self, book: &BookRecord) -> Result<bool, StorageError> {
        if self.contains(book) {
            self.remove(book)?;
            Ok(false)
        } else {
            self.add(book.clone())?;
            Ok(true)
        }
    }

    fn save(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.books)?;
        self.storage.set(FAVORITES_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use crate::search_client::storage::{FileStorage, MemoryStorage};

    use super::*;

    fn book(title: &str, authors: &[&str]) -> BookRecord {
        BookRecord::new(title, authors.iter().map(|a| a.to_string()).collect(), "http://thumb")
    }

    struct ReadOnlyStorage;

    impl FavoritesStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn stored(repo: &FavoritesRepository<MemoryStorage>) -> Vec<BookRecord> {
        let json = repo.storage().get(FAVORITES_KEY).unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn absent_entry_loads_empty() {
        let repo = FavoritesRepository::load(MemoryStorage::default());
        assert!(repo.books().is_empty());
    }

    #[test]
    fn malformed_entry_loads_empty() {
        let repo = FavoritesRepository::load(MemoryStorage::with_entry(FAVORITES_KEY, "{not json"));
        assert!(repo.books().is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut repo = FavoritesRepository::load(MemoryStorage::default());
        let dune = book("Dune", &["Frank Herbert"]);

        assert!(repo.toggle(&dune).unwrap());
        assert!(repo.contains(&dune));
        assert_eq!(stored(&repo), vec![dune.clone()]);

        assert!(!repo.toggle(&dune).unwrap());
        assert!(!repo.contains(&dune));
        assert!(stored(&repo).is_empty());
    }

    #[test]
    fn toggling_twice_restores_original_sequence() {
        let first = book("Dune", &["Frank Herbert"]);
        let second = book("Foundation", &["Isaac Asimov"]);
        let mut repo = FavoritesRepository::load(MemoryStorage::default());
        repo.add(first.clone()).unwrap();
        repo.add(second.clone()).unwrap();
        let original = repo.books().to_vec();

        let extra = book("Hyperion", &["Dan Simmons"]);
        repo.toggle(&extra).unwrap();
        repo.toggle(&extra).unwrap();

        assert_eq!(repo.books(), original.as_slice());
    }

    #[test]
    fn add_keeps_favorites_unique() {
        let mut repo = FavoritesRepository::load(MemoryStorage::default());
        assert!(repo.add(book("Dune", &["Frank Herbert"])).unwrap());
        assert!(!repo.add(BookRecord::new("Dune", vec!["Frank Herbert".to_string()], "other")).unwrap());
        assert_eq!(repo.books().len(), 1);
    }

    #[test]
    fn same_title_different_author_order_is_separate_favorite() {
        let mut repo = FavoritesRepository::load(MemoryStorage::default());
        repo.toggle(&book("Good Omens", &["Terry Pratchett", "Neil Gaiman"])).unwrap();
        repo.toggle(&book("Good Omens", &["Neil Gaiman", "Terry Pratchett"])).unwrap();
        assert_eq!(repo.books().len(), 2);
    }

    #[test]
    fn remove_unknown_book_is_noop() {
        let mut repo = FavoritesRepository::load(MemoryStorage::default());
        repo.add(book("Dune", &["Frank Herbert"])).unwrap();
        assert!(!repo.remove(&book("Dune", &["Somebody Else"])).unwrap());
        assert_eq!(repo.books().len(), 1);
    }

    #[test]
    fn file_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let books = vec![
            book("Dune", &["Frank Herbert"]),
            book("Anonymous", &["Unknown Author"]),
            book("Good Omens", &["Terry Pratchett", "Neil Gaiman"]),
        ];

        let mut repo = FavoritesRepository::load(FileStorage::new(dir.path().to_path_buf()));
        for b in &books {
            repo.add(b.clone()).unwrap();
        }

        let reloaded = FavoritesRepository::load(FileStorage::new(dir.path().to_path_buf()));
        assert_eq!(reloaded.books(), books.as_slice());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("favorites.json"), "[{\"title\": 3}]").unwrap();

        let repo = FavoritesRepository::load(FileStorage::new(dir.path().to_path_buf()));
        assert!(repo.books().is_empty());
    }

    #[test]
    fn duplicates_in_storage_load_once() {
        let dune = book("Dune", &["Frank Herbert"]);
        let foundation = book("Foundation", &["Isaac Asimov"]);
        let dune_other_cover = BookRecord::new("Dune", vec!["Frank Herbert".to_string()], "http://other");
        let json = serde_json::to_string(&vec![dune.clone(), foundation.clone(), dune_other_cover]).unwrap();

        let repo = FavoritesRepository::load(MemoryStorage::with_entry(FAVORITES_KEY, &json));

        assert_eq!(repo.books(), &[dune, foundation]);
    }

    #[test]
    fn failed_save_still_updates_memory() {
        let mut repo = FavoritesRepository::load(ReadOnlyStorage);
        let dune = book("Dune", &["Frank Herbert"]);

        assert!(matches!(repo.toggle(&dune), Err(StorageError::Io(_))));
        assert!(repo.contains(&dune));

        assert!(repo.toggle(&dune).is_err());
        assert!(!repo.contains(&dune));
    }
}
