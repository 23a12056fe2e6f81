//! In-memory concert store.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{Clock, ConcertRepository, ConcertRepositoryError};
use crate::domain::{Concert, ConcertDraft, ConcertId};

/// Collection and id counter guarded by one lock.
struct ConcertShelf {
    concerts: Vec<Concert>,
    next_id: ConcertId,
}

/// Mutex-guarded concert collection with a monotonic id counter.
///
/// Ids start at 1 and are never reused, even after deletions; the counter
/// lives under the same lock as the collection so concurrent creates cannot
/// mint duplicate ids. Listing preserves insertion (creation) order.
pub struct InMemoryConcertStore {
    clock: Arc<dyn Clock>,
    inner: Mutex<ConcertShelf>,
}

impl InMemoryConcertStore {
    /// Create an empty store stamping timestamps from the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            inner: Mutex::new(ConcertShelf {
                concerts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn shelf(&self) -> Result<MutexGuard<'_, ConcertShelf>, ConcertRepositoryError> {
        self.inner
            .lock()
            .map_err(|_| ConcertRepositoryError::storage("concert collection lock poisoned"))
    }
}

#[async_trait]
impl ConcertRepository for InMemoryConcertStore {
    async fn create(&self, draft: ConcertDraft) -> Result<Concert, ConcertRepositoryError> {
        let now = self.clock.now();
        let mut shelf = self.shelf()?;
        let id = shelf.next_id;
        shelf.next_id += 1;

        let concert = Concert::new(id, draft, now);
        shelf.concerts.push(concert.clone());
        Ok(concert)
    }

    async fn list(&self) -> Result<Vec<Concert>, ConcertRepositoryError> {
        Ok(self.shelf()?.concerts.clone())
    }

    async fn find(&self, id: ConcertId) -> Result<Option<Concert>, ConcertRepositoryError> {
        Ok(self
            .shelf()?
            .concerts
            .iter()
            .find(|concert| concert.id() == id)
            .cloned())
    }

    async fn remove(&self, id: ConcertId) -> Result<bool, ConcertRepositoryError> {
        let mut shelf = self.shelf()?;
        let before = shelf.concerts.len();
        shelf.concerts.retain(|concert| concert.id() != id);
        Ok(shelf.concerts.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SystemClock;

    fn store() -> InMemoryConcertStore {
        InMemoryConcertStore::new(Arc::new(SystemClock))
    }

    fn draft(name: &str, seat: u32) -> ConcertDraft {
        ConcertDraft {
            name: name.into(),
            description: "Main hall".into(),
            seat,
        }
    }

    #[tokio::test]
    async fn ids_are_monotonic_from_one() {
        let store = store();
        let first = store.create(draft("a", 1)).await.expect("create succeeds");
        let second = store.create(draft("b", 2)).await.expect("create succeeds");
        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_removal() {
        let store = store();
        let first = store.create(draft("a", 1)).await.expect("create succeeds");
        assert!(store.remove(first.id()).await.expect("remove succeeds"));

        let next = store.create(draft("b", 1)).await.expect("create succeeds");
        assert_eq!(next.id(), 2);
    }

    #[tokio::test]
    async fn list_preserves_creation_order() {
        let store = store();
        for name in ["a", "b", "c"] {
            store.create(draft(name, 1)).await.expect("create succeeds");
        }

        let names: Vec<String> = store
            .list()
            .await
            .expect("list succeeds")
            .into_iter()
            .map(|concert| concert.name().to_owned())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn find_returns_none_for_unknown_id() {
        let store = store();
        assert!(store.find(99).await.expect("find succeeds").is_none());
    }

    #[tokio::test]
    async fn remove_reports_whether_a_record_existed() {
        let store = store();
        let concert = store.create(draft("a", 1)).await.expect("create succeeds");

        assert!(store.remove(concert.id()).await.expect("remove succeeds"));
        assert!(!store.remove(concert.id()).await.expect("remove succeeds"));
        assert!(store.find(concert.id()).await.expect("find succeeds").is_none());
    }
}
