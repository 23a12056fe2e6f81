//! Port for the concert store, the source of truth for seat capacity.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{Concert, ConcertDraft, ConcertId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by concert store adapters.
    pub enum ConcertRepositoryError {
        /// The underlying store failed, e.g. a poisoned lock.
        Storage { message: String } =>
            "concert store failure: {message}",
    }
}

/// Port for concert CRUD.
///
/// Absence is modelled as `Ok(None)`/`Ok(false)`; callers decide whether that
/// is a NotFound condition. Deleting a concert never cascades to reservations
/// referencing it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConcertRepository: Send + Sync {
    /// Create a concert from a draft, assigning the next monotonic id.
    async fn create(&self, draft: ConcertDraft) -> Result<Concert, ConcertRepositoryError>;

    /// List all concerts in creation order.
    async fn list(&self) -> Result<Vec<Concert>, ConcertRepositoryError>;

    /// Find a concert by id.
    async fn find(&self, id: ConcertId) -> Result<Option<Concert>, ConcertRepositoryError>;

    /// Hard-delete a concert; returns whether a record was removed.
    async fn remove(&self, id: ConcertId) -> Result<bool, ConcertRepositoryError>;
}

/// Fixture implementation for tests that do not exercise concert storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureConcertRepository;

#[async_trait]
impl ConcertRepository for FixtureConcertRepository {
    async fn create(&self, draft: ConcertDraft) -> Result<Concert, ConcertRepositoryError> {
        let epoch = Utc.timestamp_opt(0, 0).single().unwrap_or_default();
        Ok(Concert::new(1, draft, epoch))
    }

    async fn list(&self) -> Result<Vec<Concert>, ConcertRepositoryError> {
        Ok(Vec::new())
    }

    async fn find(&self, _id: ConcertId) -> Result<Option<Concert>, ConcertRepositoryError> {
        Ok(None)
    }

    async fn remove(&self, _id: ConcertId) -> Result<bool, ConcertRepositoryError> {
        Ok(false)
    }
}
