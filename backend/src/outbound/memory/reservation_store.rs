//! In-memory reservation store and the admission algorithm.
//!
//! `create` and `cancel` are check-then-act sequences: without atomicity two
//! concurrent creates could both pass the duplicate or capacity check before
//! either inserts. The whole sequence therefore runs under one mutex guard
//! over the reservation ledger. Concert capacity is immutable after creation,
//! so reading the concert before taking the ledger lock does not widen the
//! race surface; a concurrent concert deletion during a reserve is the
//! accepted dangling-reference behaviour.
//!
//! Queries are linear scans over the full collection. Capacity enforcement
//! correctness matters far more than asymptotic cost at the scale this
//! service targets; an index would have to be updated inside the same
//! critical section to be worth having.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    Clock, ConcertRepository, ReservationRepository, ReservationRepositoryError,
};
use crate::domain::{ConcertId, Reservation, ReservationId, UserId};

/// Collection and id counter guarded by one lock.
struct ReservationLedger {
    reservations: Vec<Reservation>,
    next_id: ReservationId,
}

impl ReservationLedger {
    fn holds_active_claim(&self, user_id: &UserId, concert_id: ConcertId) -> bool {
        self.reservations.iter().any(|reservation| {
            reservation.user_id() == user_id
                && reservation.concert_id() == concert_id
                && reservation.is_active()
        })
    }

    fn active_count(&self, concert_id: ConcertId) -> usize {
        self.reservations
            .iter()
            .filter(|reservation| reservation.concert_id() == concert_id && reservation.is_active())
            .count()
    }
}

/// Mutex-guarded reservation ledger enforcing the admission rules.
///
/// Reservation ids are monotonic from 1 and independent of concert ids. A
/// cancelled reservation stays in the ledger; re-reserving after a cancel
/// creates a new row rather than reviving the old one.
pub struct InMemoryReservationStore {
    concerts: Arc<dyn ConcertRepository>,
    clock: Arc<dyn Clock>,
    inner: Mutex<ReservationLedger>,
}

impl InMemoryReservationStore {
    /// Create an empty store reading capacities from the given concert store.
    pub fn new(concerts: Arc<dyn ConcertRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            concerts,
            clock,
            inner: Mutex::new(ReservationLedger {
                reservations: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn ledger(&self) -> Result<MutexGuard<'_, ReservationLedger>, ReservationRepositoryError> {
        self.inner
            .lock()
            .map_err(|_| ReservationRepositoryError::storage("reservation ledger lock poisoned"))
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationStore {
    async fn create(
        &self,
        user_id: &UserId,
        concert_id: ConcertId,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let concert = self
            .concerts
            .find(concert_id)
            .await
            .map_err(|err| ReservationRepositoryError::storage(err.to_string()))?
            .ok_or_else(|| ReservationRepositoryError::concert_not_found(concert_id))?;
        let now = self.clock.now();

        let mut ledger = self.ledger()?;

        // Duplicate before capacity: a repeat attempt on a full concert must
        // report the duplicate, not the missing seat.
        if ledger.holds_active_claim(user_id, concert_id) {
            return Err(ReservationRepositoryError::already_reserved(concert_id));
        }
        if ledger.active_count(concert_id) >= concert.seat() as usize {
            return Err(ReservationRepositoryError::sold_out(concert_id));
        }

        let id = ledger.next_id;
        ledger.next_id += 1;
        let reservation = Reservation::new(id, user_id.clone(), concert_id, now);
        ledger.reservations.push(reservation.clone());
        Ok(reservation)
    }

    async fn cancel(
        &self,
        user_id: &UserId,
        reservation_id: ReservationId,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let now = self.clock.now();
        let mut ledger = self.ledger()?;

        let reservation = ledger
            .reservations
            .iter_mut()
            .find(|reservation| reservation.id() == reservation_id)
            .ok_or_else(|| ReservationRepositoryError::reservation_not_found(reservation_id))?;

        if reservation.user_id() != user_id {
            return Err(ReservationRepositoryError::not_owner(reservation_id));
        }
        reservation
            .cancel(now)
            .map_err(|_| ReservationRepositoryError::already_cancelled(reservation_id))?;
        Ok(reservation.clone())
    }

    async fn find(
        &self,
        reservation_id: ReservationId,
    ) -> Result<Option<Reservation>, ReservationRepositoryError> {
        Ok(self
            .ledger()?
            .reservations
            .iter()
            .find(|reservation| reservation.id() == reservation_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(self.ledger()?.reservations.clone())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(self
            .ledger()?
            .reservations
            .iter()
            .filter(|reservation| reservation.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn list_for_concert(
        &self,
        concert_id: ConcertId,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(self
            .ledger()?
            .reservations
            .iter()
            .filter(|reservation| reservation.concert_id() == concert_id)
            .cloned()
            .collect())
    }

    async fn active_count_for_concert(
        &self,
        concert_id: ConcertId,
    ) -> Result<usize, ReservationRepositoryError> {
        Ok(self.ledger()?.active_count(concert_id))
    }

    async fn active_ids_for_user_and_concert(
        &self,
        user_id: &UserId,
        concert_id: ConcertId,
    ) -> Result<Vec<ReservationId>, ReservationRepositoryError> {
        Ok(self
            .ledger()?
            .reservations
            .iter()
            .filter(|reservation| {
                reservation.user_id() == user_id
                    && reservation.concert_id() == concert_id
                    && reservation.is_active()
            })
            .map(Reservation::id)
            .collect())
    }
}

#[cfg(test)]
#[path = "reservation_store_tests.rs"]
mod tests;
