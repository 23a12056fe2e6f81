//! Port for the reservation store and its admission checks.
//!
//! The admission outcome is part of the port contract: adapters must run the
//! duplicate check, the capacity check, and the insert (or the ownership and
//! state checks, and the update) as one atomic unit with respect to other
//! calls touching the same concert or reservation. See the in-memory adapter
//! for the reference critical-section layout.

use async_trait::async_trait;

use crate::domain::{ConcertId, Reservation, ReservationId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by reservation store adapters.
    pub enum ReservationRepositoryError {
        /// The referenced concert does not exist.
        ConcertNotFound { concert_id: ConcertId } =>
            "concert {concert_id} does not exist",
        /// The user already holds an active reservation for the concert.
        AlreadyReserved { concert_id: ConcertId } =>
            "active reservation already held for concert {concert_id}",
        /// All seats of the concert are taken by active reservations.
        SoldOut { concert_id: ConcertId } =>
            "concert {concert_id} has no seats available",
        /// The referenced reservation does not exist.
        ReservationNotFound { reservation_id: ReservationId } =>
            "reservation {reservation_id} does not exist",
        /// The reservation belongs to a different user.
        NotOwner { reservation_id: ReservationId } =>
            "reservation {reservation_id} belongs to another user",
        /// The reservation was already cancelled.
        AlreadyCancelled { reservation_id: ReservationId } =>
            "reservation {reservation_id} is already cancelled",
        /// The underlying store failed, e.g. a poisoned lock.
        Storage { message: String } =>
            "reservation store failure: {message}",
    }
}

/// Port for reservation writes, reads, and the capacity queries backing the
/// availability read-model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Admit and create a reservation.
    ///
    /// Checks run in order: concert existence, duplicate claim, capacity.
    /// A duplicate attempt on a full concert therefore reports
    /// `AlreadyReserved`, not `SoldOut`.
    async fn create(
        &self,
        user_id: &UserId,
        concert_id: ConcertId,
    ) -> Result<Reservation, ReservationRepositoryError>;

    /// Cancel a reservation on behalf of its owner.
    ///
    /// Checks run in order: existence, ownership, state. A failed attempt
    /// leaves the reservation untouched.
    async fn cancel(
        &self,
        user_id: &UserId,
        reservation_id: ReservationId,
    ) -> Result<Reservation, ReservationRepositoryError>;

    /// Find a reservation by id.
    async fn find(
        &self,
        reservation_id: ReservationId,
    ) -> Result<Option<Reservation>, ReservationRepositoryError>;

    /// List every reservation regardless of status, in creation order.
    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError>;

    /// List a user's reservations regardless of status, in creation order.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError>;

    /// List a concert's reservations regardless of status, in creation order.
    async fn list_for_concert(
        &self,
        concert_id: ConcertId,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError>;

    /// Count active reservations for a concert.
    async fn active_count_for_concert(
        &self,
        concert_id: ConcertId,
    ) -> Result<usize, ReservationRepositoryError>;

    /// Ids of active reservations held by the user for the concert.
    ///
    /// At most one id under the one-claim-per-user rule.
    async fn active_ids_for_user_and_concert(
        &self,
        user_id: &UserId,
        concert_id: ConcertId,
    ) -> Result<Vec<ReservationId>, ReservationRepositoryError>;
}

/// Fixture implementation for tests that do not exercise reservation storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReservationRepository;

#[async_trait]
impl ReservationRepository for FixtureReservationRepository {
    async fn create(
        &self,
        _user_id: &UserId,
        concert_id: ConcertId,
    ) -> Result<Reservation, ReservationRepositoryError> {
        Err(ReservationRepositoryError::concert_not_found(concert_id))
    }

    async fn cancel(
        &self,
        _user_id: &UserId,
        reservation_id: ReservationId,
    ) -> Result<Reservation, ReservationRepositoryError> {
        Err(ReservationRepositoryError::reservation_not_found(
            reservation_id,
        ))
    }

    async fn find(
        &self,
        _reservation_id: ReservationId,
    ) -> Result<Option<Reservation>, ReservationRepositoryError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_for_concert(
        &self,
        _concert_id: ConcertId,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(Vec::new())
    }

    async fn active_count_for_concert(
        &self,
        _concert_id: ConcertId,
    ) -> Result<usize, ReservationRepositoryError> {
        Ok(0)
    }

    async fn active_ids_for_user_and_concert(
        &self,
        _user_id: &UserId,
        _concert_id: ConcertId,
    ) -> Result<Vec<ReservationId>, ReservationRepositoryError> {
        Ok(Vec::new())
    }
}
