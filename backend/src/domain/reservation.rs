//! Reservation entity and its one-way status transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::concert::ConcertId;
use crate::domain::user::UserId;

/// Store-assigned reservation identifier, independent of concert ids.
pub type ReservationId = i64;

/// Lifecycle state of a reservation.
///
/// The only transition is `Reserve` -> `Cancel`; a cancelled reservation is
/// terminal and a repeat booking creates a new row instead of reviving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// The seat claim is active and counts against capacity.
    Reserve,
    /// The claim was released by its owner.
    Cancel,
}

/// Error raised by [`Reservation::cancel`] when the transition is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyCancelledError;

impl std::fmt::Display for AlreadyCancelledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reservation is already cancelled")
    }
}

impl std::error::Error for AlreadyCancelledError {}

/// A claim by one user on one seat of one concert.
///
/// `created_at` is immutable; `updated_at` is refreshed when the reservation
/// is cancelled. The referenced concert must exist at creation time but is not
/// re-validated afterwards, so a dangling `concert_id` after a concert
/// deletion is an accepted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub(crate) id: ReservationId,
    pub(crate) user_id: UserId,
    pub(crate) concert_id: ConcertId,
    pub(crate) status: ReservationStatus,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Construct an active reservation with a store-assigned id and creation
    /// instant.
    pub fn new(
        id: ReservationId,
        user_id: UserId,
        concert_id: ConcertId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            concert_id,
            status: ReservationStatus::Reserve,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns the reservation id.
    pub fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the owning user id.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the referenced concert id.
    pub fn concert_id(&self) -> ConcertId {
        self.concert_id
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns true while the claim counts against capacity.
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Reserve
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Transition the reservation to `Cancel`, refreshing `updated_at`.
    ///
    /// Fails when the reservation is already cancelled; the first
    /// cancellation's effect is unaffected by later attempts. Ownership is the
    /// store's concern, not the entity's.
    pub fn cancel(&mut self, cancelled_at: DateTime<Utc>) -> Result<(), AlreadyCancelledError> {
        if self.status == ReservationStatus::Cancel {
            return Err(AlreadyCancelledError);
        }
        self.status = ReservationStatus::Cancel;
        self.updated_at = cancelled_at;
        Ok(())
    }
}
