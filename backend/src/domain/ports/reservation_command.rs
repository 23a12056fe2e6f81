//! Driving port for reservation mutations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ConcertId, Error, Reservation, ReservationId, ReservationStatus};

/// Serializable reservation representation returned by driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    /// Store-assigned identifier.
    pub id: ReservationId,
    /// Owning user identifier.
    pub user_id: String,
    /// Referenced concert identifier; may dangle after a concert deletion.
    pub concert_id: ConcertId,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp; refreshed on cancellation.
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationPayload {
    fn from(value: Reservation) -> Self {
        Self {
            id: value.id(),
            user_id: value.user_id().to_string(),
            concert_id: value.concert_id(),
            status: value.status(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
        }
    }
}

/// Request to reserve a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    /// Caller-supplied user identifier, trusted as-is.
    pub user_id: String,
    /// Concert to reserve a seat for.
    pub concert_id: ConcertId,
}

/// Response from reserving a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    /// The created reservation, status `reserve`.
    pub reservation: ReservationPayload,
}

/// Request to cancel a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationRequest {
    /// Caller-supplied user identifier; must own the reservation.
    pub user_id: String,
    /// Reservation to cancel.
    pub reservation_id: ReservationId,
}

/// Driving port for reservation write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationCommand: Send + Sync {
    /// Reserve a seat, enforcing the admission rules.
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<CreateReservationResponse, Error>;

    /// Cancel a reservation owned by the requesting user.
    async fn cancel_reservation(&self, request: CancelReservationRequest) -> Result<(), Error>;
}

/// Fixture command implementation for tests that do not need storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReservationCommand;

#[async_trait]
impl ReservationCommand for FixtureReservationCommand {
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<CreateReservationResponse, Error> {
        Err(Error::not_found(format!(
            "Concert with ID {} not found",
            request.concert_id
        )))
    }

    async fn cancel_reservation(&self, request: CancelReservationRequest) -> Result<(), Error> {
        Err(Error::not_found(format!(
            "Reservation with ID {} not found",
            request.reservation_id
        )))
    }
}
