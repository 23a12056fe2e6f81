//! Driving port for reservation reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ConcertId, Error, ReservationId};

use super::reservation_command::ReservationPayload;

/// Request to list reservations, optionally narrowed to one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListReservationsRequest {
    /// When set, only this user's reservations are returned.
    pub user_id: Option<String>,
}

/// Response from listing reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListReservationsResponse {
    /// Reservations of any status, in creation order.
    pub reservations: Vec<ReservationPayload>,
}

/// Response from fetching one reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetReservationResponse {
    /// The requested reservation.
    pub reservation: ReservationPayload,
}

/// Request for the active reservation ids of one user on one concert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveReservationIdsRequest {
    /// Caller-supplied user identifier.
    pub user_id: String,
    /// Concert to check.
    pub concert_id: ConcertId,
}

/// Response carrying active reservation ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveReservationIdsResponse {
    /// Ids of active reservations; at most one under the one-claim rule.
    pub reservation_ids: Vec<ReservationId>,
}

/// Driving port for reservation read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationQuery: Send + Sync {
    /// List reservations of any status, optionally filtered by user.
    async fn list_reservations(
        &self,
        request: ListReservationsRequest,
    ) -> Result<ListReservationsResponse, Error>;

    /// Fetch a single reservation.
    async fn get_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> Result<GetReservationResponse, Error>;

    /// Ids of the user's active reservations for a concert.
    async fn active_reservation_ids(
        &self,
        request: ActiveReservationIdsRequest,
    ) -> Result<ActiveReservationIdsResponse, Error>;
}

/// Fixture query implementation for tests that do not need storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReservationQuery;

#[async_trait]
impl ReservationQuery for FixtureReservationQuery {
    async fn list_reservations(
        &self,
        _request: ListReservationsRequest,
    ) -> Result<ListReservationsResponse, Error> {
        Ok(ListReservationsResponse {
            reservations: Vec::new(),
        })
    }

    async fn get_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> Result<GetReservationResponse, Error> {
        Err(Error::not_found(format!(
            "Reservation with ID {reservation_id} not found"
        )))
    }

    async fn active_reservation_ids(
        &self,
        _request: ActiveReservationIdsRequest,
    ) -> Result<ActiveReservationIdsResponse, Error> {
        Ok(ActiveReservationIdsResponse {
            reservation_ids: Vec::new(),
        })
    }
}
