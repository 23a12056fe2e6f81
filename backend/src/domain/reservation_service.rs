//! Reservation domain services.
//!
//! The admission checks themselves run inside the reservation store's
//! critical section; these services validate the caller-supplied identifier
//! and translate store outcomes into the API error taxonomy.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    ActiveReservationIdsRequest, ActiveReservationIdsResponse, CancelReservationRequest,
    CreateReservationRequest, CreateReservationResponse, GetReservationResponse,
    ListReservationsRequest, ListReservationsResponse, ReservationCommand, ReservationPayload,
    ReservationQuery, ReservationRepository, ReservationRepositoryError,
};
use crate::domain::{Error, ReservationId, UserId};

fn map_repository_error(error: ReservationRepositoryError) -> Error {
    match error {
        ReservationRepositoryError::ConcertNotFound { concert_id } => {
            Error::not_found(format!("Concert with ID {concert_id} not found"))
        }
        ReservationRepositoryError::AlreadyReserved { .. } => {
            Error::conflict("User already has a reservation for this concert")
        }
        ReservationRepositoryError::SoldOut { .. } => {
            Error::capacity_exceeded("No seats available for this concert")
        }
        ReservationRepositoryError::ReservationNotFound { reservation_id } => {
            Error::not_found(format!("Reservation with ID {reservation_id} not found"))
        }
        ReservationRepositoryError::NotOwner { .. } => {
            Error::forbidden("You can only cancel your own reservations")
        }
        ReservationRepositoryError::AlreadyCancelled { .. } => {
            Error::invalid_state("Reservation is already cancelled")
        }
        ReservationRepositoryError::Storage { message } => {
            Error::internal(format!("reservation store error: {message}"))
        }
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        Error::invalid_request(format!("invalid userId: {err}"))
            .with_details(json!({ "field": "userId" }))
    })
}

/// Reservation service implementing the command driving port.
#[derive(Clone)]
pub struct ReservationCommandService<R> {
    reservations: Arc<R>,
}

impl<R> ReservationCommandService<R> {
    /// Create a new command service over the reservation store.
    pub fn new(reservations: Arc<R>) -> Self {
        Self { reservations }
    }
}

#[async_trait]
impl<R> ReservationCommand for ReservationCommandService<R>
where
    R: ReservationRepository,
{
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<CreateReservationResponse, Error> {
        let user_id = parse_user_id(&request.user_id)?;
        let reservation = self
            .reservations
            .create(&user_id, request.concert_id)
            .await
            .map_err(map_repository_error)?;

        info!(
            reservation_id = reservation.id(),
            concert_id = reservation.concert_id(),
            user_id = %user_id,
            "reservation created"
        );
        Ok(CreateReservationResponse {
            reservation: ReservationPayload::from(reservation),
        })
    }

    async fn cancel_reservation(&self, request: CancelReservationRequest) -> Result<(), Error> {
        let user_id = parse_user_id(&request.user_id)?;
        let reservation = self
            .reservations
            .cancel(&user_id, request.reservation_id)
            .await
            .map_err(map_repository_error)?;

        info!(
            reservation_id = reservation.id(),
            concert_id = reservation.concert_id(),
            user_id = %user_id,
            "reservation cancelled"
        );
        Ok(())
    }
}

/// Reservation service implementing the query driving port.
#[derive(Clone)]
pub struct ReservationQueryService<R> {
    reservations: Arc<R>,
}

impl<R> ReservationQueryService<R> {
    /// Create a new query service over the reservation store.
    pub fn new(reservations: Arc<R>) -> Self {
        Self { reservations }
    }
}

#[async_trait]
impl<R> ReservationQuery for ReservationQueryService<R>
where
    R: ReservationRepository,
{
    async fn list_reservations(
        &self,
        request: ListReservationsRequest,
    ) -> Result<ListReservationsResponse, Error> {
        let reservations = match request.user_id {
            Some(raw) => {
                let user_id = parse_user_id(&raw)?;
                self.reservations
                    .list_for_user(&user_id)
                    .await
                    .map_err(map_repository_error)?
            }
            None => self
                .reservations
                .list()
                .await
                .map_err(map_repository_error)?,
        };

        Ok(ListReservationsResponse {
            reservations: reservations.into_iter().map(Into::into).collect(),
        })
    }

    async fn get_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> Result<GetReservationResponse, Error> {
        let reservation = self
            .reservations
            .find(reservation_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("Reservation with ID {reservation_id} not found"))
            })?;

        Ok(GetReservationResponse {
            reservation: ReservationPayload::from(reservation),
        })
    }

    async fn active_reservation_ids(
        &self,
        request: ActiveReservationIdsRequest,
    ) -> Result<ActiveReservationIdsResponse, Error> {
        let user_id = parse_user_id(&request.user_id)?;
        let reservation_ids = self
            .reservations
            .active_ids_for_user_and_concert(&user_id, request.concert_id)
            .await
            .map_err(map_repository_error)?;

        Ok(ActiveReservationIdsResponse { reservation_ids })
    }
}

#[cfg(test)]
#[path = "reservation_service_tests.rs"]
mod tests;
