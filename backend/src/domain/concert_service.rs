//! Concert domain services.
//!
//! These services implement the concert driving ports over the store ports,
//! validating caller-supplied fields before anything reaches a store and
//! joining reservation counts into the availability read-model.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    ConcertAvailabilityPayload, ConcertCommand, ConcertPayload, ConcertQuery, ConcertRepository,
    ConcertRepositoryError, ConcertWithAvailabilityPayload, CreateConcertRequest,
    CreateConcertResponse, GetConcertAvailabilityResponse, GetConcertResponse,
    ListConcertReservationsResponse, ListConcertsResponse, ReservationRepository,
    ReservationRepositoryError,
};
use crate::domain::{ConcertDraft, ConcertId, Error};

fn map_concert_repository_error(error: ConcertRepositoryError) -> Error {
    match error {
        ConcertRepositoryError::Storage { message } => {
            Error::internal(format!("concert store error: {message}"))
        }
    }
}

fn map_reservation_repository_error(error: ReservationRepositoryError) -> Error {
    Error::internal(format!("reservation store error: {error}"))
}

fn concert_not_found(concert_id: ConcertId) -> Error {
    Error::not_found(format!("Concert with ID {concert_id} not found"))
}

/// Validate caller-supplied concert fields into a store draft.
///
/// The store trusts every draft it receives; blank names and zero capacities
/// are stopped here.
fn validated_draft(request: CreateConcertRequest) -> Result<ConcertDraft, Error> {
    if request.name.trim().is_empty() {
        return Err(Error::invalid_request("Concert name must not be blank")
            .with_details(json!({ "field": "name" })));
    }
    if request.seat < 1 {
        return Err(Error::invalid_request("Seat capacity must be at least 1")
            .with_details(json!({ "field": "seat" })));
    }
    Ok(ConcertDraft {
        name: request.name,
        description: request.description,
        seat: request.seat,
    })
}

/// Concert service implementing the command driving port.
#[derive(Clone)]
pub struct ConcertCommandService<R> {
    concerts: Arc<R>,
}

impl<R> ConcertCommandService<R> {
    /// Create a new command service over the concert store.
    pub fn new(concerts: Arc<R>) -> Self {
        Self { concerts }
    }
}

#[async_trait]
impl<R> ConcertCommand for ConcertCommandService<R>
where
    R: ConcertRepository,
{
    async fn create_concert(
        &self,
        request: CreateConcertRequest,
    ) -> Result<CreateConcertResponse, Error> {
        let draft = validated_draft(request)?;
        let concert = self
            .concerts
            .create(draft)
            .await
            .map_err(map_concert_repository_error)?;

        info!(concert_id = concert.id(), seat = concert.seat(), "concert created");
        Ok(CreateConcertResponse {
            concert: ConcertPayload::from(concert),
        })
    }

    async fn delete_concert(&self, concert_id: ConcertId) -> Result<(), Error> {
        let removed = self
            .concerts
            .remove(concert_id)
            .await
            .map_err(map_concert_repository_error)?;
        if !removed {
            return Err(concert_not_found(concert_id));
        }

        // No cascade: reservations referencing the concert stay untouched.
        info!(concert_id, "concert deleted");
        Ok(())
    }
}

/// Concert service implementing the query driving port.
#[derive(Clone)]
pub struct ConcertQueryService<C, R> {
    concerts: Arc<C>,
    reservations: Arc<R>,
}

impl<C, R> ConcertQueryService<C, R> {
    /// Create a new query service over the concert and reservation stores.
    pub fn new(concerts: Arc<C>, reservations: Arc<R>) -> Self {
        Self {
            concerts,
            reservations,
        }
    }
}

#[async_trait]
impl<C, R> ConcertQuery for ConcertQueryService<C, R>
where
    C: ConcertRepository,
    R: ReservationRepository,
{
    async fn list_concerts(&self) -> Result<ListConcertsResponse, Error> {
        let concerts = self
            .concerts
            .list()
            .await
            .map_err(map_concert_repository_error)?;

        let mut entries = Vec::with_capacity(concerts.len());
        for concert in concerts {
            let reserved_count = self
                .reservations
                .active_count_for_concert(concert.id())
                .await
                .map_err(map_reservation_repository_error)?;
            let availability = concert.availability(reserved_count);
            entries.push(ConcertWithAvailabilityPayload {
                concert: ConcertPayload::from(concert),
                reserved_count,
                available_seats: availability.available_seats(),
            });
        }

        Ok(ListConcertsResponse { concerts: entries })
    }

    async fn get_concert(&self, concert_id: ConcertId) -> Result<GetConcertResponse, Error> {
        let concert = self
            .concerts
            .find(concert_id)
            .await
            .map_err(map_concert_repository_error)?
            .ok_or_else(|| concert_not_found(concert_id))?;

        Ok(GetConcertResponse {
            concert: ConcertPayload::from(concert),
        })
    }

    async fn get_availability(
        &self,
        concert_id: ConcertId,
    ) -> Result<GetConcertAvailabilityResponse, Error> {
        let concert = self
            .concerts
            .find(concert_id)
            .await
            .map_err(map_concert_repository_error)?
            .ok_or_else(|| concert_not_found(concert_id))?;
        let reserved_count = self
            .reservations
            .active_count_for_concert(concert_id)
            .await
            .map_err(map_reservation_repository_error)?;

        Ok(GetConcertAvailabilityResponse {
            availability: ConcertAvailabilityPayload::from(concert.availability(reserved_count)),
        })
    }

    async fn list_concert_reservations(
        &self,
        concert_id: ConcertId,
    ) -> Result<ListConcertReservationsResponse, Error> {
        // Deliberately no existence check: the history view keeps serving
        // rows whose concert was deleted.
        let reservations = self
            .reservations
            .list_for_concert(concert_id)
            .await
            .map_err(map_reservation_repository_error)?;

        Ok(ListConcertReservationsResponse {
            reservations: reservations.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
#[path = "concert_service_tests.rs"]
mod tests;
