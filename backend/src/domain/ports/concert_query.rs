//! Driving port for concert reads and the availability read-model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ConcertAvailability, ConcertId, Error};

use super::concert_command::ConcertPayload;
use super::reservation_command::ReservationPayload;

/// Seat availability for one concert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConcertAvailabilityPayload {
    /// The concert this availability belongs to.
    pub concert_id: ConcertId,
    /// Total seat capacity.
    pub seat: u32,
    /// Count of active reservations.
    pub reserved_count: usize,
    /// Remaining seats, floored at zero.
    pub available_seats: u32,
}

impl From<ConcertAvailability> for ConcertAvailabilityPayload {
    fn from(value: ConcertAvailability) -> Self {
        Self {
            concert_id: value.concert_id(),
            seat: value.seat(),
            reserved_count: value.reserved_count(),
            available_seats: value.available_seats(),
        }
    }
}

/// A concert joined with its current availability, as served by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConcertWithAvailabilityPayload {
    /// The concert record.
    #[serde(flatten)]
    pub concert: ConcertPayload,
    /// Count of active reservations.
    pub reserved_count: usize,
    /// Remaining seats, floored at zero.
    pub available_seats: u32,
}

/// Response from listing concerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListConcertsResponse {
    /// Concerts in creation order, each with availability.
    pub concerts: Vec<ConcertWithAvailabilityPayload>,
}

/// Response from fetching one concert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConcertResponse {
    /// The requested concert.
    pub concert: ConcertPayload,
}

/// Response from the availability read-model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConcertAvailabilityResponse {
    /// Availability for the requested concert.
    pub availability: ConcertAvailabilityPayload,
}

/// Response from the concert reservation history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListConcertReservationsResponse {
    /// Reservations of any status for the concert, in creation order.
    pub reservations: Vec<ReservationPayload>,
}

/// Driving port for concert read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConcertQuery: Send + Sync {
    /// List all concerts with their availability, in creation order.
    async fn list_concerts(&self) -> Result<ListConcertsResponse, Error>;

    /// Fetch a single concert.
    async fn get_concert(&self, concert_id: ConcertId) -> Result<GetConcertResponse, Error>;

    /// Fetch the availability read-model for a concert.
    async fn get_availability(
        &self,
        concert_id: ConcertId,
    ) -> Result<GetConcertAvailabilityResponse, Error>;

    /// List a concert's reservation history (any status).
    ///
    /// Serves rows even when the concert itself was deleted, so audit views
    /// keep working for orphaned reservations.
    async fn list_concert_reservations(
        &self,
        concert_id: ConcertId,
    ) -> Result<ListConcertReservationsResponse, Error>;
}

/// Fixture query implementation for tests that do not need storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureConcertQuery;

#[async_trait]
impl ConcertQuery for FixtureConcertQuery {
    async fn list_concerts(&self) -> Result<ListConcertsResponse, Error> {
        Ok(ListConcertsResponse {
            concerts: Vec::new(),
        })
    }

    async fn get_concert(&self, concert_id: ConcertId) -> Result<GetConcertResponse, Error> {
        Err(Error::not_found(format!(
            "Concert with ID {concert_id} not found"
        )))
    }

    async fn get_availability(
        &self,
        concert_id: ConcertId,
    ) -> Result<GetConcertAvailabilityResponse, Error> {
        Err(Error::not_found(format!(
            "Concert with ID {concert_id} not found"
        )))
    }

    async fn list_concert_reservations(
        &self,
        _concert_id: ConcertId,
    ) -> Result<ListConcertReservationsResponse, Error> {
        Ok(ListConcertReservationsResponse {
            reservations: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::Utc;
    use rstest::rstest;

    use super::*;
    use crate::domain::{Concert, ConcertDraft, ErrorCode};

    #[rstest]
    fn availability_payload_mirrors_read_model() {
        let concert = Concert::new(
            2,
            ConcertDraft {
                name: "Jazz Brunch".into(),
                description: "Trio".into(),
                seat: 3,
            },
            Utc::now(),
        );

        let payload = ConcertAvailabilityPayload::from(concert.availability(1));

        assert_eq!(payload.concert_id, 2);
        assert_eq!(payload.seat, 3);
        assert_eq!(payload.reserved_count, 1);
        assert_eq!(payload.available_seats, 2);
    }

    #[rstest]
    fn listing_flattens_concert_fields() {
        let now = Utc::now();
        let entry = ConcertWithAvailabilityPayload {
            concert: ConcertPayload {
                id: 1,
                name: "n".into(),
                description: "d".into(),
                seat: 2,
                created_at: now,
                updated_at: now,
            },
            reserved_count: 1,
            available_seats: 1,
        };
        let json = serde_json::to_value(&entry).expect("serializes");
        // Concert fields and stats sit side by side, not nested.
        assert!(json.get("name").is_some());
        assert!(json.get("reservedCount").is_some());
        assert!(json.get("availableSeats").is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_get_reports_not_found() {
        let query = FixtureConcertQuery;
        let err = query.get_concert(7).await.expect_err("fixture rejects");
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
