//! Driving port for concert mutations.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Concert, ConcertId, Error};

/// Serializable concert representation returned by driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConcertPayload {
    /// Store-assigned identifier.
    pub id: ConcertId,
    /// Concert name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Total seat capacity.
    pub seat: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp; equals `created_at` (concerts are not editable).
    pub updated_at: DateTime<Utc>,
}

impl From<Concert> for ConcertPayload {
    fn from(value: Concert) -> Self {
        Self {
            id: value.id(),
            name: value.name().to_owned(),
            description: value.description().to_owned(),
            seat: value.seat(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
        }
    }
}

/// Request to create a concert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConcertRequest {
    /// Concert name; must not be blank.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Total seat capacity; must be at least 1.
    pub seat: u32,
}

/// Response from creating a concert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConcertResponse {
    /// The created concert.
    pub concert: ConcertPayload,
}

/// Driving port for concert write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConcertCommand: Send + Sync {
    /// Create a concert after validating the caller-supplied fields.
    async fn create_concert(
        &self,
        request: CreateConcertRequest,
    ) -> Result<CreateConcertResponse, Error>;

    /// Hard-delete a concert.
    ///
    /// Existing reservations referencing the concert are neither blocked nor
    /// cascaded; their dangling `concertId` is an accepted state.
    async fn delete_concert(&self, concert_id: ConcertId) -> Result<(), Error>;
}

/// Fixture command implementation for tests that do not need storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureConcertCommand;

#[async_trait]
impl ConcertCommand for FixtureConcertCommand {
    async fn create_concert(
        &self,
        request: CreateConcertRequest,
    ) -> Result<CreateConcertResponse, Error> {
        let epoch = Utc.timestamp_opt(0, 0).single().unwrap_or_default();
        Ok(CreateConcertResponse {
            concert: ConcertPayload {
                id: 1,
                name: request.name,
                description: request.description,
                seat: request.seat,
                created_at: epoch,
                updated_at: epoch,
            },
        })
    }

    async fn delete_concert(&self, _concert_id: ConcertId) -> Result<(), Error> {
        Ok(())
    }
}
