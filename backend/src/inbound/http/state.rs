//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without real
//! stores.

use std::sync::Arc;

use crate::domain::ports::{
    ConcertCommand, ConcertQuery, FixtureConcertCommand, FixtureConcertQuery,
    FixtureReservationCommand, FixtureReservationQuery, ReservationCommand, ReservationQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Concert write operations.
    pub concerts: Arc<dyn ConcertCommand>,
    /// Concert read operations and the availability read-model.
    pub concerts_query: Arc<dyn ConcertQuery>,
    /// Reservation write operations (admission and cancellation).
    pub reservations: Arc<dyn ReservationCommand>,
    /// Reservation read operations.
    pub reservations_query: Arc<dyn ReservationQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(
        concerts: Arc<dyn ConcertCommand>,
        concerts_query: Arc<dyn ConcertQuery>,
        reservations: Arc<dyn ReservationCommand>,
        reservations_query: Arc<dyn ReservationQuery>,
    ) -> Self {
        Self {
            concerts,
            concerts_query,
            reservations,
            reservations_query,
        }
    }
}

impl Default for HttpState {
    /// Fixture-backed state for tests that wire only some ports.
    fn default() -> Self {
        Self {
            concerts: Arc::new(FixtureConcertCommand),
            concerts_query: Arc::new(FixtureConcertQuery),
            reservations: Arc::new(FixtureReservationCommand),
            reservations_query: Arc::new(FixtureReservationQuery),
        }
    }
}
