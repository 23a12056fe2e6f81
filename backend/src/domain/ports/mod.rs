//! Domain ports.
//!
//! Driven ports (`ConcertRepository`, `ReservationRepository`, `Clock`) are
//! implemented by outbound adapters; driving ports (`ConcertCommand`,
//! `ConcertQuery`, `ReservationCommand`, `ReservationQuery`) are implemented
//! by domain services and consumed by inbound adapters. Fixture
//! implementations exist for every port so tests can wire only what they
//! exercise.

mod clock;
mod concert_command;
mod concert_query;
mod concert_repository;
mod macros;
mod reservation_command;
mod reservation_query;
mod reservation_repository;

pub(crate) use macros::define_port_error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use concert_command::{
    ConcertCommand, ConcertPayload, CreateConcertRequest, CreateConcertResponse,
    FixtureConcertCommand,
};
pub use concert_query::{
    ConcertAvailabilityPayload, ConcertQuery, ConcertWithAvailabilityPayload, FixtureConcertQuery,
    GetConcertAvailabilityResponse, GetConcertResponse, ListConcertReservationsResponse,
    ListConcertsResponse,
};
pub use concert_repository::{
    ConcertRepository, ConcertRepositoryError, FixtureConcertRepository,
};
pub use reservation_command::{
    CancelReservationRequest, CreateReservationRequest, CreateReservationResponse,
    FixtureReservationCommand, ReservationCommand, ReservationPayload,
};
pub use reservation_query::{
    ActiveReservationIdsRequest, ActiveReservationIdsResponse, FixtureReservationQuery,
    GetReservationResponse, ListReservationsRequest, ListReservationsResponse, ReservationQuery,
};
pub use reservation_repository::{
    FixtureReservationRepository, ReservationRepository, ReservationRepositoryError,
};

#[cfg(test)]
pub use clock::MockClock;
#[cfg(test)]
pub use concert_command::MockConcertCommand;
#[cfg(test)]
pub use concert_query::MockConcertQuery;
#[cfg(test)]
pub use concert_repository::MockConcertRepository;
#[cfg(test)]
pub use reservation_command::MockReservationCommand;
#[cfg(test)]
pub use reservation_query::MockReservationQuery;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
