//! Domain entities, ports, and services.
//!
//! The domain layer is transport agnostic: inbound adapters call the driving
//! ports, outbound adapters implement the driven ports, and nothing here
//! touches HTTP or storage machinery directly.

mod concert;
mod concert_service;
mod error;
pub mod ports;
mod reservation;
mod reservation_service;
mod user;

pub use self::concert::{Concert, ConcertAvailability, ConcertDraft, ConcertId};
pub use self::concert_service::{ConcertCommandService, ConcertQueryService};
pub use self::error::{Error, ErrorCode};
pub use self::reservation::{
    AlreadyCancelledError, Reservation, ReservationId, ReservationStatus,
};
pub use self::reservation_service::{ReservationCommandService, ReservationQueryService};
pub use self::user::{UserId, UserIdValidationError};
