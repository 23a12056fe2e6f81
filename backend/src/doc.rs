//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API: all concert, reservation, and health
//! endpoints plus the payload and error schemas they reference. The generated
//! specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::ports::{
    CancelReservationRequest, ConcertAvailabilityPayload, ConcertPayload,
    ConcertWithAvailabilityPayload, CreateConcertRequest, CreateReservationRequest,
    ReservationPayload,
};
use crate::domain::{Error, ErrorCode, ReservationStatus};
use crate::inbound::http::schemas::MessageBody;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Concert reservation API",
        description = "Seat reservation service: concert administration, \
                       seat admission control, and cancellation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::concerts::create_concert,
        crate::inbound::http::concerts::list_concerts,
        crate::inbound::http::concerts::get_concert,
        crate::inbound::http::concerts::get_concert_availability,
        crate::inbound::http::concerts::list_concert_reservations,
        crate::inbound::http::concerts::delete_concert,
        crate::inbound::http::reservations::create_reservation,
        crate::inbound::http::reservations::list_reservations,
        crate::inbound::http::reservations::active_reservation_ids,
        crate::inbound::http::reservations::get_reservation,
        crate::inbound::http::reservations::cancel_reservation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ConcertPayload,
        ConcertAvailabilityPayload,
        ConcertWithAvailabilityPayload,
        CreateConcertRequest,
        ReservationPayload,
        ReservationStatus,
        CreateReservationRequest,
        CancelReservationRequest,
        MessageBody,
        Error,
        ErrorCode
    )),
    tags(
        (name = "concerts", description = "Concert administration and availability"),
        (name = "reservations", description = "Seat reservation and cancellation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
