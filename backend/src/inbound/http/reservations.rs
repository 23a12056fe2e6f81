//! Reservation HTTP handlers.
//!
//! ```text
//! POST   /api/v1/reservations
//! GET    /api/v1/reservations?userId=
//! GET    /api/v1/reservations/active?userId=&concertId=
//! GET    /api/v1/reservations/{id}
//! DELETE /api/v1/reservations/cancel
//! ```
//!
//! Cancellation is a DELETE with a JSON body naming the caller and the
//! reservation. Register `active_reservation_ids` before `get_reservation`
//! so the literal segment wins over the id pattern.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{ConcertId, Error, ReservationId};
use crate::domain::ports::{
    CancelReservationRequest, CreateReservationRequest, ListReservationsRequest,
    ReservationPayload,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::MessageBody;
use crate::inbound::http::state::HttpState;

/// Query parameters for listing reservations.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListReservationsParams {
    /// When set, only this user's reservations are returned.
    pub user_id: Option<String>,
}

/// Query parameters for the active reservation lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ActiveReservationParams {
    /// Caller-supplied user identifier.
    pub user_id: String,
    /// Concert to check.
    pub concert_id: ConcertId,
}

/// Reserve a seat for a user.
#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationPayload),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Concert not found", body = Error),
        (status = 409, description = "Duplicate reservation or no seats available", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "createReservation"
)]
#[post("/reservations")]
pub async fn create_reservation(
    state: web::Data<HttpState>,
    payload: web::Json<CreateReservationRequest>,
) -> ApiResult<HttpResponse> {
    let response = state
        .reservations
        .create_reservation(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(response.reservation))
}

/// List reservations, optionally filtered to one user.
#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    params(ListReservationsParams),
    responses(
        (status = 200, description = "Reservations in creation order", body = [ReservationPayload])
    ),
    tags = ["reservations"],
    operation_id = "listReservations"
)]
#[get("/reservations")]
pub async fn list_reservations(
    state: web::Data<HttpState>,
    params: web::Query<ListReservationsParams>,
) -> ApiResult<web::Json<Vec<ReservationPayload>>> {
    let response = state
        .reservations_query
        .list_reservations(ListReservationsRequest {
            user_id: params.into_inner().user_id,
        })
        .await?;
    Ok(web::Json(response.reservations))
}

/// Ids of the user's active reservations for a concert.
///
/// At most one id under the one-claim-per-user rule; empty after a cancel.
#[utoipa::path(
    get,
    path = "/api/v1/reservations/active",
    params(ActiveReservationParams),
    responses(
        (status = 200, description = "Active reservation ids", body = [i64]),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "activeReservationIds"
)]
#[get("/reservations/active")]
pub async fn active_reservation_ids(
    state: web::Data<HttpState>,
    params: web::Query<ActiveReservationParams>,
) -> ApiResult<web::Json<Vec<ReservationId>>> {
    let params = params.into_inner();
    let response = state
        .reservations_query
        .active_reservation_ids(crate::domain::ports::ActiveReservationIdsRequest {
            user_id: params.user_id,
            concert_id: params.concert_id,
        })
        .await?;
    Ok(web::Json(response.reservation_ids))
}

/// Fetch a single reservation.
#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    params(("id" = i64, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Reservation", body = ReservationPayload),
        (status = 404, description = "Reservation not found", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "getReservation"
)]
#[get("/reservations/{id}")]
pub async fn get_reservation(
    state: web::Data<HttpState>,
    path: web::Path<ReservationId>,
) -> ApiResult<web::Json<ReservationPayload>> {
    let response = state
        .reservations_query
        .get_reservation(path.into_inner())
        .await?;
    Ok(web::Json(response.reservation))
}

/// Cancel a reservation on behalf of its owner.
#[utoipa::path(
    delete,
    path = "/api/v1/reservations/cancel",
    request_body = CancelReservationRequest,
    responses(
        (status = 200, description = "Reservation cancelled", body = MessageBody),
        (status = 403, description = "Not the owner", body = Error),
        (status = 404, description = "Reservation not found", body = Error),
        (status = 409, description = "Already cancelled", body = Error)
    ),
    tags = ["reservations"],
    operation_id = "cancelReservation"
)]
#[delete("/reservations/cancel")]
pub async fn cancel_reservation(
    state: web::Data<HttpState>,
    payload: web::Json<CancelReservationRequest>,
) -> ApiResult<web::Json<MessageBody>> {
    state
        .reservations
        .cancel_reservation(payload.into_inner())
        .await?;
    Ok(web::Json(MessageBody::new(
        "Reservation cancelled successfully",
    )))
}

#[cfg(test)]
#[path = "reservations_tests.rs"]
mod tests;
