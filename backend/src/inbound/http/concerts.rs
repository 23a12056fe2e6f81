//! Concert HTTP handlers.
//!
//! ```text
//! POST   /api/v1/concerts
//! GET    /api/v1/concerts
//! GET    /api/v1/concerts/{id}
//! GET    /api/v1/concerts/{id}/availability
//! GET    /api/v1/concerts/{id}/reservations
//! DELETE /api/v1/concerts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{ConcertId, Error};
use crate::domain::ports::{
    ConcertAvailabilityPayload, ConcertPayload, ConcertWithAvailabilityPayload,
    CreateConcertRequest, ReservationPayload,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::MessageBody;
use crate::inbound::http::state::HttpState;

/// Create a concert.
#[utoipa::path(
    post,
    path = "/api/v1/concerts",
    request_body = CreateConcertRequest,
    responses(
        (status = 201, description = "Concert created", body = ConcertPayload),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["concerts"],
    operation_id = "createConcert"
)]
#[post("/concerts")]
pub async fn create_concert(
    state: web::Data<HttpState>,
    payload: web::Json<CreateConcertRequest>,
) -> ApiResult<HttpResponse> {
    let response = state.concerts.create_concert(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response.concert))
}

/// List concerts with their current availability.
#[utoipa::path(
    get,
    path = "/api/v1/concerts",
    responses(
        (status = 200, description = "Concerts in creation order", body = [ConcertWithAvailabilityPayload])
    ),
    tags = ["concerts"],
    operation_id = "listConcerts"
)]
#[get("/concerts")]
pub async fn list_concerts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ConcertWithAvailabilityPayload>>> {
    let response = state.concerts_query.list_concerts().await?;
    Ok(web::Json(response.concerts))
}

/// Fetch a single concert.
#[utoipa::path(
    get,
    path = "/api/v1/concerts/{id}",
    params(("id" = i64, Path, description = "Concert id")),
    responses(
        (status = 200, description = "Concert", body = ConcertPayload),
        (status = 404, description = "Concert not found", body = Error)
    ),
    tags = ["concerts"],
    operation_id = "getConcert"
)]
#[get("/concerts/{id}")]
pub async fn get_concert(
    state: web::Data<HttpState>,
    path: web::Path<ConcertId>,
) -> ApiResult<web::Json<ConcertPayload>> {
    let response = state.concerts_query.get_concert(path.into_inner()).await?;
    Ok(web::Json(response.concert))
}

/// Fetch the availability read-model for a concert.
#[utoipa::path(
    get,
    path = "/api/v1/concerts/{id}/availability",
    params(("id" = i64, Path, description = "Concert id")),
    responses(
        (status = 200, description = "Seat availability", body = ConcertAvailabilityPayload),
        (status = 404, description = "Concert not found", body = Error)
    ),
    tags = ["concerts"],
    operation_id = "getConcertAvailability"
)]
#[get("/concerts/{id}/availability")]
pub async fn get_concert_availability(
    state: web::Data<HttpState>,
    path: web::Path<ConcertId>,
) -> ApiResult<web::Json<ConcertAvailabilityPayload>> {
    let response = state
        .concerts_query
        .get_availability(path.into_inner())
        .await?;
    Ok(web::Json(response.availability))
}

/// List a concert's reservation history (any status).
///
/// Serves rows even for a deleted concert so audit views keep working.
#[utoipa::path(
    get,
    path = "/api/v1/concerts/{id}/reservations",
    params(("id" = i64, Path, description = "Concert id")),
    responses(
        (status = 200, description = "Reservations in creation order", body = [ReservationPayload])
    ),
    tags = ["concerts"],
    operation_id = "listConcertReservations"
)]
#[get("/concerts/{id}/reservations")]
pub async fn list_concert_reservations(
    state: web::Data<HttpState>,
    path: web::Path<ConcertId>,
) -> ApiResult<web::Json<Vec<ReservationPayload>>> {
    let response = state
        .concerts_query
        .list_concert_reservations(path.into_inner())
        .await?;
    Ok(web::Json(response.reservations))
}

/// Hard-delete a concert.
///
/// Reservations referencing the concert are left untouched.
#[utoipa::path(
    delete,
    path = "/api/v1/concerts/{id}",
    params(("id" = i64, Path, description = "Concert id")),
    responses(
        (status = 200, description = "Concert deleted", body = MessageBody),
        (status = 404, description = "Concert not found", body = Error)
    ),
    tags = ["concerts"],
    operation_id = "deleteConcert"
)]
#[delete("/concerts/{id}")]
pub async fn delete_concert(
    state: web::Data<HttpState>,
    path: web::Path<ConcertId>,
) -> ApiResult<web::Json<MessageBody>> {
    state.concerts.delete_concert(path.into_inner()).await?;
    Ok(web::Json(MessageBody::new("Concert deleted successfully")))
}

#[cfg(test)]
#[path = "concerts_tests.rs"]
mod tests;
