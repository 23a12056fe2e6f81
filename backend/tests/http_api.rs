//! Full-stack HTTP coverage: handlers, error mapping, and trace middleware
//! over real in-memory stores.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use backend::Trace;
use backend::domain::ports::{Clock, ConcertRepository, SystemClock};
use backend::domain::{
    ConcertCommandService, ConcertQueryService, ReservationCommandService,
    ReservationQueryService,
};
use backend::inbound::http::concerts::{
    create_concert, delete_concert, get_concert, get_concert_availability, list_concert_reservations,
    list_concerts,
};
use backend::inbound::http::reservations::{
    active_reservation_ids, cancel_reservation, create_reservation, get_reservation,
    list_reservations,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryConcertStore, InMemoryReservationStore};

fn live_state() -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let concert_store = Arc::new(InMemoryConcertStore::new(clock.clone()));
    let reservation_store = Arc::new(InMemoryReservationStore::new(
        concert_store.clone() as Arc<dyn ConcertRepository>,
        clock,
    ));
    HttpState::new(
        Arc::new(ConcertCommandService::new(concert_store.clone())),
        Arc::new(ConcertQueryService::new(
            concert_store,
            reservation_store.clone(),
        )),
        Arc::new(ReservationCommandService::new(reservation_store.clone())),
        Arc::new(ReservationQueryService::new(reservation_store)),
    )
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .wrap(Trace)
                .service(
                    web::scope("/api/v1")
                        .service(create_concert)
                        .service(list_concerts)
                        .service(get_concert)
                        .service(get_concert_availability)
                        .service(list_concert_reservations)
                        .service(delete_concert)
                        .service(create_reservation)
                        .service(list_reservations)
                        .service(active_reservation_ids)
                        .service(get_reservation)
                        .service(cancel_reservation),
                ),
        )
        .await
    };
}

async fn post_json<S>(app: &S, uri: &str, body: Value) -> actix_web::dev::ServiceResponse
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    test::call_service(app, test::TestRequest::post().uri(uri).set_json(body).to_request()).await
}

async fn create_sample_concert<S>(app: &S, seat: u32) -> i64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let res = post_json(
        app,
        "/api/v1/concerts",
        json!({ "name": "Night Show", "description": "Main hall", "seat": seat }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    body["id"].as_i64().expect("concert id")
}

#[actix_web::test]
async fn full_reservation_flow_over_http() {
    let app = init_app!(live_state());
    let concert_id = create_sample_concert(&app, 2).await;

    // Reserve a seat.
    let res = post_json(
        &app,
        "/api/v1/reservations",
        json!({ "userId": "alice", "concertId": concert_id }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let reservation: Value = test::read_body_json(res).await;
    assert_eq!(reservation["status"], json!("reserve"));
    let reservation_id = reservation["id"].as_i64().expect("reservation id");

    // The availability read-model reflects the claim.
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/concerts/{concert_id}/availability"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let availability: Value = test::read_body_json(res).await;
    assert_eq!(availability["reservedCount"], json!(1));
    assert_eq!(availability["availableSeats"], json!(1));

    // Cancel and observe the status flip.
    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/reservations/cancel")
            .set_json(json!({ "userId": "alice", "reservationId": reservation_id }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Reservation cancelled successfully"));

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/reservations/{reservation_id}"))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], json!("cancel"));
}

#[actix_web::test]
async fn admission_rejections_map_to_conflict_statuses() {
    let app = init_app!(live_state());
    let concert_id = create_sample_concert(&app, 1).await;

    let res = post_json(
        &app,
        "/api/v1/reservations",
        json!({ "userId": "alice", "concertId": concert_id }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Same user again: conflict wins over capacity.
    let res = post_json(
        &app,
        "/api/v1/reservations",
        json!({ "userId": "alice", "concertId": concert_id }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], json!("conflict"));

    // A different user finds the concert full.
    let res = post_json(
        &app,
        "/api/v1/reservations",
        json!({ "userId": "bob", "concertId": concert_id }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], json!("capacity_exceeded"));

    // An unknown concert is a 404.
    let res = post_json(
        &app,
        "/api/v1/reservations",
        json!({ "userId": "bob", "concertId": 999 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn cancel_rejections_map_to_403_and_409() {
    let app = init_app!(live_state());
    let concert_id = create_sample_concert(&app, 1).await;

    let res = post_json(
        &app,
        "/api/v1/reservations",
        json!({ "userId": "alice", "concertId": concert_id }),
    )
    .await;
    let reservation: Value = test::read_body_json(res).await;
    let reservation_id = reservation["id"].as_i64().expect("reservation id");

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/reservations/cancel")
            .set_json(json!({ "userId": "mallory", "reservationId": reservation_id }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/reservations/cancel")
            .set_json(json!({ "userId": "alice", "reservationId": reservation_id }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/reservations/cancel")
            .set_json(json!({ "userId": "alice", "reservationId": reservation_id }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], json!("invalid_state"));
}

#[actix_web::test]
async fn listing_filters_by_user_and_serves_stats() {
    let app = init_app!(live_state());
    let concert_id = create_sample_concert(&app, 3).await;

    for user in ["alice", "bob"] {
        let res = post_json(
            &app,
            "/api/v1/reservations",
            json!({ "userId": user, "concertId": concert_id }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/reservations?userId=alice")
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["userId"], json!("alice"));

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/concerts").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    let concerts = body.as_array().expect("array body");
    assert_eq!(concerts.len(), 1);
    assert_eq!(concerts[0]["reservedCount"], json!(2));
    assert_eq!(concerts[0]["availableSeats"], json!(1));

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!(
                "/api/v1/reservations/active?userId=alice&concertId={concert_id}"
            ))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.as_array().expect("array body").len(), 1);
}

#[actix_web::test]
async fn deleting_a_concert_orphans_but_keeps_history() {
    let app = init_app!(live_state());
    let concert_id = create_sample_concert(&app, 2).await;

    let res = post_json(
        &app,
        "/api/v1/reservations",
        json!({ "userId": "alice", "concertId": concert_id }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/concerts/{concert_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Concert deleted successfully"));

    // The concert itself is gone.
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/concerts/{concert_id}/availability"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Its reservation history is not.
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/concerts/{concert_id}/reservations"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.as_array().expect("array body").len(), 1);
}

#[actix_web::test]
async fn responses_carry_a_trace_id_header() {
    let app = init_app!(live_state());

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/concerts").to_request(),
    )
    .await;
    assert!(res.headers().contains_key("trace-id"));

    // Error responses echo the id in the payload as well.
    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/concerts/999").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get("trace-id")
        .expect("trace id header")
        .to_str()
        .expect("header is ascii")
        .to_owned();
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], json!(header));
}
