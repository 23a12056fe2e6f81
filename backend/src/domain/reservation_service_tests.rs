//! Regression coverage for the reservation services.

use std::sync::Arc;

use chrono::Utc;
use rstest::rstest;

use super::*;
use crate::domain::ports::MockReservationRepository;
use crate::domain::{ErrorCode, Reservation};

fn owner() -> UserId {
    UserId::new("alice").expect("valid user id")
}

fn reservation(id: ReservationId, concert_id: i64) -> Reservation {
    Reservation::new(id, owner(), concert_id, Utc::now())
}

fn create_request(user_id: &str, concert_id: i64) -> CreateReservationRequest {
    CreateReservationRequest {
        user_id: user_id.into(),
        concert_id,
    }
}

fn cancel_request(user_id: &str, reservation_id: ReservationId) -> CancelReservationRequest {
    CancelReservationRequest {
        user_id: user_id.into(),
        reservation_id,
    }
}

#[rstest]
#[tokio::test]
async fn create_returns_the_stored_reservation() {
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_create()
        .withf(|user_id, concert_id| user_id.as_str() == "alice" && *concert_id == 3)
        .times(1)
        .returning(|user_id, concert_id| Ok(Reservation::new(1, user_id.clone(), concert_id, Utc::now())));

    let service = ReservationCommandService::new(Arc::new(reservations));
    let response = service
        .create_reservation(create_request("alice", 3))
        .await
        .expect("create succeeds");

    assert_eq!(response.reservation.id, 1);
    assert_eq!(response.reservation.user_id, "alice");
    assert_eq!(response.reservation.concert_id, 3);
}

#[rstest]
#[tokio::test]
async fn create_rejects_blank_user_id_before_the_store() {
    // No expectations: the store must never be reached.
    let reservations = MockReservationRepository::new();

    let service = ReservationCommandService::new(Arc::new(reservations));
    let err = service
        .create_reservation(create_request("   ", 3))
        .await
        .expect_err("validation rejects");

    assert_eq!(err.code, ErrorCode::InvalidRequest);
}

#[rstest]
#[case::missing_concert(
    ReservationRepositoryError::concert_not_found(7_i64),
    ErrorCode::NotFound,
    "Concert with ID 7 not found"
)]
#[case::duplicate(
    ReservationRepositoryError::already_reserved(7_i64),
    ErrorCode::Conflict,
    "User already has a reservation for this concert"
)]
#[case::full(
    ReservationRepositoryError::sold_out(7_i64),
    ErrorCode::CapacityExceeded,
    "No seats available for this concert"
)]
#[tokio::test]
async fn create_maps_admission_outcomes(
    #[case] outcome: ReservationRepositoryError,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let mut reservations = MockReservationRepository::new();
    let returned = outcome.clone();
    reservations
        .expect_create()
        .returning(move |_, _| Err(returned.clone()));

    let service = ReservationCommandService::new(Arc::new(reservations));
    let err = service
        .create_reservation(create_request("alice", 7))
        .await
        .expect_err("admission rejects");

    assert_eq!(err.code, code);
    assert_eq!(err.message, message);
}

#[rstest]
#[case::missing(
    ReservationRepositoryError::reservation_not_found(9_i64),
    ErrorCode::NotFound,
    "Reservation with ID 9 not found"
)]
#[case::foreign(
    ReservationRepositoryError::not_owner(9_i64),
    ErrorCode::Forbidden,
    "You can only cancel your own reservations"
)]
#[case::repeated(
    ReservationRepositoryError::already_cancelled(9_i64),
    ErrorCode::InvalidState,
    "Reservation is already cancelled"
)]
#[tokio::test]
async fn cancel_maps_store_outcomes(
    #[case] outcome: ReservationRepositoryError,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let mut reservations = MockReservationRepository::new();
    let returned = outcome.clone();
    reservations
        .expect_cancel()
        .returning(move |_, _| Err(returned.clone()));

    let service = ReservationCommandService::new(Arc::new(reservations));
    let err = service
        .cancel_reservation(cancel_request("mallory", 9))
        .await
        .expect_err("cancel rejects");

    assert_eq!(err.code, code);
    assert_eq!(err.message, message);
}

#[rstest]
#[tokio::test]
async fn cancel_succeeds_for_the_owner() {
    let mut reservations = MockReservationRepository::new();
    reservations.expect_cancel().times(1).returning(|_, id| {
        let mut cancelled = reservation(id, 3);
        cancelled.cancel(Utc::now()).expect("transition allowed");
        Ok(cancelled)
    });

    let service = ReservationCommandService::new(Arc::new(reservations));
    service
        .cancel_reservation(cancel_request("alice", 5))
        .await
        .expect("cancel succeeds");
}

#[rstest]
#[tokio::test]
async fn list_without_filter_returns_every_reservation() {
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_list()
        .times(1)
        .returning(|| Ok(vec![reservation(1, 3), reservation(2, 4)]));

    let service = ReservationQueryService::new(Arc::new(reservations));
    let response = service
        .list_reservations(ListReservationsRequest::default())
        .await
        .expect("list succeeds");

    assert_eq!(response.reservations.len(), 2);
}

#[rstest]
#[tokio::test]
async fn list_with_filter_narrows_to_the_user() {
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_list_for_user()
        .withf(|user_id| user_id.as_str() == "alice")
        .times(1)
        .returning(|_| Ok(vec![reservation(1, 3)]));

    let service = ReservationQueryService::new(Arc::new(reservations));
    let response = service
        .list_reservations(ListReservationsRequest {
            user_id: Some("alice".into()),
        })
        .await
        .expect("list succeeds");

    assert_eq!(response.reservations.len(), 1);
}

#[rstest]
#[tokio::test]
async fn get_reservation_maps_absence_to_not_found() {
    let mut reservations = MockReservationRepository::new();
    reservations.expect_find().returning(|_| Ok(None));

    let service = ReservationQueryService::new(Arc::new(reservations));
    let err = service.get_reservation(12).await.expect_err("absent id");

    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(err.message, "Reservation with ID 12 not found");
}

#[rstest]
#[tokio::test]
async fn active_ids_pass_through() {
    let mut reservations = MockReservationRepository::new();
    reservations
        .expect_active_ids_for_user_and_concert()
        .returning(|_, _| Ok(vec![8]));

    let service = ReservationQueryService::new(Arc::new(reservations));
    let response = service
        .active_reservation_ids(ActiveReservationIdsRequest {
            user_id: "alice".into(),
            concert_id: 3,
        })
        .await
        .expect("query succeeds");

    assert_eq!(response.reservation_ids, vec![8]);
}
