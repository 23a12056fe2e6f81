//! Builders wiring the in-memory stores into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use backend::domain::ports::{Clock, ConcertRepository, SystemClock};
use backend::domain::{
    ConcertCommandService, ConcertQueryService, ReservationCommandService,
    ReservationQueryService,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryConcertStore, InMemoryReservationStore};

/// Build the HTTP state over fresh in-memory stores.
///
/// State lives for the lifetime of the process; both services of a store pair
/// share the same store instance so reads observe writes immediately.
pub(crate) fn build_http_state() -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let concert_store = Arc::new(InMemoryConcertStore::new(clock.clone()));
    let reservation_store = Arc::new(InMemoryReservationStore::new(
        concert_store.clone() as Arc<dyn ConcertRepository>,
        clock,
    ));

    web::Data::new(HttpState::new(
        Arc::new(ConcertCommandService::new(concert_store.clone())),
        Arc::new(ConcertQueryService::new(
            concert_store,
            reservation_store.clone(),
        )),
        Arc::new(ReservationCommandService::new(reservation_store.clone())),
        Arc::new(ReservationQueryService::new(reservation_store)),
    ))
}
