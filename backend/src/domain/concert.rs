//! Concert entity and the availability read-model derived from it.

use chrono::{DateTime, Utc};

/// Store-assigned concert identifier.
pub type ConcertId = i64;

/// Input payload for creating a [`Concert`].
///
/// Drafts carry caller-supplied fields only; the store assigns the identifier
/// and timestamps. Field validation (non-blank name, seat >= 1) happens in the
/// command service before a draft reaches a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcertDraft {
    pub name: String,
    pub description: String,
    pub seat: u32,
}

/// A bookable event with a fixed total seat capacity.
///
/// The identifier is a monotonic counter starting at 1, never reused even
/// after deletions. Capacity is immutable after creation; there is no concert
/// edit operation, so `updated_at` stays at its creation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concert {
    pub(crate) id: ConcertId,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) seat: u32,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Concert {
    /// Construct a concert from a draft with a store-assigned id and creation
    /// instant.
    pub fn new(id: ConcertId, draft: ConcertDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            seat: draft.seat,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns the concert id.
    pub fn id(&self) -> ConcertId {
        self.id
    }

    /// Returns the concert name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the free-form description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the total seat capacity.
    pub fn seat(&self) -> u32 {
        self.seat
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Derives the availability read-model given the current count of active
    /// reservations.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Concert, ConcertDraft};
    /// use chrono::Utc;
    ///
    /// let concert = Concert::new(
    ///     1,
    ///     ConcertDraft {
    ///         name: "Open Air".into(),
    ///         description: "Summer stage".into(),
    ///         seat: 3,
    ///     },
    ///     Utc::now(),
    /// );
    /// let availability = concert.availability(2);
    /// assert_eq!(availability.available_seats(), 1);
    /// ```
    pub fn availability(&self, reserved_count: usize) -> ConcertAvailability {
        ConcertAvailability {
            concert_id: self.id,
            seat: self.seat,
            reserved_count,
        }
    }
}

/// Seat availability for one concert.
///
/// `available_seats` floors at zero; the admission checks keep the reserved
/// count at or below capacity, so a deficit is only possible if capacity
/// semantics change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcertAvailability {
    pub(crate) concert_id: ConcertId,
    pub(crate) seat: u32,
    pub(crate) reserved_count: usize,
}

impl ConcertAvailability {
    /// Returns the concert this availability belongs to.
    pub fn concert_id(&self) -> ConcertId {
        self.concert_id
    }

    /// Returns the total seat capacity.
    pub fn seat(&self) -> u32 {
        self.seat
    }

    /// Returns the count of active reservations.
    pub fn reserved_count(&self) -> usize {
        self.reserved_count
    }

    /// Returns the remaining seats, floored at zero.
    pub fn available_seats(&self) -> u32 {
        u32::try_from(self.reserved_count)
            .map_or(0, |reserved| self.seat.saturating_sub(reserved))
    }
}
