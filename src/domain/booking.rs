use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use super::ServiceCategory;

/// Lifecycle state of a booking.
///
/// Legal edges: `Pending -> Accepted | Rejected | Cancelled` and
/// `Accepted -> Completed | Cancelled`. `Rejected`, `Completed`, and
/// `Cancelled` are terminal. Transitions outside this table are rejected by
/// the booking service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BookingStatus::Rejected | BookingStatus::Completed | BookingStatus::Cancelled
        )
    }

    /// Whether the edge `self -> to` is in the transition table.
    pub fn can_transition(self, to: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, to),
            (Pending, Accepted)
                | (Pending, Rejected)
                | (Pending, Cancelled)
                | (Accepted, Completed)
                | (Accepted, Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// A scheduled engagement between a customer and a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub provider_id: String,
    pub provider_name: String,
    pub service: String,
    pub category: ServiceCategory,
    pub date: NaiveDate,
    pub time_slot: String,
    pub status: BookingStatus,
    pub amount: u32,
    pub address: String,
    pub notes: String,
    /// Set once via the rate operation; 1 through 5.
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
}

/// What a customer submits when booking a provider. The provider's name and
/// category are resolved during validation, not supplied by the caller.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub customer_id: String,
    pub customer_name: String,
    pub provider_id: String,
    pub service: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub amount: u32,
    pub address: String,
    pub notes: String,
}

/// Full creation payload sent to the booking service after the provider has
/// been validated against the catalog.
#[derive(Debug, Clone)]
pub struct BookingCreate {
    pub draft: BookingDraft,
    pub provider_name: String,
    pub category: ServiceCategory,
}
