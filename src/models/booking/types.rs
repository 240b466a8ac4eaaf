use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::display;

/// Booking status as stored in `bookings.status`. Values outside the known
/// set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub property_id: Uuid,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests_count: i32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    /// Confirmed and checking in today or later.
    pub fn is_upcoming_check_in(&self, today: NaiveDate) -> bool {
        self.is_confirmed() && self.check_in >= today
    }

    /// Confirmed and not yet checked out, so its nights are unavailable.
    pub fn blocks_dates_after(&self, today: NaiveDate) -> bool {
        self.is_confirmed() && self.check_out > today
    }

    pub fn stay_display(&self) -> String {
        format!(
            "{} to {}",
            display::short_date(self.check_in),
            display::short_date(self.check_out)
        )
    }

    pub fn guests_display(&self) -> String {
        let noun = if self.guests_count == 1 { "guest" } else { "guests" };
        format!("{} {noun}", self.guests_count)
    }
}
