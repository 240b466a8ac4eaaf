use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Short US-style date, e.g. 3/7/2025.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

pub fn short_timestamp(ts: DateTime<Utc>) -> String {
    short_date(ts.date_naive())
}

/// Nightly rate with cents only when they are non-zero: 120 -> "$120", 89.5 -> "$89.50".
pub fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}
