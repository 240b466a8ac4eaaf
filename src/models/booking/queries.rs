use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use super::types::*;

#[derive(sqlx::FromRow)]
struct Row {
    id: Uuid,
    property_id: Uuid,
    guest_name: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests_count: i32,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<Row> for Booking {
    fn from(row: Row) -> Self {
        Booking {
            id: row.id,
            property_id: row.property_id,
            guest_name: row.guest_name,
            check_in: row.check_in,
            check_out: row.check_out,
            guests_count: row.guests_count,
            status: BookingStatus::parse(&row.status),
            created_at: row.created_at,
        }
    }
}

/// Bookings across the given properties, newest first. `limit = None`
/// returns all of them.
pub async fn find_for_properties(
    pool: &PgPool,
    property_ids: &[Uuid],
    limit: Option<i64>,
) -> Result<Vec<Booking>, AppError> {
    if property_ids.is_empty() {
        return Ok(Vec::new());
    }

    // LIMIT NULL is LIMIT ALL in Postgres.
    let rows = sqlx::query_as::<_, Row>(
        "SELECT id, property_id, guest_name, check_in, check_out, guests_count, status, created_at \
         FROM bookings \
         WHERE property_id = ANY($1) \
         ORDER BY created_at DESC \
         LIMIT $2",
    )
    .bind(property_ids)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Booking::from).collect())
}
