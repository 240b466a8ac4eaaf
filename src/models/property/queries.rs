use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use super::types::*;

// base_rate is NUMERIC in the schema; cast so it decodes as f64.

/// Properties owned by one host, newest first.
pub async fn find_by_host(pool: &PgPool, host_id: Uuid) -> Result<Vec<Property>, AppError> {
    let properties = sqlx::query_as::<_, Property>(
        "SELECT id, host_id, name, base_rate::float8 AS base_rate, address, created_at \
         FROM properties \
         WHERE host_id = $1 \
         ORDER BY created_at DESC",
    )
    .bind(host_id)
    .fetch_all(pool)
    .await?;
    Ok(properties)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Property>, AppError> {
    let property = sqlx::query_as::<_, Property>(
        "SELECT id, host_id, name, base_rate::float8 AS base_rate, address, created_at \
         FROM properties \
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(property)
}

/// Summaries for every property of the given hosts, newest first.
pub async fn find_summaries_for_hosts(
    pool: &PgPool,
    host_ids: &[Uuid],
) -> Result<Vec<PropertySummary>, AppError> {
    if host_ids.is_empty() {
        return Ok(Vec::new());
    }

    let summaries = sqlx::query_as::<_, PropertySummary>(
        "SELECT id, host_id, name, base_rate::float8 AS base_rate, created_at \
         FROM properties \
         WHERE host_id = ANY($1) \
         ORDER BY created_at DESC",
    )
    .bind(host_ids)
    .fetch_all(pool)
    .await?;
    Ok(summaries)
}
