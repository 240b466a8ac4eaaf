use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::property::{self, PropertySummary};
use super::types::*;

/// All hosts, newest first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Host>, AppError> {
    let hosts = sqlx::query_as::<_, Host>(
        "SELECT id, name, email, created_at, stripe_account_id, google_calendar_connected \
         FROM hosts \
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(hosts)
}

/// All hosts, newest first, each with its properties attached.
pub async fn find_all_with_properties(pool: &PgPool) -> Result<Vec<HostWithProperties>, AppError> {
    let hosts = find_all(pool).await?;
    let host_ids: Vec<Uuid> = hosts.iter().map(|h| h.id).collect();
    let properties = property::find_summaries_for_hosts(pool, &host_ids).await?;
    Ok(attach_properties(hosts, properties))
}

pub async fn find_credential_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<HostCredential>, AppError> {
    let found = sqlx::query_as::<_, HostCredential>(
        "SELECT h.id AS host_id, h.name, h.email, c.password_hash \
         FROM hosts h \
         JOIN host_credentials c ON c.host_id = h.id \
         WHERE lower(h.email) = lower($1)",
    )
    .bind(email.trim())
    .fetch_optional(pool)
    .await?;
    Ok(found)
}

/// Group properties under their hosts. Host order is kept; properties keep
/// the order they arrived in. Properties whose host is absent are dropped.
pub fn attach_properties(
    hosts: Vec<Host>,
    properties: Vec<PropertySummary>,
) -> Vec<HostWithProperties> {
    let mut by_host: HashMap<Uuid, Vec<PropertySummary>> = HashMap::new();
    for p in properties {
        by_host.entry(p.host_id).or_default().push(p);
    }

    hosts
        .into_iter()
        .map(|host| {
            let properties = by_host.remove(&host.id).unwrap_or_default();
            HostWithProperties { host, properties }
        })
        .collect()
}
