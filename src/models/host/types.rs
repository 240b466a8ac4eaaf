use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::display;
use crate::models::property::PropertySummary;

/// A host account as listed on the admin overview.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Host {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub stripe_account_id: Option<String>,
    pub google_calendar_connected: bool,
}

impl Host {
    /// An empty account id counts as not connected.
    pub fn stripe_connected(&self) -> bool {
        self.stripe_account_id
            .as_deref()
            .is_some_and(|acct| !acct.trim().is_empty())
    }

    pub fn joined_display(&self) -> String {
        display::short_timestamp(self.created_at)
    }
}

/// A host with its properties joined inline.
#[derive(Debug, Clone, PartialEq)]
pub struct HostWithProperties {
    pub host: Host,
    pub properties: Vec<PropertySummary>,
}

/// Login lookup row: who the host is and their argon2 hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HostCredential {
    pub host_id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
