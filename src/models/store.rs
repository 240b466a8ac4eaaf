use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::booking::{self, Booking};
use crate::models::host::{self, HostCredential, HostWithProperties};
use crate::models::property::{self, Property};

/// Read access to hosts, properties and bookings. Handlers only talk to
/// storage through this trait.
#[async_trait]
pub trait RentalStore: Send + Sync {
    /// Every host, newest first, with its properties joined inline.
    async fn list_hosts_with_properties(&self) -> Result<Vec<HostWithProperties>, AppError>;

    async fn find_host_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<HostCredential>, AppError>;

    async fn list_properties_for_host(&self, host_id: Uuid) -> Result<Vec<Property>, AppError>;

    async fn find_property(&self, id: Uuid) -> Result<Option<Property>, AppError>;

    /// Bookings for any of `property_ids`, newest first, at most `limit`.
    async fn list_bookings_for_properties(
        &self,
        property_ids: &[Uuid],
        limit: Option<i64>,
    ) -> Result<Vec<Booking>, AppError>;
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalStore for PgStore {
    async fn list_hosts_with_properties(&self) -> Result<Vec<HostWithProperties>, AppError> {
        host::find_all_with_properties(&self.pool).await
    }

    async fn find_host_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<HostCredential>, AppError> {
        host::find_credential_by_email(&self.pool, email).await
    }

    async fn list_properties_for_host(&self, host_id: Uuid) -> Result<Vec<Property>, AppError> {
        property::find_by_host(&self.pool, host_id).await
    }

    async fn find_property(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        property::find_by_id(&self.pool, id).await
    }

    async fn list_bookings_for_properties(
        &self,
        property_ids: &[Uuid],
        limit: Option<i64>,
    ) -> Result<Vec<Booking>, AppError> {
        booking::find_for_properties(&self.pool, property_ids, limit).await
    }
}
