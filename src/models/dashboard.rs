use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::booking::Booking;
use crate::models::loaded::Loaded;
use crate::models::property::Property;
use crate::models::store::RentalStore;

pub const RECENT_BOOKINGS_LIMIT: i64 = 5;

pub const PROPERTIES_LOAD_FAILED: &str = "Failed to load your properties";
pub const BOOKINGS_LOAD_FAILED: &str = "Failed to load recent bookings";

/// Headline counts on the host dashboard. The booking counts are zero when
/// the bookings stage failed; the page hides them in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_properties: usize,
    pub recent_bookings: usize,
    pub upcoming_check_ins: usize,
}

impl DashboardSummary {
    pub fn compute(properties: &[Property], recent_bookings: &[Booking], today: NaiveDate) -> Self {
        DashboardSummary {
            total_properties: properties.len(),
            recent_bookings: recent_bookings.len(),
            upcoming_check_ins: recent_bookings
                .iter()
                .filter(|b| b.is_upcoming_check_in(today))
                .count(),
        }
    }
}

/// Properties always loaded; the bookings stage carries its own outcome so a
/// booking failure leaves the property list on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub properties: Vec<Property>,
    pub recent_bookings: Loaded<Vec<Booking>>,
    pub summary: DashboardSummary,
}

impl DashboardData {
    /// No properties yet: the page shows the onboarding call-to-action.
    pub fn needs_onboarding(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Fetch the host's properties, then the most recent bookings across them.
/// The booking query is skipped when the host has no properties. Only a
/// failure of the first stage is an error.
pub async fn fetch(
    store: &dyn RentalStore,
    host_id: Uuid,
    today: NaiveDate,
) -> Result<DashboardData, AppError> {
    let properties = store.list_properties_for_host(host_id).await?;

    let property_ids: Vec<Uuid> = properties.iter().map(|p| p.id).collect();

    let recent_bookings = if property_ids.is_empty() {
        Loaded::Ready(Vec::new())
    } else {
        Loaded::from_result(
            store
                .list_bookings_for_properties(&property_ids, Some(RECENT_BOOKINGS_LIMIT))
                .await,
            BOOKINGS_LOAD_FAILED,
        )
    };

    let summary = DashboardSummary::compute(
        &properties,
        recent_bookings.ready().map(Vec::as_slice).unwrap_or_default(),
        today,
    );
    Ok(DashboardData { properties, recent_bookings, summary })
}

/// `fetch`, with a properties failure logged and turned into a renderable outcome.
pub async fn load(store: &dyn RentalStore, host_id: Uuid, today: NaiveDate) -> Loaded<DashboardData> {
    Loaded::from_result(fetch(store, host_id, today).await, PROPERTIES_LOAD_FAILED)
}
