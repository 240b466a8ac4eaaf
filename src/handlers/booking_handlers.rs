use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::auth::session;
use crate::errors::{AppError, render};
use crate::models::booking::Booking;
use crate::models::loaded::Loaded;
use crate::models::property::Property;
use crate::models::store::RentalStore;
use crate::templates_structs::{BookingListItem, BookingListTemplate, PageContext};

/// Every booking across the host's properties, newest first.
pub async fn list(
    session: Session,
    store: web::Data<dyn RentalStore>,
) -> Result<HttpResponse, AppError> {
    let host = session::require_host(&session)?;
    let ctx = PageContext::build(&session, &host, "/dashboard/bookings");

    let outcome = Loaded::from_result(
        load_items(store.get_ref(), host.id).await,
        "Failed to load bookings",
    );

    render(BookingListTemplate { ctx, outcome })
}

async fn load_items(store: &dyn RentalStore, host_id: Uuid) -> Result<Vec<BookingListItem>, AppError> {
    let properties = store.list_properties_for_host(host_id).await?;
    let property_ids: Vec<Uuid> = properties.iter().map(|p| p.id).collect();
    let bookings = store.list_bookings_for_properties(&property_ids, None).await?;
    Ok(label_with_property(bookings, &properties))
}

fn label_with_property(bookings: Vec<Booking>, properties: &[Property]) -> Vec<BookingListItem> {
    let names: HashMap<Uuid, &str> = properties.iter().map(|p| (p.id, p.name.as_str())).collect();
    bookings
        .into_iter()
        .map(|booking| BookingListItem {
            property_name: names
                .get(&booking.property_id)
                .copied()
                .unwrap_or_default()
                .to_string(),
            booking,
        })
        .collect()
}
