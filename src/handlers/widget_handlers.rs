use actix_web::{web, HttpResponse};
use chrono::Local;
use uuid::Uuid;

use crate::errors::{AppError, render};
use crate::models::loaded::Loaded;
use crate::models::store::RentalStore;
use crate::templates_structs::WidgetTemplate;

/// Public booking widget. No session required.
pub async fn show(
    store: web::Data<dyn RentalStore>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let property = store
        .find_property(path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;

    let today = Local::now().date_naive();
    let unavailable = Loaded::from_result(
        store.list_bookings_for_properties(&[property.id], None).await,
        "Failed to load availability",
    )
    .map(|bookings| {
        let mut stays: Vec<_> = bookings
            .into_iter()
            .filter(|b| b.blocks_dates_after(today))
            .collect();
        stays.sort_by_key(|b| b.check_in);
        stays
    });

    render(WidgetTemplate { property, unavailable })
}
