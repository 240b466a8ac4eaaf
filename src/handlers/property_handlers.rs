use actix_session::Session;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::auth::session;
use crate::errors::{AppError, render};
use crate::models::loaded::Loaded;
use crate::models::store::RentalStore;
use crate::templates_structs::{PageContext, PropertyDetailTemplate, PropertyListTemplate};

pub async fn list(
    session: Session,
    store: web::Data<dyn RentalStore>,
) -> Result<HttpResponse, AppError> {
    let host = session::require_host(&session)?;
    let ctx = PageContext::build(&session, &host, "/dashboard/properties");

    let outcome = Loaded::from_result(
        store.list_properties_for_host(host.id).await,
        "Failed to load your properties",
    );

    render(PropertyListTemplate { ctx, outcome })
}

/// One of the host's own properties. Someone else's property is a 404.
pub async fn detail(
    session: Session,
    store: web::Data<dyn RentalStore>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let host = session::require_host(&session)?;
    let property_id = path.into_inner();

    let property = store
        .find_property(property_id)
        .await?
        .filter(|p| p.host_id == host.id)
        .ok_or(AppError::NotFound)?;

    let ctx = PageContext::build(&session, &host, "/dashboard/properties");
    let bookings = Loaded::from_result(
        store.list_bookings_for_properties(&[property.id], None).await,
        "Failed to load bookings",
    );

    render(PropertyDetailTemplate { ctx, property, bookings })
}
