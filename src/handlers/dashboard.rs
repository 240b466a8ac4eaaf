use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::auth::session;
use crate::errors::{AppError, render};
use crate::models::dashboard;
use crate::models::store::RentalStore;
use crate::templates_structs::{DashboardTemplate, PageContext};

pub async fn index(
    session: Session,
    store: web::Data<dyn RentalStore>,
) -> Result<HttpResponse, AppError> {
    let host = session::require_host(&session)?;
    let ctx = PageContext::build(&session, &host, "/dashboard");

    let today = Local::now().date_naive();
    let outcome = dashboard::load(store.get_ref(), host.id, today).await;

    render(DashboardTemplate { ctx, outcome })
}
