use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::auth::{csrf, session};
use crate::auth::rate_limit::{LoginScope, RateLimiter};
use crate::config::AdminCredential;
use crate::errors::{AppError, render, see_other};
use crate::models::overview;
use crate::models::store::RentalStore;
use crate::templates_structs::{AdminLoginTemplate, AdminOverviewTemplate};

use super::client_ip;

#[derive(Deserialize)]
pub struct AdminLoginForm {
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_form(session: &Session, error: Option<&str>) -> Result<HttpResponse, AppError> {
    let csrf_token = csrf::get_or_create_token(session);
    render(AdminLoginTemplate {
        error: error.map(String::from),
        csrf_token,
    })
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    if session::is_admin(&session) {
        return Ok(see_other("/admin"));
    }
    login_form(&session, None)
}

pub async fn login_submit(
    req: HttpRequest,
    session: Session,
    form: web::Form<AdminLoginForm>,
    admin: web::Data<AdminCredential>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Rate-limit check BEFORE hashing anything
    let ip = client_ip(&req);
    if limiter.is_blocked(LoginScope::Admin, ip) {
        log::warn!("Admin login from {ip} blocked by rate limiter");
        return login_form(
            &session,
            Some("Too many failed login attempts. Please try again later."),
        );
    }

    if admin.verify(&form.password) {
        limiter.clear(LoginScope::Admin, ip);
        session::sign_in_admin(&session)?;
        log::info!("Admin signed in from {ip}");
        Ok(see_other("/admin"))
    } else {
        limiter.record_failure(LoginScope::Admin, ip);
        log::warn!("Failed admin login from {ip}");
        login_form(&session, Some("Invalid password"))
    }
}

pub async fn index(
    session: Session,
    store: web::Data<dyn RentalStore>,
) -> Result<HttpResponse, AppError> {
    let outcome = overview::load(store.get_ref()).await;
    let csrf_token = csrf::get_or_create_token(&session);
    render(AdminOverviewTemplate { csrf_token, outcome })
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session::sign_out_admin(&session);
    log::info!("Admin signed out");
    Ok(see_other("/admin/login"))
}
