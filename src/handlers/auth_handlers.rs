use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::auth::{csrf, password, session, validate};
use crate::auth::rate_limit::{LoginScope, RateLimiter};
use crate::errors::{AppError, render, see_other};
use crate::models::store::RentalStore;
use crate::templates_structs::LoginTemplate;

use super::admin_handlers::CsrfOnly;
use super::client_ip;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

fn login_form(session: &Session, email: &str, error: Option<&str>) -> Result<HttpResponse, AppError> {
    let csrf_token = csrf::get_or_create_token(session);
    render(LoginTemplate {
        error: error.map(String::from),
        email: email.to_string(),
        csrf_token,
    })
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // If already signed in, go straight to the dashboard
    if session::get_host(&session).is_some() {
        return Ok(see_other("/dashboard"));
    }
    login_form(&session, "", None)
}

pub async fn login_submit(
    req: HttpRequest,
    session: Session,
    form: web::Form<LoginForm>,
    store: web::Data<dyn RentalStore>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let ip = client_ip(&req);
    if limiter.is_blocked(LoginScope::Host, ip) {
        log::warn!("Host login from {ip} blocked by rate limiter");
        return login_form(
            &session,
            &form.email,
            Some("Too many failed login attempts. Please try again later."),
        );
    }

    if let Some(msg) = validate::validate_email(&form.email) {
        return login_form(&session, &form.email, Some(&msg));
    }

    let found = store.find_host_credential_by_email(&form.email).await?;
    let verified = password::matches_account(
        &form.password,
        found.as_ref().map(|cred| cred.password_hash.as_str()),
    );

    match found {
        Some(cred) if verified => {
            limiter.clear(LoginScope::Host, ip);
            session::sign_in_host(&session, cred.host_id, &cred.name)?;
            log::info!("Host {} <{}> signed in", cred.host_id, cred.email);
            Ok(see_other("/dashboard"))
        }
        _ => {
            limiter.record_failure(LoginScope::Host, ip);
            log::warn!("Failed host login from {ip}");
            login_form(&session, &form.email, Some(INVALID_CREDENTIALS))
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session::sign_out_host(&session);
    Ok(see_other("/login"))
}
