//! Shared test infrastructure for the page-level tests.
//!
//! - `MemoryStore`: an in-memory `RentalStore` that counts booking queries
//!   and can be told to fail some or all calls.
//! - `test_app!`: the full route table behind a session middleware, backed by
//!   a `MemoryStore`. Declare with `#[macro_use] mod common;`.
//! - Cookie / body / CSRF helpers for driving form posts.

#![allow(dead_code, unused_macros)]

use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use regex::Regex;
use uuid::Uuid;

use staylet::auth::password;
use staylet::errors::AppError;
use staylet::models::booking::{Booking, BookingStatus};
use staylet::models::host::{Host, HostCredential, HostWithProperties, attach_properties};
use staylet::models::property::{Property, PropertySummary};
use staylet::models::store::RentalStore;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ADMIN_PASS: &str = "harbor-lights-2025";
pub const HOST_PASS: &str = "seaside-cottage";
pub const SESSION_COOKIE: &str = "staylet_session";

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Which store calls should return a database error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Failure {
    #[default]
    Nothing,
    Everything,
    /// Host and property reads fail; credential lookups still work.
    Properties,
    /// Only booking reads fail.
    Bookings,
}

#[derive(Default)]
pub struct MemoryStore {
    hosts: Vec<Host>,
    credentials: Vec<HostCredential>,
    properties: Vec<Property>,
    bookings: Vec<Booking>,
    fail: Failure,
    clock: i64,
    pub booking_queries: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every store call returns a database error.
    pub fn failing() -> Self {
        Self { fail: Failure::Everything, ..Self::default() }
    }

    pub fn fail_on(&mut self, failure: Failure) {
        self.fail = failure;
    }

    pub fn booking_query_count(&self) -> usize {
        self.booking_queries.load(Ordering::SeqCst)
    }

    /// Each insert is one minute newer than the previous one.
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += 1;
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("base time");
        base + Duration::minutes(self.clock)
    }

    pub fn add_host(&mut self, name: &str, stripe_account_id: Option<&str>, calendar: bool) -> Uuid {
        let id = Uuid::new_v4();
        let created_at = self.tick();
        self.hosts.push(Host {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at,
            stripe_account_id: stripe_account_id.map(String::from),
            google_calendar_connected: calendar,
        });
        id
    }

    /// Give the host a login: `<name>@example.com` / `HOST_PASS`.
    pub fn add_credential(&mut self, host_id: Uuid) {
        let host = self.hosts.iter().find(|h| h.id == host_id).expect("host exists");
        self.credentials.push(HostCredential {
            host_id,
            name: host.name.clone(),
            email: host.email.clone(),
            password_hash: password::hash_password(HOST_PASS).expect("hash"),
        });
    }

    pub fn add_property(&mut self, host_id: Uuid, name: &str, base_rate: f64) -> Uuid {
        let id = Uuid::new_v4();
        let created_at = self.tick();
        self.properties.push(Property {
            id,
            host_id,
            name: name.to_string(),
            base_rate,
            address: format!("{name} Lane"),
            created_at,
        });
        id
    }

    pub fn add_booking(
        &mut self,
        property_id: Uuid,
        guest_name: &str,
        check_in: NaiveDate,
        status: BookingStatus,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let created_at = self.tick();
        self.bookings.push(Booking {
            id,
            property_id,
            guest_name: guest_name.to_string(),
            check_in,
            check_out: check_in + Duration::days(3),
            guests_count: 2,
            status,
            created_at,
        });
        id
    }

    fn check(&self, call: Failure) -> Result<(), AppError> {
        if self.fail == Failure::Everything || self.fail == call {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RentalStore for MemoryStore {
    async fn list_hosts_with_properties(&self) -> Result<Vec<HostWithProperties>, AppError> {
        self.check(Failure::Properties)?;
        let mut hosts = self.hosts.clone();
        hosts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let mut summaries: Vec<PropertySummary> = self
            .properties
            .iter()
            .map(|p| PropertySummary {
                id: p.id,
                host_id: p.host_id,
                name: p.name.clone(),
                base_rate: p.base_rate,
                created_at: p.created_at,
            })
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(attach_properties(hosts, summaries))
    }

    async fn find_host_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<HostCredential>, AppError> {
        self.check(Failure::Everything)?;
        Ok(self
            .credentials
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    async fn list_properties_for_host(&self, host_id: Uuid) -> Result<Vec<Property>, AppError> {
        self.check(Failure::Properties)?;
        let mut found: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| p.host_id == host_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn find_property(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        self.check(Failure::Properties)?;
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }

    async fn list_bookings_for_properties(
        &self,
        property_ids: &[Uuid],
        limit: Option<i64>,
    ) -> Result<Vec<Booking>, AppError> {
        self.booking_queries.fetch_add(1, Ordering::SeqCst);
        self.check(Failure::Bookings)?;
        let mut found: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| property_ids.contains(&b.property_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(n) = limit {
            found.truncate(n as usize);
        }
        Ok(found)
    }
}

// ============================================================================
// APP SETUP
// ============================================================================

/// Build the app around an `Arc<MemoryStore>`.
macro_rules! test_app {
    ($store:expr) => {{
        let store: std::sync::Arc<dyn staylet::models::store::RentalStore> = $store.clone();
        let admin = staylet::config::AdminCredential::from_plaintext(common::ADMIN_PASS)
            .expect("admin credential");
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(staylet::routes::session_middleware(
                    actix_web::cookie::Key::generate(),
                ))
                .app_data(actix_web::web::Data::from(store))
                .app_data(actix_web::web::Data::new(admin))
                .app_data(actix_web::web::Data::new(
                    staylet::auth::rate_limit::RateLimiter::new(),
                ))
                .configure(staylet::routes::configure),
        )
        .await
    }};
}

/// GET `$uri`, optionally with a session cookie.
macro_rules! get {
    ($app:expr, $uri:expr) => {
        actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::get().uri($uri).to_request(),
        )
        .await
    };
    ($app:expr, $uri:expr, $cookie:expr) => {
        actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::get()
                .uri($uri)
                .cookie($cookie.clone())
                .to_request(),
        )
        .await
    };
}

/// POST a urlencoded form with a session cookie.
macro_rules! post_form {
    ($app:expr, $uri:expr, $cookie:expr, $fields:expr) => {
        actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::post()
                .uri($uri)
                .cookie($cookie.clone())
                .insert_header(("content-type", "application/x-www-form-urlencoded"))
                .set_payload(serde_urlencoded::to_string(&($fields)[..]).expect("encode form"))
                .to_request(),
        )
        .await
    };
}

/// Open `$login_uri`, then post `$fields` plus the page's CSRF token.
/// Evaluates to `(response, cookie)`, the cookie being the latest session.
macro_rules! submit_login {
    ($app:expr, $login_uri:expr, $fields:expr) => {{
        let page = get!($app, $login_uri);
        let cookie = common::session_cookie(&page).expect("login page sets a session");
        let token = common::csrf_token(&common::body_string(page).await);
        let mut fields: Vec<(&str, String)> = $fields
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();
        fields.push(("csrf_token", token));
        let resp = post_form!($app, $login_uri, cookie, &fields);
        let cookie = common::session_cookie(&resp).unwrap_or(cookie);
        (resp, cookie)
    }};
}

// ============================================================================
// RESPONSE HELPERS
// ============================================================================

/// The session cookie set by this response, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// First hidden CSRF token in a rendered form.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("csrf token in page")
}

/// Text of the stat card with the given element id.
pub fn stat(html: &str, id: &str) -> String {
    let re = Regex::new(&format!(r#"id="{id}">([^<]*)<"#)).expect("regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| panic!("stat {id} not found"))
}

pub fn days_from_today(days: i64) -> NaiveDate {
    chrono::Local::now().date_naive() + Duration::days(days)
}
