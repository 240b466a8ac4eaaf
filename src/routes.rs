use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{HttpResponse, cookie::Key, middleware::from_fn, web};

use crate::auth::middleware::{require_admin, require_host};
use crate::errors::{AppError, NOT_FOUND_PAGE};
use crate::handlers::{
    admin_handlers, auth_handlers, booking_handlers, dashboard, property_handlers, widget_handlers,
};

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("staylet_session".to_string())
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Every page route. Expects `Data<dyn RentalStore>`, `Data<AdminCredential>`
/// and `Data<RateLimiter>` on the app, wrapped in `session_middleware`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Malformed ids in the path get the same 404 page as unknown routes
        .app_data(web::PathConfig::default().error_handler(|err, _req| {
            log::debug!("Rejected path: {err}");
            AppError::NotFound.into()
        }))
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/admin/login", web::get().to(admin_handlers::login_page))
        .route("/admin/login", web::post().to(admin_handlers::login_submit))
        .route("/widget/{id}", web::get().to(widget_handlers::show))
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish()
        }))
        // Admin routes
        .service(
            web::scope("/admin")
                .wrap(from_fn(require_admin))
                .route("", web::get().to(admin_handlers::index))
                .route("/logout", web::post().to(admin_handlers::logout)),
        )
        // Host routes
        .route("/logout", web::post().to(auth_handlers::logout))
        .service(
            web::scope("/dashboard")
                .wrap(from_fn(require_host))
                .route("", web::get().to(dashboard::index))
                .route("/properties", web::get().to(property_handlers::list))
                .route("/properties/{id}", web::get().to(property_handlers::detail))
                .route("/bookings", web::get().to(booking_handlers::list)),
        )
        // Default 404 handler (must be registered last)
        .default_service(web::to(|| async {
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(NOT_FOUND_PAGE)
        }));
}
