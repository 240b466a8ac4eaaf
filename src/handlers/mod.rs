pub mod admin_handlers;
pub mod auth_handlers;
pub mod booking_handlers;
pub mod dashboard;
pub mod property_handlers;
pub mod widget_handlers;

use std::net::{IpAddr, Ipv4Addr};

use actix_web::HttpRequest;

/// Peer address used as the rate-limit key; unspecified when unknown.
pub(crate) fn client_ip(req: &HttpRequest) -> IpAddr {
    req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}
