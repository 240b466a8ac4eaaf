// Template context structures for Askama templates, organized by page family.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::HostIdentity;

/// Common context shared by the signed-in host pages.
/// Templates access these as `ctx.host_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub host_name: String,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, host: &HostIdentity, current_path: &str) -> Self {
        Self {
            host_name: host.display_name().to_string(),
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }

    /// Nav highlighting: exact match for the dashboard, prefix match below it.
    pub fn is_active(&self, path: &str) -> bool {
        if path == "/dashboard" {
            self.current_path == path
        } else {
            self.current_path.starts_with(path)
        }
    }
}

mod admin;
mod common;
mod host;
mod widget;

pub use admin::*;
pub use common::*;
pub use host::*;
pub use widget::*;
