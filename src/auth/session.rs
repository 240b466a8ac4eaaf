use actix_session::Session;
use uuid::Uuid;

use crate::errors::AppError;

const ADMIN_FLAG: &str = "admin_authenticated";
const HOST_ID: &str = "host_id";
const HOST_NAME: &str = "host_name";

/// The signed-in host, as carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub id: Uuid,
    pub name: Option<String>,
}

impl HostIdentity {
    /// Name for the greeting; "Host" when the account has none.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Host")
    }
}

pub fn is_admin(session: &Session) -> bool {
    session.get::<bool>(ADMIN_FLAG).unwrap_or(None).unwrap_or(false)
}

pub fn sign_in_admin(session: &Session) -> Result<(), AppError> {
    session.renew();
    session.insert(ADMIN_FLAG, true)?;
    Ok(())
}

/// Drop the admin flag only; a host signed in on the same browser stays signed in.
pub fn sign_out_admin(session: &Session) {
    session.remove(ADMIN_FLAG);
    session.renew();
}

pub fn get_host(session: &Session) -> Option<HostIdentity> {
    let id = session.get::<Uuid>(HOST_ID).unwrap_or(None)?;
    let name = session.get::<String>(HOST_NAME).unwrap_or(None);
    Some(HostIdentity { id, name })
}

/// Host of the current request; the auth middleware guarantees one exists.
pub fn require_host(session: &Session) -> Result<HostIdentity, AppError> {
    get_host(session).ok_or_else(|| AppError::Session("No host in session".to_string()))
}

pub fn sign_in_host(session: &Session, id: Uuid, name: &str) -> Result<(), AppError> {
    session.renew();
    session.insert(HOST_ID, id)?;
    session.insert(HOST_NAME, name)?;
    Ok(())
}

pub fn sign_out_host(session: &Session) {
    session.remove(HOST_ID);
    session.remove(HOST_NAME);
    session.renew();
}
