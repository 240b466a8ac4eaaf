use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::display;

/// A rentable unit as shown on the host's pages.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Property {
    pub id: Uuid,
    pub host_id: Uuid,
    pub name: String,
    pub base_rate: f64,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Property {
    pub fn rate_display(&self) -> String {
        display::money(self.base_rate)
    }

    pub fn manage_path(&self) -> String {
        manage_path(self.id)
    }

    pub fn widget_path(&self) -> String {
        widget_path(self.id)
    }
}

/// The columns the admin overview joins per host.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PropertySummary {
    pub id: Uuid,
    pub host_id: Uuid,
    pub name: String,
    pub base_rate: f64,
    pub created_at: DateTime<Utc>,
}

impl PropertySummary {
    pub fn rate_display(&self) -> String {
        display::money(self.base_rate)
    }

    pub fn widget_path(&self) -> String {
        widget_path(self.id)
    }
}

/// Public booking widget route for a property.
pub fn widget_path(id: Uuid) -> String {
    format!("/widget/{id}")
}

/// Host-side management route for a property.
pub fn manage_path(id: Uuid) -> String {
    format!("/dashboard/properties/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_embed_the_id() {
        let id = Uuid::parse_str("6f1c2b9e-0d4a-4c35-9a51-2f5d3b0c7e11").expect("uuid");
        assert_eq!(widget_path(id), "/widget/6f1c2b9e-0d4a-4c35-9a51-2f5d3b0c7e11");
        assert_eq!(
            manage_path(id),
            "/dashboard/properties/6f1c2b9e-0d4a-4c35-9a51-2f5d3b0c7e11"
        );
    }
}
