use crate::models::host::HostWithProperties;
use crate::models::loaded::Loaded;
use crate::models::store::RentalStore;

/// Headline counts on the admin overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSummary {
    pub total_hosts: usize,
    pub total_properties: usize,
    pub stripe_connected: usize,
}

impl AdminSummary {
    pub fn from_hosts(hosts: &[HostWithProperties]) -> Self {
        AdminSummary {
            total_hosts: hosts.len(),
            total_properties: hosts.iter().map(|h| h.properties.len()).sum(),
            stripe_connected: hosts.iter().filter(|h| h.host.stripe_connected()).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminOverview {
    pub hosts: Vec<HostWithProperties>,
    pub summary: AdminSummary,
}

impl AdminOverview {
    pub fn new(hosts: Vec<HostWithProperties>) -> Self {
        let summary = AdminSummary::from_hosts(&hosts);
        Self { hosts, summary }
    }
}

pub const HOSTS_LOAD_FAILED: &str = "Failed to load hosts data";

pub async fn load(store: &dyn RentalStore) -> Loaded<AdminOverview> {
    Loaded::from_result(store.list_hosts_with_properties().await, HOSTS_LOAD_FAILED)
        .map(AdminOverview::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use crate::models::host::Host;
    use crate::models::property::PropertySummary;

    fn host_with(stripe: Option<&str>, property_count: usize) -> HostWithProperties {
        let id = Uuid::new_v4();
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("ts");
        HostWithProperties {
            host: Host {
                id,
                name: "Host".to_string(),
                email: "host@example.com".to_string(),
                created_at,
                stripe_account_id: stripe.map(String::from),
                google_calendar_connected: false,
            },
            properties: (0..property_count)
                .map(|i| PropertySummary {
                    id: Uuid::new_v4(),
                    host_id: id,
                    name: format!("Unit {i}"),
                    base_rate: 80.0,
                    created_at,
                })
                .collect(),
        }
    }

    #[test]
    fn two_hosts_one_connected() {
        let hosts = vec![host_with(Some("acct_1"), 2), host_with(None, 0)];
        let summary = AdminSummary::from_hosts(&hosts);
        assert_eq!(
            summary,
            AdminSummary { total_hosts: 2, total_properties: 2, stripe_connected: 1 }
        );
    }

    #[test]
    fn total_properties_is_sum_over_hosts() {
        let hosts = vec![host_with(None, 3), host_with(Some("acct_9"), 4), host_with(Some(""), 1)];
        let summary = AdminSummary::from_hosts(&hosts);
        assert_eq!(summary.total_properties, 8);
        assert_eq!(summary.stripe_connected, 1);
    }

    #[test]
    fn empty_host_list() {
        assert_eq!(AdminSummary::from_hosts(&[]), AdminSummary::default());
    }
}
