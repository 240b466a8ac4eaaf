use askama::Template;

use super::PageContext;
use crate::models::booking::Booking;
use crate::models::dashboard::DashboardData;
use crate::models::loaded::Loaded;
use crate::models::property::Property;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub outcome: Loaded<DashboardData>,
}

#[derive(Template)]
#[template(path = "properties/list.html")]
pub struct PropertyListTemplate {
    pub ctx: PageContext,
    pub outcome: Loaded<Vec<Property>>,
}

#[derive(Template)]
#[template(path = "properties/detail.html")]
pub struct PropertyDetailTemplate {
    pub ctx: PageContext,
    pub property: Property,
    pub bookings: Loaded<Vec<Booking>>,
}

/// A booking row on the all-bookings page, labelled with its property.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingListItem {
    pub booking: Booking,
    pub property_name: String,
}

#[derive(Template)]
#[template(path = "bookings/list.html")]
pub struct BookingListTemplate {
    pub ctx: PageContext,
    pub outcome: Loaded<Vec<BookingListItem>>,
}
