use askama::Template;

use crate::models::booking::Booking;
use crate::models::loaded::Loaded;
use crate::models::property::Property;

/// Public booking widget for one property.
#[derive(Template)]
#[template(path = "widget.html")]
pub struct WidgetTemplate {
    pub property: Property,
    pub unavailable: Loaded<Vec<Booking>>,
}
