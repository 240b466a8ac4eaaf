use askama::Template;

use crate::models::loaded::Loaded;
use crate::models::overview::AdminOverview;

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "admin/overview.html")]
pub struct AdminOverviewTemplate {
    pub csrf_token: String,
    pub outcome: Loaded<AdminOverview>,
}
