pub mod booking;
pub mod dashboard;
pub mod display;
pub mod host;
pub mod loaded;
pub mod overview;
pub mod property;
pub mod store;
