pub mod actions;
pub mod dashboard;

pub use actions::fetch_services;
pub use dashboard::Dashboard;
