pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod store;
pub mod utils;
pub mod view;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpServiceSource, LocalStorage};
pub use app::{fetch_services, Dashboard};
pub use config::{DashboardConfig, TomlConfig};
pub use domain::model::{AppState, ServiceRecord, ServicesState};
pub use store::Store;
pub use utils::error::{DashboardError, Result};
pub use view::{OutputFormat, Route};
