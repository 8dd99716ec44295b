use crate::utils::error::{DashboardError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    #[default]
    Services,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Services];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Dashboard",
            Route::Services => "Services",
        }
    }

    /// 掛載時是否需要重新抓取服務清單
    pub fn fetches_on_mount(&self) -> bool {
        matches!(self, Route::Services)
    }
}

impl FromStr for Route {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let path = s.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        match path.trim_end_matches('/') {
            "" | "/home" | "home" => Ok(Route::Home),
            "/services" | "services" => Ok(Route::Services),
            _ => Err(DashboardError::RouteError {
                path: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
