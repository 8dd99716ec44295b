use crate::domain::model::AppState;
use crate::view::nav::NavDrawer;
use crate::view::route::Route;
use crate::view::table::ServiceTable;

pub const TITLE: &str = "JACS Services";
pub const RELOADING: &str = "Reloading services...";

/// Top-level layout: title bar, navigation drawer, content panel.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    drawer: NavDrawer,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, state: &AppState, route: Route) -> String {
        let drawer = self.drawer.render(route);
        let content = content_panel(state, route);
        let width = self.drawer.width();

        let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len())];
        for i in 0..drawer.len().max(content.len()) {
            let left = drawer.get(i).map(String::as_str).unwrap_or_default();
            let right = content.get(i).map(String::as_str).unwrap_or_default();
            let line = format!("{:<width$} | {}", left, right, width = width);
            lines.push(line.trim_end().to_string());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

pub fn content_panel(state: &AppState, route: Route) -> Vec<String> {
    let services = &state.services;
    let mut lines = vec![route.title().to_string(), String::new()];

    if services.did_invalidate {
        lines.push(RELOADING.to_string());
    }

    match route {
        Route::Home => {
            lines.push(format!("Services: {}", services.services.len()));
            lines.push(format!(
                "Last updated: {}",
                services
                    .last_updated
                    .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
                    .unwrap_or_else(|| "never".to_string())
            ));
        }
        Route::Services => {
            let table = ServiceTable::from_services(&services.services);
            if table.is_empty() {
                // 尚未載入或端點回傳空陣列
                if !services.did_invalidate {
                    lines.push("No services.".to_string());
                }
            } else {
                lines.extend(table.render());
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ServiceRecord, ServicesState};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn loaded_state() -> AppState {
        let services: Vec<ServiceRecord> = serde_json::from_value(json!([
            {"serviceName": "A", "usage": 1},
            {"serviceName": "B", "usage": 2}
        ]))
        .unwrap();

        AppState {
            services: ServicesState {
                did_invalidate: false,
                services,
                last_updated: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
            },
        }
    }

    #[test]
    fn test_services_view() {
        let out = Shell::new().render(&loaded_state(), Route::Services);
        let expected = "\
JACS Services
=============
  Dashboard | Services
> Services  |
            | Service Name | Usage
            | -------------+------
            | A            | 1
            | B            | 2
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_home_view() {
        let lines = content_panel(&loaded_state(), Route::Home);
        assert_eq!(
            lines,
            vec![
                "Dashboard",
                "",
                "Services: 2",
                "Last updated: 2024-03-01T12:00:00Z",
            ]
        );
    }

    #[test]
    fn test_reloading_keeps_previous_rows() {
        let mut state = loaded_state();
        state.services.did_invalidate = true;

        let lines = content_panel(&state, Route::Services);
        assert_eq!(lines[2], RELOADING);
        assert!(lines.iter().any(|l| l.starts_with("A ")));
    }

    #[test]
    fn test_empty_states() {
        let lines = content_panel(&AppState::default(), Route::Services);
        assert_eq!(lines.last().unwrap(), "No services.");

        let mut state = AppState::default();
        state.services.did_invalidate = true;
        let lines = content_panel(&state, Route::Services);
        assert_eq!(lines.last().unwrap(), RELOADING);
    }
}
