use crate::view::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

/// Sidebar navigation drawer.
#[derive(Debug, Clone)]
pub struct NavDrawer {
    items: Vec<NavItem>,
}

impl NavDrawer {
    pub fn new() -> Self {
        Self {
            items: Route::ALL
                .iter()
                .map(|route| NavItem {
                    label: route.title(),
                    route: *route,
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn width(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.label.chars().count() + 2)
            .max()
            .unwrap_or(0)
    }

    /// One line per item, the active route prefixed with `>`.
    pub fn render(&self, active: Route) -> Vec<String> {
        self.items
            .iter()
            .map(|item| {
                let marker = if item.route == active { '>' } else { ' ' };
                format!("{} {}", marker, item.label)
            })
            .collect()
    }
}

impl Default for NavDrawer {
    fn default() -> Self {
        Self::new()
    }
}
