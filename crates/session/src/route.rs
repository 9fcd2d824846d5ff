use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Dashboard,
    MonthlyReport,
}

/// Entry of the navigation bar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::MonthlyReport => "/reporte-mensual",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        [Route::Login, Route::Dashboard, Route::MonthlyReport]
            .into_iter()
            .find(|r| r.path() == path)
    }

    /// The navigation bar is hidden on the login page.
    pub fn shows_navbar(self) -> bool {
        self != Route::Login
    }

    pub fn nav_links() -> [NavLink; 2] {
        [
            NavLink {
                route: Route::Dashboard,
                label: "Product management",
            },
            NavLink {
                route: Route::MonthlyReport,
                label: "Monthly report",
            },
        ]
    }
}
