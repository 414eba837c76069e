//! Client routes and application constants

pub mod routes {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const MANAGER_DASHBOARD: &str = "/manager/dashboard";
    pub const WORK: &str = "/work";
    pub const CUSTOMERS: &str = "/customers";
    pub const CUSTOMER_NEW: &str = "/customers/new";
    pub const RENTALS: &str = "/rentals";
    pub const SALES_TARGETS: &str = "/sales-targets";

    pub fn rental_detail(id: &str) -> String {
        format!("{}/{}", RENTALS, id)
    }
}

/// How long a notification stays on screen
pub const NOTIFICATION_TIMEOUT_MS: u32 = 4_000;

pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";
pub const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";
pub const LOCALE_KEY: &str = "ui_locale";
