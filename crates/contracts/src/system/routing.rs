//! Client-side route table.
//!
//! The order form is reachable without logging in when the URL carries an
//! `access` query parameter. Only the presence of the parameter is checked,
//! never its value.

pub const ACCESS_PARAM: &str = "access";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    OrderDashboard,
    AnalyticsDashboard,
    QrPage,
    Services,
    AuditLog,
    ContactSupport,
    OrderForm,
}

impl Route {
    /// Entries of the admin sidebar, top to bottom.
    pub const SIDEBAR: [Route; 6] = [
        Route::OrderDashboard,
        Route::AnalyticsDashboard,
        Route::QrPage,
        Route::Services,
        Route::AuditLog,
        Route::ContactSupport,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::OrderDashboard => "/OrderDashboard",
            Route::AnalyticsDashboard => "/AnalyticsDashboard",
            Route::QrPage => "/QRPAGE",
            Route::Services => "/Services",
            Route::AuditLog => "/AuditLog",
            Route::ContactSupport => "/ContactSupport",
            Route::OrderForm => "/order-form",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::OrderDashboard => "Order Dashboard",
            Route::AnalyticsDashboard => "Analytics",
            Route::QrPage => "QR Code",
            Route::Services => "Services",
            Route::AuditLog => "Audit Log",
            Route::ContactSupport => "Help & Support",
            Route::OrderForm => "Order Form",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Login => "log-in",
            Route::OrderDashboard => "orders",
            Route::AnalyticsDashboard => "bar-chart",
            Route::QrPage => "qr-code",
            Route::Services => "printer",
            Route::AuditLog => "file-text",
            Route::ContactSupport => "help",
            Route::OrderForm => "printer",
        }
    }

    fn admin_from_path(path: &str) -> Option<Route> {
        Route::SIDEBAR
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(&'static str),
}

/// `true` when the query string has an `access` key, whatever its value.
pub fn has_order_form_access(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split('=').next().unwrap_or_default())
        .any(|key| {
            urlencoding::decode(&key.replace('+', " "))
                .map(|decoded| decoded == ACCESS_PARAM)
                .unwrap_or(false)
        })
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Decides what to show for `path` + `query`. Paths match case-insensitively.
pub fn resolve(path: &str, query: &str, logged_in: bool) -> Resolution {
    let path = normalize(path);

    if path.eq_ignore_ascii_case(Route::OrderForm.path()) {
        return if has_order_form_access(query) {
            Resolution::Render(Route::OrderForm)
        } else {
            Resolution::Redirect(Route::Login.path())
        };
    }

    if logged_in {
        if path == "/" {
            return Resolution::Redirect(Route::OrderDashboard.path());
        }
        match Route::admin_from_path(path) {
            Some(route) => Resolution::Render(route),
            None => Resolution::Redirect(Route::OrderDashboard.path()),
        }
    } else if path == "/" || path.eq_ignore_ascii_case("/login") {
        Resolution::Render(Route::Login)
    } else {
        Resolution::Redirect(Route::Login.path())
    }
}
