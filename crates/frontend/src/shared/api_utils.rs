//! URLs of the host that served the app.

/// Origin of the current page, e.g. `http://localhost:5000`. The static
/// host serves the API on the same origin.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
