pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod download;
pub mod icons;
pub mod list_utils;

/// Milliseconds since the Unix epoch, from the browser clock.
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Today's local date, from the browser clock.
pub fn today() -> chrono::NaiveDate {
    let now = js_sys::Date::new_0();
    chrono::NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// `window.confirm`; a missing window counts as "cancel".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
