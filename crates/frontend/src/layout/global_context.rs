use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Path and query string of the current URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    fn current() -> Self {
        let location = window().map(|w| w.location());
        Self {
            path: location
                .as_ref()
                .and_then(|l| l.pathname().ok())
                .unwrap_or_else(|| "/".to_string()),
            query: location
                .as_ref()
                .and_then(|l| l.search().ok())
                .unwrap_or_default(),
        }
    }
}

/// App-wide UI state: the current location and the sidebar toggle.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub location: RwSignal<Location>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(Location::current()),
            left_open: RwSignal::new(true),
        }
    }

    /// Keeps `location` in sync with back/forward navigation.
    pub fn init_router_integration(&self) {
        let Some(w) = window() else {
            return;
        };
        let this = *self;
        let on_pop = Closure::<dyn FnMut()>::new(move || {
            this.location.set(Location::current());
        });
        if w
            .add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("popstate listener could not be installed");
        }
        on_pop.forget();
    }

    /// Navigates to `path`, adding a history entry.
    pub fn navigate(&self, path: &str) {
        self.update_history(path, false);
    }

    /// Navigates to `path` in place; used for redirects.
    pub fn redirect(&self, path: &str) {
        self.update_history(path, true);
    }

    fn update_history(&self, path: &str, replace: bool) {
        let current = self.location.get_untracked();
        if current.path == path && current.query.is_empty() {
            return;
        }
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let result = if replace {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            } else {
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            };
            if result.is_err() {
                log::warn!("history update to {} failed", path);
            }
        }
        self.location.set(Location::current());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
