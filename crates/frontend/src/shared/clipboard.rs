//! Clipboard access through the async Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copies `text` and reports whether the browser accepted it.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let ok = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                    .await
                    .is_ok()
            }
            None => false,
        };
        on_done(ok);
    });
}
