//! Browser file downloads of generated content.
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn js_err(step: &'static str) -> impl Fn(JsValue) -> String {
    move |e| format!("{step}: {e:?}")
}

/// Offers `content` as a file named `filename`.
pub fn download_text(content: &str, mime: &str, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(js_err("blob"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no body")?;
    let href = Url::create_object_url_with_blob(&blob).map_err(js_err("object url"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err("anchor"))?
        .unchecked_into();
    anchor.set_href(&href);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(js_err("style"))?;

    body.append_child(&anchor).map_err(js_err("append"))?;
    anchor.click();
    let removed = body.remove_child(&anchor).map(|_| ()).map_err(js_err("remove"));
    Url::revoke_object_url(&href).map_err(js_err("revoke"))?;
    removed
}
