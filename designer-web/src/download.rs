//! Browser file downloads

use wasm_bindgen::JsCast;

/// Save `blob` under `file_name` through a temporary object URL
pub fn save_blob(blob: &web_sys::Blob, file_name: &str) -> Result<(), String> {
    let url = web_sys::Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create blob URL: {e:?}"))?;
    let result = trigger_download(&url, file_name);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

fn trigger_download(blob_url: &str, file_name: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let body = document.body().ok_or("No document body")?;
    let elem = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {e:?}"))?;
    let _ = elem.set_attribute("href", blob_url);
    let _ = elem.set_attribute("download", file_name);
    let _ = elem.set_attribute("style", "display:none");

    body.append_child(&elem)
        .map_err(|e| format!("Failed to attach link: {e:?}"))?;
    if let Some(html_elem) = elem.dyn_ref::<web_sys::HtmlElement>() {
        html_elem.click();
    }
    let _ = body.remove_child(&elem);
    Ok(())
}
