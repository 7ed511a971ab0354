//! dom-to-image bindings
//!
//! The library is loaded as a script from the app shell and exposes the
//! `domtoimage` global.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Rasterize `node` and its subtree into a PNG blob
pub async fn to_blob(node: &web_sys::Element) -> Result<web_sys::Blob, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let dom_to_image = js_sys::Reflect::get(&window, &"domtoimage".into())?;
    if dom_to_image.is_undefined() {
        return Err("dom-to-image is not loaded".into());
    }

    let to_blob_fn = js_sys::Reflect::get(&dom_to_image, &"toBlob".into())?;
    let func = to_blob_fn
        .dyn_ref::<js_sys::Function>()
        .ok_or("toBlob not a function")?;

    let promise = func
        .call1(&dom_to_image, node)?
        .dyn_into::<js_sys::Promise>()?;

    let result = wasm_bindgen_futures::JsFuture::from(promise).await?;
    result.dyn_into::<web_sys::Blob>()
}
