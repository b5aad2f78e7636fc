//! Binding to the plotly.js runtime the host page provides as `window.Plotly`.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use crate::error::UiError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(
        root: &str,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Mounts a parsed chart item (`{target_id, doc: {data, layout, config}}`)
/// into the element named by its `target_id`.
///
/// The returned promise is not awaited; rendering completes on the JS side.
pub fn embed_item(item: &JsValue) -> Result<(), UiError> {
    let target_id = Reflect::get(item, &"target_id".into())?
        .as_string()
        .ok_or_else(|| UiError::Js("chart item has no target_id".to_string()))?;
    let doc = Reflect::get(item, &"doc".into())?;
    let data = Reflect::get(&doc, &"data".into())?;
    let layout = Reflect::get(&doc, &"layout".into())?;
    let config = Reflect::get(&doc, &"config".into())?;

    let _ = new_plot(&target_id, &data, &layout, &config)?;
    Ok(())
}
