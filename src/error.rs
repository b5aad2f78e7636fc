use shared::{CalcError, ChartItemError};
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no element with id {0:?} on the page")]
    MissingElement(String),

    #[error("element {id:?} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("javascript error: {0}")]
    Js(String),

    #[error("failed to draw plot: {0}")]
    Draw(String),

    #[error("failed to serialize figure: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    ChartItem(#[from] ChartItemError),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_text(&value))
    }
}

/// Best-effort text of a thrown JS value.
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
