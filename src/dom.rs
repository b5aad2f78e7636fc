//! Element lookup and the browser-side `TextSource`/`TextTarget` impls.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Document, Element, File, HtmlInputElement};

use crate::error::{js_error_text, UiError};
use crate::file_calc::{TextSource, TextTarget};
use shared::CalcError;

fn document() -> Result<Document, UiError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| UiError::Js("no document available".to_string()))
}

pub fn element_by_id(id: &str) -> Result<Element, UiError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

/// Like [`element_by_id`] but absence is not an error.
pub fn find_element(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn input_by_id(id: &str) -> Result<HtmlInputElement, UiError> {
    element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::WrongElementType {
            id: id.to_string(),
            expected: "file input",
        })
}

/// Files currently selected in `input`, in list order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let mut out = Vec::new();
    if let Some(files) = input.files() {
        for i in 0..files.length() {
            if let Some(file) = files.item(i) {
                out.push(file);
            }
        }
    }
    out
}

impl TextSource for File {
    fn name(&self) -> String {
        File::name(self)
    }

    async fn text(&self) -> Result<String, CalcError> {
        let name = File::name(self);
        let value = JsFuture::from(Blob::text(self))
            .await
            .map_err(|err| CalcError::read(&name, js_error_text(&err)))?;
        value
            .as_string()
            .ok_or_else(|| CalcError::read(name, "content is not text"))
    }
}

impl TextTarget for Element {
    fn set_text(&self, text: &str) {
        self.set_inner_html(text);
    }
}
