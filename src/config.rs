use shared::AppConfig;

use crate::dom;

/// `<script id="app-config" type="application/json">` in the host page.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

pub fn load() -> AppConfig {
    match dom::find_element(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(text) => parse_or_default(&text),
        None => AppConfig::default(),
    }
}

fn parse_or_default(text: &str) -> AppConfig {
    AppConfig::from_json(text).unwrap_or_else(|err| {
        log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_falls_back_to_defaults() {
        assert_eq!(parse_or_default("not json"), AppConfig::default());
    }

    #[test]
    fn valid_text_is_used() {
        assert_eq!(parse_or_default(r#"{"sample_count": 10}"#).sample_count, 10);
    }
}
