use serde::{Deserialize, Serialize};

use crate::error::ChartItemError;

/// Everything the client-side runtime needs to mount an interactive chart:
/// the id of the element to mount into and the figure document
/// (`data`, `layout`, `config`).
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChartItem {
    pub target_id: String,
    pub doc: serde_json::Value,
}

impl ChartItem {
    pub fn new(target_id: impl Into<String>, doc: serde_json::Value) -> Self {
        Self {
            target_id: target_id.into(),
            doc,
        }
    }

    pub fn to_json(&self) -> Result<String, ChartItemError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Inverse of [`ChartItem::to_json`] that also rejects documents without
    /// `data`. Used to validate emitted items in tests.
    pub fn from_json(text: &str) -> Result<Self, ChartItemError> {
        let item: Self = serde_json::from_str(text)?;
        if item.doc.get("data").is_none() {
            return Err(ChartItemError::MissingData {
                target_id: item.target_id,
            });
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_carries_target_and_doc() {
        let item = ChartItem::new("graph-area-bokeh", json!({ "data": [], "layout": {} }));
        let text = item.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["target_id"], "graph-area-bokeh");
        assert!(value["doc"]["data"].is_array());
        assert_eq!(ChartItem::from_json(&text).unwrap(), item);
    }

    #[test]
    fn doc_without_data_is_rejected() {
        let text = r#"{"target_id":"t","doc":{"layout":{}}}"#;
        assert!(matches!(
            ChartItem::from_json(text),
            Err(ChartItemError::MissingData { target_id }) if target_id == "t"
        ));
        assert!(matches!(
            ChartItem::from_json("{"),
            Err(ChartItemError::Json(_))
        ));
    }
}
